use crate::config::MOBILE_BREAKPOINT;

/// Hamburger toggle state for narrow viewports.
///
/// The toggle is created lazily the first time the viewport is narrow and
/// then kept for the life of the page; the stylesheet hides it when wide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    toggle_created: bool,
    open: bool,
}

impl MobileMenu {
    /// Returns true only on the call that creates the toggle.
    pub fn observe_width(&mut self, viewport_width: f64) -> bool {
        if viewport_width <= MOBILE_BREAKPOINT && !self.toggle_created {
            self.toggle_created = true;
            return true;
        }
        false
    }

    pub fn has_toggle(&self) -> bool {
        self.toggle_created
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
