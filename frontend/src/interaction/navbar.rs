use crate::config::{NAVBAR_HIDE_THRESHOLD, NAVBAR_SOLID_THRESHOLD};

const SOLID_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";
const TRANSLUCENT_BACKGROUND: &str = "rgba(255, 255, 255, 0.8)";
const SOLID_SHADOW: &str = "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarAppearance {
    /// Opaque background with a drop shadow.
    pub solid: bool,
    /// Slid up out of view.
    pub hidden: bool,
}

impl NavbarAppearance {
    pub fn style(&self) -> String {
        let (background, shadow) = if self.solid {
            (SOLID_BACKGROUND, SOLID_SHADOW)
        } else {
            (TRANSLUCENT_BACKGROUND, "none")
        };
        let transform = if self.hidden { "translateY(-100%)" } else { "translateY(0)" };
        format!(
            "background-color: {}; box-shadow: {}; transform: {};",
            background, shadow, transform
        )
    }
}

/// Remembers the previous scroll offset so direction can be derived.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarScroll {
    last_scroll_top: f64,
}

impl NavbarScroll {
    pub fn update(&mut self, scroll_top: f64) -> NavbarAppearance {
        let appearance = NavbarAppearance {
            solid: scroll_top > NAVBAR_SOLID_THRESHOLD,
            hidden: scroll_top > self.last_scroll_top && scroll_top > NAVBAR_HIDE_THRESHOLD,
        };
        self.last_scroll_top = scroll_top;
        appearance
    }
}
