use log::Level;

/// Space left above an anchor target so the fixed navbar doesn't cover it.
pub const NAV_SCROLL_OFFSET: f64 = 80.0;

pub const NAVBAR_SOLID_THRESHOLD: f64 = 100.0;
pub const NAVBAR_HIDE_THRESHOLD: f64 = 200.0;

/// Widest viewport (inclusive) that still gets the mobile menu toggle.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub const SCROLL_DEBOUNCE_MS: u32 = 10;
pub const ISSUE_PRESS_REVERT_MS: u32 = 150;
pub const CTA_LOADING_MS: u32 = 2_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Interaction traces while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
