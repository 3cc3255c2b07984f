use crate::config::NAV_SCROLL_OFFSET;

/// The selector for an in-page link, or `None` when the link leaves the page.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Scroll position that puts a section just below the fixed navbar.
pub fn scroll_target(section_offset_top: f64) -> f64 {
    section_offset_top - NAV_SCROLL_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_hash_links_are_anchors() {
        assert_eq!(anchor_selector("#pricing"), Some("#pricing"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("/login"), None);
        assert_eq!(anchor_selector("https://linear.app/#features"), None);
    }

    #[test]
    fn test_target_leaves_room_for_navbar() {
        assert_eq!(scroll_target(1000.0), 920.0);
        assert_eq!(scroll_target(20.0), -60.0);
    }
}
