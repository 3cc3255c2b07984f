use super::feedback::card_lift;

pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Inline style for an element that fades in on first sight.
///
/// Until revealed the element sits 20px low and transparent; afterwards the
/// optional hover lift takes over the transform.
pub fn reveal_style(revealed: bool, hovered: bool) -> String {
    if revealed {
        format!(
            "opacity: 1; transform: {}; transition: {};",
            card_lift(hovered),
            REVEAL_TRANSITION
        )
    } else {
        format!(
            "opacity: 0; transform: translateY(20px); transition: {};",
            REVEAL_TRANSITION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_revealed() {
        let style = reveal_style(false, true);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translateY(20px)"));
    }

    #[test]
    fn test_revealed_uses_hover_lift() {
        assert!(reveal_style(true, false).contains("transform: translateY(0);"));
        assert!(reveal_style(true, true).contains("transform: translateY(-4px);"));
        assert!(reveal_style(true, true).contains(REVEAL_TRANSITION));
    }
}
