//! Transform feedback for pointer interaction with buttons and cards.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PressFeedback {
    #[default]
    Rest,
    Hover,
    Pressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down,
    Up,
}

impl PressFeedback {
    pub fn next(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter | PointerEvent::Up => PressFeedback::Hover,
            PointerEvent::Leave => PressFeedback::Rest,
            PointerEvent::Down => PressFeedback::Pressed,
        }
    }

    pub fn transform(self) -> &'static str {
        match self {
            PressFeedback::Rest => "translateY(0)",
            PressFeedback::Hover => "translateY(-1px)",
            PressFeedback::Pressed => "scale(0.98)",
        }
    }
}

pub fn card_lift(hovered: bool) -> &'static str {
    if hovered {
        "translateY(-4px)"
    } else {
        "translateY(0)"
    }
}

pub fn issue_press(pressed: bool) -> &'static str {
    if pressed {
        "scale(0.98)"
    } else {
        "scale(1)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_cycle() {
        let mut state = PressFeedback::default();
        let mut seen = Vec::new();
        for event in [PointerEvent::Enter, PointerEvent::Down, PointerEvent::Up, PointerEvent::Leave] {
            state = state.next(event);
            seen.push(state.transform());
        }
        assert_eq!(
            seen,
            vec!["translateY(-1px)", "scale(0.98)", "translateY(-1px)", "translateY(0)"]
        );
    }

    #[test]
    fn test_leave_while_pressed_rests() {
        let state = PressFeedback::Pressed.next(PointerEvent::Leave);
        assert_eq!(state, PressFeedback::Rest);
    }

    #[test]
    fn test_card_and_issue_transforms() {
        assert_eq!(card_lift(true), "translateY(-4px)");
        assert_eq!(card_lift(false), "translateY(0)");
        assert_eq!(issue_press(true), "scale(0.98)");
        assert_eq!(issue_press(false), "scale(1)");
    }
}
