/// Placement of a ripple circle relative to the button that was clicked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub diameter: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn style(&self) -> String {
        format!(
            "width: {d}px; height: {d}px; left: {}px; top: {}px;",
            self.left,
            self.top,
            d = self.diameter
        )
    }
}

/// Pointer position and button border box, both in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickGeometry {
    pub client_x: f64,
    pub client_y: f64,
    pub button_left: f64,
    pub button_top: f64,
    /// Border widths; the ripple is positioned inside them.
    pub border_left: f64,
    pub border_top: f64,
    pub button_width: f64,
    pub button_height: f64,
}

/// Holds the single live ripple of one button.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleSlot {
    current: Option<Ripple>,
    next_id: u64,
}

impl RippleSlot {
    /// Replaces any existing ripple with one centred on the click.
    pub fn spawn(&mut self, click: ClickGeometry) -> Ripple {
        let diameter = click.button_width.max(click.button_height);
        let radius = diameter / 2.0;
        let ripple = Ripple {
            id: self.next_id,
            diameter,
            left: click.client_x - (click.button_left + click.border_left) - radius,
            top: click.client_y - (click.button_top + click.border_top) - radius,
        };
        self.next_id += 1;
        self.current = Some(ripple);
        ripple
    }

    pub fn current(&self) -> Option<&Ripple> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_at(x: f64, y: f64) -> ClickGeometry {
        ClickGeometry {
            client_x: x,
            client_y: y,
            button_left: 100.0,
            button_top: 50.0,
            border_left: 0.0,
            border_top: 0.0,
            button_width: 120.0,
            button_height: 40.0,
        }
    }

    #[test]
    fn test_centred_on_pointer() {
        let mut slot = RippleSlot::default();
        let ripple = slot.spawn(click_at(160.0, 70.0));
        assert_eq!(ripple.diameter, 120.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -40.0);
        assert_eq!(ripple.style(), "width: 120px; height: 120px; left: 0px; top: -40px;");
    }

    #[test]
    fn test_border_offsets_the_origin() {
        let mut slot = RippleSlot::default();
        let ripple = slot.spawn(ClickGeometry {
            border_left: 1.0,
            border_top: 1.0,
            ..click_at(160.0, 70.0)
        });
        // Centre relative to the padding box lands on the pointer.
        assert_eq!(ripple.left + ripple.diameter / 2.0, 160.0 - 101.0);
        assert_eq!(ripple.top + ripple.diameter / 2.0, 70.0 - 51.0);
        assert_eq!(ripple.left, -1.0);
        assert_eq!(ripple.top, -41.0);
    }

    #[test]
    fn test_successive_clicks_replace() {
        let mut slot = RippleSlot::default();
        let first = slot.spawn(click_at(110.0, 60.0));
        let second = slot.spawn(click_at(200.0, 80.0));

        assert_ne!(first.id, second.id);
        assert_eq!(slot.current(), Some(&second));
    }

    #[test]
    fn test_tall_button_uses_height() {
        let mut slot = RippleSlot::default();
        let ripple = slot.spawn(ClickGeometry {
            button_width: 30.0,
            button_height: 90.0,
            ..click_at(0.0, 0.0)
        });
        assert_eq!(ripple.diameter, 90.0);
    }
}
