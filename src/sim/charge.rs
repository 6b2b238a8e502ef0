// charge.rs - Draggable point charges

use crate::render::{Paint, Surface};

#[derive(Clone, Debug, PartialEq)]
pub struct Charge {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl Charge {
    pub fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }

    /// Zero counts as negative.
    pub fn paint(&self) -> Paint {
        if self.value > 0.0 { Paint::Positive } else { Paint::Negative }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, radius: f64) {
        surface.fill_circle(self.x, self.y, radius, self.paint());
        surface.stroke_circle(self.x, self.y, radius);
    }

    /// Strictly inside the disc; the rim does not count.
    #[inline]
    pub fn is_clicked(&self, px: f64, py: f64, radius: f64) -> bool {
        (self.x - px).hypot(self.y - py) < radius
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CHARGE_RADIUS;
    use crate::render::{Encoder, NEGATIVE, POSITIVE};

    #[test]
    fn hit_test_is_exclusive_at_rim() {
        let c = Charge::new(50.0, 50.0, 1.0);
        assert!(c.is_clicked(50.0, 50.0, CHARGE_RADIUS));
        assert!(c.is_clicked(59.9, 50.0, CHARGE_RADIUS));
        assert!(!c.is_clicked(60.0, 50.0, CHARGE_RADIUS));
        assert!(!c.is_clicked(56.0, 58.0, CHARGE_RADIUS)); // 6-8-10
        assert!(c.is_clicked(55.0, 58.0, CHARGE_RADIUS));
    }

    #[test]
    fn zero_value_paints_negative() {
        assert_eq!(Charge::new(0.0, 0.0, 0.0).paint(), Paint::Negative);
        assert_eq!(Charge::new(0.0, 0.0, -2.5).paint(), Paint::Negative);
        assert_eq!(Charge::new(0.0, 0.0, 0.1).paint(), Paint::Positive);
    }

    #[test]
    fn move_ignores_bounds() {
        let mut c = Charge::new(10.0, 10.0, 1.0);
        c.move_to(-500.0, 9000.0);
        assert_eq!((c.x, c.y), (-500.0, 9000.0));
    }

    #[test]
    fn draw_fills_by_sign() {
        let mut enc = Encoder::new(100, 100);
        Charge::new(30.0, 30.0, 2.0).draw(&mut enc, CHARGE_RADIUS);
        Charge::new(70.0, 70.0, -1.0).draw(&mut enc, CHARGE_RADIUS);
        assert_eq!(enc.at(30, 30), Some(POSITIVE));
        assert_eq!(enc.at(70, 70), Some(NEGATIVE));
    }
}
