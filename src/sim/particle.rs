// particle.rs - Field-visualization grains
//
// Grains start on a fixed grid and creep toward a charge every recompute.
// Purely cosmetic; there is no physics behind the step size.

use crate::render::{Paint, Surface};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub paint: Paint,
}

impl Particle {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, paint: Paint::Particle }
    }

    /// Row-major grid covering `[0, w) x [0, h)`.
    pub fn grid(w: f64, h: f64, spacing: f64) -> Vec<Particle> {
        let cols = (w / spacing).ceil().max(0.0) as usize;
        let rows = (h / spacing).ceil().max(0.0) as usize;
        let mut out = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            let y = row as f64 * spacing;
            for col in 0..cols {
                out.push(Particle::new(col as f64 * spacing, y));
            }
        }
        out
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, radius: f64) {
        surface.fill_circle(self.x, self.y, radius, self.paint);
    }

    /// Step `strength` units toward the target. Within one unit the grain
    /// stays put; a step longer than the remaining distance overshoots.
    pub fn move_toward(&mut self, tx: f64, ty: f64, strength: f64) {
        let dx = tx - self.x;
        let dy = ty - self.y;
        let dist = dx.hypot(dy);

        if dist > 1.0 {
            self.x += dx / dist * strength;
            self.y += dy / dist * strength;
        }
    }
}
