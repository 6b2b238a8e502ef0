// render.rs - Drawing surfaces
//
// The simulation draws through `Surface` so it never touches the DOM.
// `Encoder` rasterizes into a byte buffer (one byte per pixel):
//   0 = empty
//   1 = particle
//   2 = positive charge
//   3 = negative charge
//   4 = charge outline
// Later draws overwrite earlier ones, so the buffer keeps z-order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Particle,
    Positive,
    Negative,
}

pub trait Surface {
    /// Drawable area in canvas units.
    fn size(&self) -> (f64, f64);

    /// Wipe the whole surface.
    fn clear(&mut self);

    fn fill_circle(&mut self, x: f64, y: f64, r: f64, paint: Paint);

    fn stroke_circle(&mut self, x: f64, y: f64, r: f64);
}

pub const EMPTY: u8 = 0;
pub const PARTICLE: u8 = 1;
pub const POSITIVE: u8 = 2;
pub const NEGATIVE: u8 = 3;
pub const OUTLINE: u8 = 4;

impl Paint {
    pub fn code(self) -> u8 {
        match self {
            Paint::Particle => PARTICLE,
            Paint::Positive => POSITIVE,
            Paint::Negative => NEGATIVE,
        }
    }
}

pub struct Encoder {
    out: Vec<u8>,
    w: u32,
    h: u32,
}

impl Encoder {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            out: vec![EMPTY; (w * h) as usize],
            w,
            h,
        }
    }

    pub fn ptr(&self) -> *const u8 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    /// Code at pixel, `None` outside the buffer.
    pub fn at(&self, x: i32, y: i32) -> Option<u8> {
        if (x as u32) < self.w && (y as u32) < self.h {
            Some(self.out[(y as u32 * self.w + x as u32) as usize])
        } else {
            None
        }
    }

    /// Count of pixels holding `code`.
    pub fn count(&self, code: u8) -> usize {
        self.out.iter().filter(|&&c| c == code).count()
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, code: u8) {
        if (x as u32) < self.w && (y as u32) < self.h {
            let idx = (y as u32 * self.w + x as u32) as usize;
            self.out[idx] = code;
        }
    }

    // Visit every pixel whose distance to (cx, cy) passes `keep`.
    fn scan<F: Fn(f64) -> bool>(&mut self, cx: f64, cy: f64, r: f64, code: u8, keep: F) {
        let x0 = (cx - r - 1.0).floor() as i32;
        let x1 = (cx + r + 1.0).ceil() as i32;
        let y0 = (cy - r - 1.0).floor() as i32;
        let y1 = (cy + r + 1.0).ceil() as i32;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let d = (px as f64 - cx).hypot(py as f64 - cy);
                if keep(d) {
                    self.put(px, py, code);
                }
            }
        }
    }
}

impl Surface for Encoder {
    fn size(&self) -> (f64, f64) {
        (self.w as f64, self.h as f64)
    }

    fn clear(&mut self) {
        self.out.fill(EMPTY);
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64, paint: Paint) {
        self.scan(x, y, r, paint.code(), |d| d <= r);
    }

    fn stroke_circle(&mut self, x: f64, y: f64, r: f64) {
        self.scan(x, y, r, OUTLINE, |d| (d - r).abs() < 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_marks_centre_and_clips_edges() {
        let mut enc = Encoder::new(20, 20);
        enc.fill_circle(0.0, 0.0, 3.0, Paint::Positive);
        assert_eq!(enc.at(0, 0), Some(POSITIVE));
        assert_eq!(enc.at(3, 0), Some(POSITIVE));
        assert_eq!(enc.at(4, 0), Some(EMPTY));
        assert_eq!(enc.at(-1, 0), None);
    }

    #[test]
    fn later_draws_cover_earlier() {
        let mut enc = Encoder::new(30, 30);
        enc.fill_circle(15.0, 15.0, 1.0, Paint::Particle);
        enc.fill_circle(15.0, 15.0, 5.0, Paint::Negative);
        assert_eq!(enc.at(15, 15), Some(NEGATIVE));
        assert_eq!(enc.count(PARTICLE), 0);
    }

    #[test]
    fn stroke_rings_without_touching_centre() {
        let mut enc = Encoder::new(40, 40);
        enc.fill_circle(20.0, 20.0, 10.0, Paint::Positive);
        enc.stroke_circle(20.0, 20.0, 10.0);
        assert_eq!(enc.at(20, 20), Some(POSITIVE));
        assert_eq!(enc.at(30, 20), Some(OUTLINE));
        assert_eq!(enc.at(20, 10), Some(OUTLINE));
    }

    #[test]
    fn clear_empties_buffer() {
        let mut enc = Encoder::new(10, 10);
        enc.fill_circle(5.0, 5.0, 2.0, Paint::Particle);
        assert!(enc.count(PARTICLE) > 0);
        enc.clear();
        assert_eq!(enc.count(EMPTY), enc.len());
    }
}
