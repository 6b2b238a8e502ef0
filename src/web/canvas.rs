// canvas.rs - 2D canvas surface
//
// Maps paints to the CSS colors in the config and draws with the usual
// begin/arc/fill sequence.

use web_sys::CanvasRenderingContext2d;

use crate::config::FieldConfig;
use crate::render::{Paint, Surface};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    w: f64,
    h: f64,

    positive: String,
    negative: String,
    particle: String,
    outline: String,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, w: f64, h: f64, config: &FieldConfig) -> Self {
        Self {
            ctx,
            w,
            h,
            positive: config.positive_color.clone(),
            negative: config.negative_color.clone(),
            particle: config.particle_color.clone(),
            outline: config.outline_color.clone(),
        }
    }

    fn color(&self, paint: Paint) -> &str {
        match paint {
            Paint::Particle => &self.particle,
            Paint::Positive => &self.positive,
            Paint::Negative => &self.negative,
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.w, self.h)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.w, self.h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64, paint: Paint) {
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU).ok();
        self.ctx.set_fill_style_str(self.color(paint));
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, x: f64, y: f64, r: f64) {
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU).ok();
        self.ctx.set_stroke_style_str(&self.outline);
        self.ctx.stroke();
    }
}
