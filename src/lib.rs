use wasm_bindgen::prelude::*;

// ============================================================================
// CHARGE FIELD - Draggable point charges with a drifting particle grid
// ============================================================================

pub mod config;
pub mod error;
pub mod render;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::FieldConfig;
pub use error::FieldError;
pub use render::{Encoder, Paint, Surface};
pub use sim::{Charge, DragState, History, HistoryView, Particle, Simulation};

/// Headless simulation for pages that do their own painting.
///
/// Renders into a byte buffer (see `render::Encoder`); JS reads it
/// through `output_ptr`/`output_len` and maps codes to colors.
#[wasm_bindgen]
pub struct FieldWorld {
    sim: Simulation<Encoder, ()>,
}

#[wasm_bindgen]
impl FieldWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32, seed: u32) -> Result<FieldWorld, JsValue> {
        Self::build(w, h, seed, FieldConfig::default()).map_err(JsValue::from)
    }

    /// Same as `new`, with JSON tunables.
    pub fn with_config(w: u32, h: u32, seed: u32, json: &str) -> Result<FieldWorld, JsValue> {
        let config = FieldConfig::from_json(json)?;
        Self::build(w, h, seed, config).map_err(JsValue::from)
    }

    pub fn add_charge(&mut self, x: f64, y: f64, value: f64) {
        self.sim.add_charge(x, y, value);
    }

    pub fn add_default_charge(&mut self) {
        self.sim.add_default_charge();
    }

    /// Returns false when the text is not a number.
    pub fn add_charge_from_input(&mut self, text: &str) -> bool {
        self.sim.add_charge_from_input(text).is_ok()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.sim.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.sim.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.sim.pointer_up();
    }

    pub fn reset(&mut self) {
        self.sim.reset();
    }

    pub fn undo(&mut self) {
        self.sim.undo();
    }

    pub fn redo(&mut self) {
        self.sim.redo();
    }

    pub fn history(&self) -> js_sys::Array {
        self.sim.history().iter().map(|e| JsValue::from_str(e)).collect()
    }

    // Accessors for WASM
    pub fn history_len(&self) -> usize { self.sim.history().len() }
    pub fn redo_len(&self) -> usize { self.sim.redo_stack().len() }
    pub fn charge_count(&self) -> usize { self.sim.charges().len() }
    pub fn output_ptr(&self) -> *const u8 { self.sim.surface().ptr() }
    pub fn output_len(&self) -> usize { self.sim.surface().len() }
    pub fn width(&self) -> u32 { self.sim.surface().width() }
    pub fn height(&self) -> u32 { self.sim.surface().height() }
}

impl FieldWorld {
    fn build(w: u32, h: u32, seed: u32, config: FieldConfig) -> Result<FieldWorld, FieldError> {
        let sim = Simulation::new(Encoder::new(w, h), (), config, seed)?;
        Ok(FieldWorld { sim })
    }

    pub fn simulation(&self) -> &Simulation<Encoder, ()> {
        &self.sim
    }
}
