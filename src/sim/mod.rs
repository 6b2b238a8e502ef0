// sim/ - Charge field simulation
//
// Render-on-mutation: every change to the charges recomputes the particle
// drift, redraws the full scene and appends to the action log. There is no
// frame clock.

mod charge;
mod history;
mod label;
mod particle;

pub use charge::Charge;
pub use history::{History, HistoryView, numbered};
pub use label::{fixed1, number};
pub use particle::Particle;

use log::{debug, info};

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::render::Surface;

const DEFAULT_SEED: u32 = 0xDEADBEEF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    /// Index into the charge list of the held charge.
    Dragging { index: usize },
}

pub struct Simulation<S: Surface, V: HistoryView> {
    surface: S,
    view: V,
    config: FieldConfig,

    charges: Vec<Charge>,
    particles: Vec<Particle>,
    history: History,
    drag: DragState,

    rng: u32,
}

impl<S: Surface, V: HistoryView> Simulation<S, V> {
    pub fn new(surface: S, view: V, config: FieldConfig, seed: u32) -> Result<Self, FieldError> {
        config.validate()?;
        let (w, h) = surface.size();
        let particles = Particle::grid(w, h, config.particle_spacing);
        debug!("simulation {}x{} with {} particles", w, h, particles.len());

        Ok(Self {
            surface,
            view,
            config,
            charges: Vec::new(),
            particles,
            history: History::new(),
            drag: DragState::Idle,
            rng: if seed == 0 { DEFAULT_SEED } else { seed },
        })
    }

    pub fn add_charge(&mut self, x: f64, y: f64, value: f64) {
        self.charges.push(Charge::new(x, y, value));
        self.update_particles();
        self.draw_all();
        debug!("charge {} at ({:.1}, {:.1})", value, x, y);
        self.log_history(format!(
            "Charge ({} C) added at ({}, {})",
            number(value),
            fixed1(x),
            fixed1(y)
        ));
    }

    /// Parse a value-control reading and drop a charge somewhere random.
    pub fn add_charge_from_input(&mut self, text: &str) -> Result<(), FieldError> {
        let value = match text.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => v,
            _ => return Err(FieldError::InvalidChargeValue(text.to_string())),
        };
        let (w, h) = self.surface.size();
        let x = rand(&mut self.rng) * w;
        let y = rand(&mut self.rng) * h;
        self.add_charge(x, y, value);
        Ok(())
    }

    /// The charge placed on load: `default_charge` at the centre.
    pub fn add_default_charge(&mut self) {
        let (w, h) = self.surface.size();
        self.add_charge(w / 2.0, h / 2.0, self.config.default_charge);
    }

    /// Drift every particle toward the first charge only. Later charges
    /// do not contribute.
    pub fn update_particles(&mut self) {
        let Some(first) = self.charges.first() else { return };
        let (tx, ty) = (first.x, first.y);
        let strength = self.config.strength;
        for p in &mut self.particles {
            p.move_toward(tx, ty, strength);
        }
    }

    /// Clear, then particles, then charges on top.
    pub fn draw_all(&mut self) {
        self.surface.clear();
        for p in &self.particles {
            p.draw(&mut self.surface, self.config.particle_radius);
        }
        for c in &self.charges {
            c.draw(&mut self.surface, self.config.charge_radius);
        }
    }

    pub fn log_history(&mut self, action: String) {
        self.history.push(action);
        self.view.show(self.history.entries());
    }

    /// Drop every charge. Particles keep their drifted positions.
    pub fn reset(&mut self) {
        self.charges.clear();
        self.drag = DragState::Idle;
        self.surface.clear();
        info!("simulation reset");
        self.log_history("Simulation reset".to_string());
        self.draw_all();
    }

    /// Step back in the log. Charges are left as they are.
    pub fn undo(&mut self) {
        if let Some(action) = self.history.undo() {
            info!("undo: {}", action);
            self.view.show(self.history.entries());
        }
    }

    pub fn redo(&mut self) {
        if let Some(action) = self.history.redo() {
            info!("redo: {}", action);
            self.view.show(self.history.entries());
        }
    }

    /// Press: grab the first charge under the pointer, if any.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let radius = self.config.charge_radius;
        match self.charges.iter().position(|c| c.is_clicked(x, y, radius)) {
            Some(index) => {
                debug!("drag start on charge {}", index);
                self.drag = DragState::Dragging { index };
                true
            }
            None => false,
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let DragState::Dragging { index } = self.drag else { return };
        let Some(charge) = self.charges.get_mut(index) else { return };
        charge.move_to(x, y);
        self.update_particles();
        self.draw_all();
    }

    /// Release: log where the held charge ended up.
    pub fn pointer_up(&mut self) {
        let DragState::Dragging { index } = self.drag else { return };
        self.drag = DragState::Idle;
        let Some(charge) = self.charges.get(index) else { return };
        let (x, y) = (charge.x, charge.y);
        debug!("drag end on charge {}", index);
        self.log_history(format!("Charge moved to ({}, {})", fixed1(x), fixed1(y)));
    }

    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn redo_stack(&self) -> &[String] {
        self.history.redo_stack()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

// Random number generator (xorshift32), uniform in [0, 1)
#[inline(always)]
pub fn rand(rng: &mut u32) -> f64 {
    *rng ^= *rng << 13;
    *rng ^= *rng >> 17;
    *rng ^= *rng << 5;
    (*rng >> 8) as f64 * (1.0 / 16777216.0)
}
