// web/ - Page wiring
//
// Binds a `Simulation` to the stock page: canvas, history list, three
// buttons and the charge value input, all looked up by fixed ids.
// Listeners are registered once at mount; the drag state inside the
// simulation decides whether a mouse move does anything.

mod canvas;
mod console;

pub use canvas::CanvasSurface;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, EventTarget, HtmlButtonElement, HtmlCanvasElement,
    HtmlInputElement, MouseEvent,
};

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::sim::{HistoryView, Simulation, numbered};

pub const CANVAS_ID: &str = "simulationCanvas";
pub const HISTORY_LIST_ID: &str = "historyList";
pub const RESET_ID: &str = "resetSimulation";
pub const UNDO_ID: &str = "undoAction";
pub const REDO_ID: &str = "redoAction";
pub const CHARGE_VALUE_ID: &str = "chargeValue";

const CONFIG_ATTR: &str = "data-config";

type PageSim = Simulation<CanvasSurface, DomHistory>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console::init();
}

/// Wire the simulation to the page and place the default charge.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| FieldError::Js("window unavailable".into()))?;
    let document = window
        .document()
        .ok_or_else(|| FieldError::Js("document unavailable".into()))?;

    let canvas: HtmlCanvasElement = cast_element(&document, canvas_id)?;
    let ctx = canvas_context(&canvas)?;
    let config = match canvas.get_attribute(CONFIG_ATTR) {
        Some(json) => FieldConfig::from_json(&json)?,
        None => FieldConfig::default(),
    };

    let (w, h) = (canvas.width() as f64, canvas.height() as f64);
    let surface = CanvasSurface::new(ctx, w, h, &config);
    let view = DomHistory::new(&document)?;
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
    let sim = Rc::new(RefCell::new(Simulation::new(surface, view, config, seed)?));

    register_pointer(&document, &canvas, Rc::clone(&sim))?;
    register_controls(&document, Rc::clone(&sim))?;

    sim.borrow_mut().add_default_charge();
    info!("mounted on #{} ({}x{})", canvas_id, w, h);
    Ok(())
}

fn cast_element<T: JsCast>(document: &Document, id: &str) -> Result<T, FieldError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FieldError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| FieldError::WrongElementType(id.to_string()))
}

fn canvas_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, FieldError> {
    canvas
        .get_context("2d")
        .map_err(|e| FieldError::Js(format!("{e:?}")))?
        .ok_or(FieldError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| FieldError::NoContext)
}

/// `<li>` per entry in the history list.
pub struct DomHistory {
    document: Document,
    list: Element,
}

impl DomHistory {
    pub fn new(document: &Document) -> Result<Self, FieldError> {
        let list = document
            .get_element_by_id(HISTORY_LIST_ID)
            .ok_or_else(|| FieldError::MissingElement(HISTORY_LIST_ID.to_string()))?;
        Ok(Self { document: document.clone(), list })
    }

    fn render(&self, entries: &[String]) -> Result<(), JsValue> {
        self.list.set_inner_html("");
        for line in numbered(entries) {
            let item = self.document.create_element("li")?;
            item.set_text_content(Some(&line));
            self.list.append_child(&item)?;
        }
        Ok(())
    }
}

impl HistoryView for DomHistory {
    fn show(&mut self, entries: &[String]) {
        if let Err(e) = self.render(entries) {
            warn!("history list not updated: {:?}", e);
        }
    }
}

fn register_pointer(
    document: &Document,
    canvas: &HtmlCanvasElement,
    sim: Rc<RefCell<PageSim>>,
) -> Result<(), FieldError> {
    // Canvas origin captured at press, reused for the rest of the gesture
    let origin = Rc::new(Cell::new((0.0, 0.0)));

    let down = {
        let sim = Rc::clone(&sim);
        let origin = Rc::clone(&origin);
        let canvas = canvas.clone();
        Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            let e: &MouseEvent = e.unchecked_ref();
            let rect = canvas.get_bounding_client_rect();
            origin.set((rect.left(), rect.top()));
            let x = e.client_x() as f64 - rect.left();
            let y = e.client_y() as f64 - rect.top();
            sim.borrow_mut().pointer_down(x, y);
        })
    };
    listen(canvas, "mousedown", down)?;

    let moved = {
        let sim = Rc::clone(&sim);
        let origin = Rc::clone(&origin);
        Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            let e: &MouseEvent = e.unchecked_ref();
            let (left, top) = origin.get();
            sim.borrow_mut().pointer_move(e.client_x() as f64 - left, e.client_y() as f64 - top);
        })
    };
    listen(document, "mousemove", moved)?;

    let up = Closure::<dyn FnMut(Event)>::new(move |_e: Event| {
        sim.borrow_mut().pointer_up();
    });
    listen(document, "mouseup", up)?;
    Ok(())
}

fn register_controls(document: &Document, sim: Rc<RefCell<PageSim>>) -> Result<(), FieldError> {
    let reset: HtmlButtonElement = cast_element(document, RESET_ID)?;
    let undo: HtmlButtonElement = cast_element(document, UNDO_ID)?;
    let redo: HtmlButtonElement = cast_element(document, REDO_ID)?;
    let value: HtmlInputElement = cast_element(document, CHARGE_VALUE_ID)?;

    on_click(&reset, Rc::clone(&sim), |s| s.reset())?;
    on_click(&undo, Rc::clone(&sim), |s| s.undo())?;
    on_click(&redo, Rc::clone(&sim), |s| s.redo())?;

    // Every edit adds a new charge; non-numeric text is skipped
    let input = {
        let value = value.clone();
        Closure::<dyn FnMut(Event)>::new(move |_e: Event| {
            if let Err(e) = sim.borrow_mut().add_charge_from_input(&value.value()) {
                debug!("charge input skipped: {}", e);
            }
        })
    };
    listen(&value, "input", input)
}

fn on_click<F>(button: &HtmlButtonElement, sim: Rc<RefCell<PageSim>>, act: F) -> Result<(), FieldError>
where
    F: Fn(&mut PageSim) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |_e: Event| {
        act(&mut sim.borrow_mut());
    });
    listen(button, "click", closure)
}

// Handlers stay registered for the life of the page.
fn listen(target: &EventTarget, event: &str, closure: Closure<dyn FnMut(Event)>) -> Result<(), FieldError> {
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| FieldError::Js(format!("{e:?}")))?;
    closure.forget();
    Ok(())
}
