// Browser glue: finds the canvas, owns the requestAnimationFrame loop, and exposes
// start/stop to JavaScript. Everything here only does anything useful on wasm32.

use crate::config::SimulationConfig;
use crate::controller::Simulation;
use crate::error::Error;
use rand::rngs::ThreadRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

fn window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::NoWindow)
}

fn context_for(canvas_id: &str) -> Result<(CanvasRenderingContext2d, f64, f64), Error> {
    let document = window()?.document().ok_or(Error::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| Error::CanvasNotFound(canvas_id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::NotACanvas(canvas_id.to_owned()))?;
    let context = canvas
        .get_context("2d")
        .map_err(|_| Error::SurfaceUnavailable)?
        .ok_or(Error::SurfaceUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| Error::SurfaceUnavailable)?;
    Ok((context, canvas.width() as f64, canvas.height() as f64))
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, Error> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| Error::FrameRequest(format!("{:?}", e)))
}

#[wasm_bindgen]
pub struct BoidsApp {
    simulation: Rc<RefCell<Simulation<CanvasRenderingContext2d, ThreadRng>>>,
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

#[wasm_bindgen]
impl BoidsApp {
    /// Binds to the canvas with the given id and spawns the flock.
    ///
    /// Fails if the canvas or its 2d context can't be acquired; nothing is retried.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<BoidsApp, JsValue> {
        let _timer = Timer::new("BoidsApp::new");
        let (context, width, height) = context_for(canvas_id).map_err(|e| {
            log::error!("{}", e);
            e
        })?;
        let config = SimulationConfig::default().with_bounds(width, height);
        let simulation = Simulation::new(&config, context, rand::thread_rng());
        Ok(BoidsApp {
            simulation: Rc::new(RefCell::new(simulation)),
            callback: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.simulation.borrow().is_running() {
            return Ok(());
        }
        self.simulation.borrow_mut().start();

        let simulation = self.simulation.clone();
        let callback = self.callback.clone();
        let pending = self.pending.clone();
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(None);
            if !simulation.borrow_mut().on_frame() {
                return;
            }
            if let Some(next) = callback.borrow().as_ref() {
                match request_frame(next) {
                    Ok(id) => pending.set(Some(id)),
                    Err(e) => log::error!("{}", e),
                }
            }
        }) as Box<dyn FnMut()>));

        // The loop keeps itself alive from here on
        let first = self.callback.borrow();
        if let Some(first) = first.as_ref() {
            let id = request_frame(first)?;
            self.pending.set(Some(id));
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        self.simulation.borrow_mut().stop();
        if let Some(id) = self.pending.take() {
            if let Ok(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Drops the closure and with it the cycle back to the callback slot
        self.callback.borrow_mut().take();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.simulation.borrow().is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.simulation.borrow().frame_count() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 {
        self.simulation.borrow().store().len() as u32
    }
}

impl Drop for BoidsApp {
    fn drop(&mut self) {
        self.stop();
    }
}
