// Colored boids on a 2d canvas. Boids of the same color flock together,
// every boid steers clear of every other one, and the canvas edges wrap around.

mod utils;

pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod particle;
pub mod random;
pub mod simulation;
pub mod store;
pub mod surface;
pub mod web;

use wasm_bindgen::prelude::*;

pub use color::Color;
pub use config::SimulationConfig;
pub use controller::Simulation;
pub use error::Error;
pub use particle::Particle;
pub use random::RandomSource;
pub use simulation::{step, Bounds};
pub use store::ParticleStore;
pub use surface::{draw_boid, render_frame, RenderSurface};
pub use web::BoidsApp;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}
