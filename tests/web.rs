//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use rust_canvas_boids::BoidsApp;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn missing_canvas_is_fatal() {
    rust_canvas_boids::initialize();
    assert!(BoidsApp::new("no-such-canvas").is_err());
}
