//! Browser binding
//!
//! Exposes the engine to JavaScript. The page owns the canvas, turns
//! pointer events into arena-space x, drives `advance_frame` from
//! `requestAnimationFrame` and draws the JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::sim::{Engine, EngineConfig};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Block Breaker wasm module loaded");
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One session, owned by the page
#[wasm_bindgen]
pub struct WebEngine {
    engine: Engine,
}

#[wasm_bindgen]
impl WebEngine {
    /// Start a session from a JSON config; empty string uses the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WebEngine, JsValue> {
        let config = if config_json.trim().is_empty() {
            EngineConfig::default()
        } else {
            EngineConfig::from_json(config_json).map_err(to_js_error)?
        };
        let engine = Engine::new(config).map_err(to_js_error)?;
        Ok(Self { engine })
    }

    pub fn restart(&mut self) {
        self.engine = self.engine.restart();
    }

    #[wasm_bindgen(js_name = setPaddleTarget)]
    pub fn set_paddle_target(&mut self, x: f32) {
        self.engine.set_paddle_target(x);
    }

    #[wasm_bindgen(js_name = advanceFrame)]
    pub fn advance_frame(&mut self) {
        self.engine.advance_frame();
    }

    /// "playing", "won" or "lost"
    pub fn state(&self) -> String {
        self.engine.state().as_str().to_string()
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.engine.snapshot().to_json().map_err(to_js_error)
    }
}
