//! Tesserax renders two concentric wireframe cubes as solid cylindrical
//! pillars, counter-rotating about the vertical axis.

use wasm_bindgen::prelude::*;

pub mod animation;
pub mod config;
pub mod pillar;
mod renderer;
pub mod scene;
pub mod tesseract;
mod utils;

pub use animation::RotationState;
pub use config::{ConfigError, SceneConfig};
pub use pillar::{place_pillar, InvalidEdgeError, PillarTransform};

#[wasm_bindgen(start)]
pub fn dummy_main() {}

/// Entry point for the web page. `config_json` overrides scene constants;
/// pass nothing for the stock scene.
#[wasm_bindgen]
pub fn run(config_json: Option<String>) -> Result<(), JsValue> {
    utils::set_panic_hook();

    let config = match config_json {
        Some(json) => SceneConfig::from_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => SceneConfig::default(),
    };

    renderer::main(config);
    Ok(())
}
