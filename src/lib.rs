pub mod compose;
pub mod config;
pub mod dsp;
pub mod error;
pub mod melody;
pub mod model;
pub mod phoneme;
pub mod rng;

use wasm_bindgen::prelude::*;

use crate::compose::RandomStyle;
use crate::config::SynthConfig;
use crate::error::ComposeError;
use crate::model::{ComposeRequest, SingingRequest, SingingResult, SongResult};

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the singstudio-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Compose a song from singing objects using the default configuration
/// and OS-random key/tempo.
pub fn compose(request: &ComposeRequest) -> Result<SongResult, ComposeError> {
    crate::compose::compose(&SynthConfig::default(), request, &mut RandomStyle)
}

/// Render a singing track from lyrics using the default configuration.
pub fn compose_singing(request: &SingingRequest) -> Result<SingingResult, ComposeError> {
    crate::compose::compose_singing(&SynthConfig::default(), request)
}

/// WASM-exposed: compose a song from a ComposeRequest value.
#[wasm_bindgen]
pub fn compose_song(request: JsValue) -> Result<JsValue, JsValue> {
    let request: ComposeRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let result = compose(&request).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a singing track from a SingingRequest value.
#[wasm_bindgen]
pub fn compose_singing_track(request: JsValue) -> Result<JsValue, JsValue> {
    let request: SingingRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let result = compose_singing(&request).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&format!("{e}")))
}
