// crates/cricket-ffi-wasm/src/lib.rs
//
// WASM bindings: a single `simulate_delivery_js` export wrapping the
// cricket-fielding arbiter.

use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;

use cricket_core::{Fielder, RandomSource, SeededRng, SimulationResult, Warning};
use cricket_fielding::simulate_delivery_checked;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

#[derive(Debug, thiserror::Error)]
enum FfiError {
    #[error("failed to obtain browser entropy for the random seed: {0}")]
    Entropy(#[from] getrandom::Error),
}

impl From<FfiError> for JsValue {
    fn from(e: FfiError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

fn random_seed() -> Result<u64, FfiError> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes)?;
    Ok(u64::from_le_bytes(bytes))
}

/* ----------------------------- Shared DTOs ----------------------------- */

#[derive(Debug, Clone, Deserialize)]
pub struct JsSimulateInput {
    pub exit_speed: f64,
    pub horizontal_angle: f64,
    pub vertical_angle: f64,
    pub landing_x: f64,
    pub landing_y: f64,
    pub projected_distance: f64,
    pub max_height: f64,
    pub field_config: Vec<Fielder>,
    pub boundary_distance: f64,
    pub difficulty: String,
    /// Fixed seed for reproducible replay. When absent a fresh seed is
    /// drawn from the browser's crypto RNG on every call.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsSimulateOutput {
    #[serde(flatten)]
    pub result: SimulationResult,
    pub warnings: Vec<Warning>,
}

/// Run one delivery through the engine and return the result plus any
/// sanitization warnings, both as a single flattened JS object.
#[wasm_bindgen]
pub fn simulate_delivery_js(input: JsValue) -> Result<JsValue, JsValue> {
    let inp: JsSimulateInput = swb::from_value(input)?;

    let seed = match inp.seed {
        Some(s) => s,
        None => random_seed().map_err(JsValue::from)?,
    };
    let mut rng: Box<dyn RandomSource> = Box::new(SeededRng::new(seed));

    let (result, warnings) = simulate_delivery_checked(
        inp.exit_speed,
        inp.horizontal_angle,
        inp.vertical_angle,
        inp.landing_x,
        inp.landing_y,
        inp.projected_distance,
        inp.max_height,
        &inp.field_config,
        inp.boundary_distance,
        &inp.difficulty,
        rng.as_mut(),
    );

    swb::to_value(&JsSimulateOutput { result, warnings }).map_err(|e| e.into())
}
