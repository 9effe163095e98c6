//! Free engine entry points and shared constants.

use bifurq_core::analysis::{sweep as core_sweep, SweepResult, DEFAULT_SWEEP_STEPS};
use bifurq_core::config::{DashboardConfig, ZOOM_PRESETS};
use bifurq_core::evolution::{evolve as core_evolve, DEFAULT_KEEP_TAIL, DEFAULT_STEPS};
use js_sys::Float64Array;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Iterates the logistic map; omitted arguments take the dashboard defaults.
#[wasm_bindgen]
pub fn evolve(
    start: f64,
    coefficient: f64,
    steps: Option<u32>,
    keep_tail: Option<u32>,
    full: Option<bool>,
) -> Float64Array {
    let values = core_evolve(
        start,
        coefficient,
        steps.map_or(DEFAULT_STEPS, |s| s as usize),
        keep_tail.map_or(DEFAULT_KEEP_TAIL, |k| k as usize),
        full.unwrap_or(false),
    );
    Float64Array::from(values.as_slice())
}

#[wasm_bindgen]
pub fn sweep(
    initial_value: f64,
    start_coef: f64,
    end_coef: f64,
    focus_coef: f64,
    n_steps_coef: Option<u32>,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let n_steps = n_steps_coef.map_or(DEFAULT_SWEEP_STEPS, |n| n as usize);
    let result = core_sweep(initial_value, start_coef, end_coef, focus_coef, n_steps)
        .map_err(|e| JsValue::from_str(&format!("Sweep failed: {}", e)))?;

    to_value(&SweepPayload::from(result))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Zoom preset windows, indexed by preset number.
#[wasm_bindgen]
pub fn zoom_presets() -> Result<JsValue, JsValue> {
    to_value(&ZOOM_PRESETS)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn default_config() -> Result<JsValue, JsValue> {
    to_value(&DashboardConfig::default())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Sweep series split into the x/y columns the charts consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SweepPayload {
    pub(crate) bifurcation_x: Vec<f64>,
    pub(crate) bifurcation_y: Vec<f64>,
    pub(crate) count_x: Vec<f64>,
    pub(crate) count_y: Vec<usize>,
    pub(crate) focus_points: Vec<f64>,
    pub(crate) focus_count: usize,
}

impl From<SweepResult> for SweepPayload {
    fn from(result: SweepResult) -> Self {
        let (bifurcation_x, bifurcation_y) = result.bifurcation_points.into_iter().unzip();
        let (count_x, count_y) = result.count_series.into_iter().unzip();
        Self {
            bifurcation_x,
            bifurcation_y,
            count_x,
            count_y,
            focus_points: result.focus_points,
            focus_count: result.focus_count,
        }
    }
}
