//! Stateful dashboard wrapper for the page: holds the current control values
//! and answers chart requests against them.

use bifurq_core::analysis::SweepSettings;
use bifurq_core::config::{ControlEvent, DashboardConfig};
use bifurq_core::dashboard::{
    focus_trajectory as core_focus, overview as core_overview, DashboardRequest,
};
use serde::de::DeserializeOwned;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDashboard {
    config: DashboardConfig,
    settings: SweepSettings,
}

fn optional_from_value<T: DeserializeOwned + Default>(
    value: JsValue,
    what: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_value(value).map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

fn serialize<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

impl WasmDashboard {
    pub(crate) fn from_parts(config: DashboardConfig, settings: SweepSettings) -> Self {
        Self { config, settings }
    }

    /// Replaces the configuration if the event changes it.
    pub(crate) fn apply_event(&mut self, event: ControlEvent) -> Option<DashboardConfig> {
        let next = self.config.apply(event)?;
        self.config = next;
        Some(next)
    }

    /// `undefined` means the held configuration; `null` or fields set to
    /// `null` count as missing input.
    fn resolve_request(&self, request: JsValue) -> Result<DashboardRequest, JsValue> {
        if request.is_undefined() {
            return Ok(DashboardRequest::from(&self.config));
        }
        optional_from_value(request, "request")
    }
}

#[wasm_bindgen]
impl WasmDashboard {
    /// `config` and `settings` may be omitted or partial; missing fields take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, settings: JsValue) -> Result<WasmDashboard, JsValue> {
        console_error_panic_hook::set_once();

        let config: DashboardConfig = optional_from_value(config, "config")?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let settings: SweepSettings = optional_from_value(settings, "settings")?;
        if settings.n_steps_coef == 0 {
            return Err(JsValue::from_str(
                "Sweep resolution must be at least one step.",
            ));
        }

        Ok(WasmDashboard::from_parts(config, settings))
    }

    pub fn config(&self) -> Result<JsValue, JsValue> {
        serialize(&self.config)
    }

    pub fn set_initial_value(&mut self, initial_value: f64) -> Result<(), JsValue> {
        let next = DashboardConfig {
            initial_value,
            ..self.config
        };
        next.validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.config = next;
        Ok(())
    }

    pub fn set_range(&mut self, start_coef: f64, end_coef: f64) {
        self.config = DashboardConfig {
            start_coef,
            end_coef,
            ..self.config
        };
    }

    pub fn set_focus(&mut self, focus_coef: f64) {
        self.config = DashboardConfig {
            focus_coef,
            ..self.config
        };
    }

    pub fn set_show_full(&mut self, show_full: bool) {
        self.config = DashboardConfig {
            show_full,
            ..self.config
        };
    }

    /// Selects a zoom preset and returns the updated configuration.
    pub fn apply_zoom(&mut self, preset: u32) -> Result<JsValue, JsValue> {
        match self.apply_event(ControlEvent::Zoom { preset }) {
            Some(config) => serialize(&config),
            None => Ok(JsValue::NULL),
        }
    }

    /// Focuses the clicked coefficient; `null` when there was no point (no update).
    pub fn apply_click(&mut self, coefficient: Option<f64>) -> Result<JsValue, JsValue> {
        match self.apply_event(ControlEvent::Click { coefficient }) {
            Some(config) => serialize(&config),
            None => Ok(JsValue::NULL),
        }
    }

    /// Bifurcation and solution-count data, or `null` if the request is incomplete.
    pub fn overview(&self, request: JsValue) -> Result<JsValue, JsValue> {
        let request = self.resolve_request(request)?;
        let response = core_overview(&request, &self.settings)
            .map_err(|e| JsValue::from_str(&format!("Overview failed: {}", e)))?;
        match response {
            Some(response) => serialize(&response),
            None => Ok(JsValue::NULL),
        }
    }

    /// Focus trajectory data, or `null` if the request is incomplete.
    pub fn focus(&self, request: JsValue) -> Result<JsValue, JsValue> {
        let request = self.resolve_request(request)?;
        match core_focus(&request, &self.settings.evolution) {
            Some(response) => serialize(&response),
            None => Ok(JsValue::NULL),
        }
    }
}
