//! Dashboard configuration: control values, zoom presets and the events that
//! change them.
//!
//! A configuration is an immutable value built per request. Events produce a
//! new configuration, or `None` when the event leaves the controls untouched.

use crate::analysis::round_to;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_INITIAL_VALUE: f64 = 0.6;
pub const DEFAULT_START_COEF: f64 = 1.0;
pub const DEFAULT_END_COEF: f64 = 4.0;
pub const DEFAULT_FOCUS_COEF: f64 = 3.56;

/// Decimals kept when the focus coefficient is picked from the diagram.
const CLICK_FOCUS_DIGITS: i32 = 2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Unknown zoom preset {0}.")]
    UnknownZoomPreset(u32),
    #[error("Initial value {0} must lie in [0, 1].")]
    InitialValueOutOfRange(f64),
}

/// Coefficient window: sweep bounds plus the focused coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomWindow {
    pub start_coef: f64,
    pub end_coef: f64,
    pub focus_coef: f64,
}

impl ZoomWindow {
    pub const fn new(start_coef: f64, end_coef: f64, focus_coef: f64) -> Self {
        Self {
            start_coef,
            end_coef,
            focus_coef,
        }
    }
}

impl Default for ZoomWindow {
    fn default() -> Self {
        ZOOM_PRESETS[0]
    }
}

pub const ZOOM_PRESETS: [ZoomWindow; 4] = [
    ZoomWindow::new(DEFAULT_START_COEF, DEFAULT_END_COEF, DEFAULT_FOCUS_COEF),
    ZoomWindow::new(3.0, 3.8, DEFAULT_FOCUS_COEF),
    ZoomWindow::new(3.45, 3.8, DEFAULT_FOCUS_COEF),
    ZoomWindow::new(3.543, 3.58, DEFAULT_FOCUS_COEF),
];

pub fn zoom_preset(index: u32) -> Result<ZoomWindow, ConfigError> {
    ZOOM_PRESETS
        .get(index as usize)
        .copied()
        .ok_or(ConfigError::UnknownZoomPreset(index))
}

/// A user interaction that may move the coefficient window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlEvent {
    /// A zoom preset was selected.
    Zoom { preset: u32 },
    /// The diagram was clicked; `coefficient` is absent while the page loads.
    Click { coefficient: Option<f64> },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub initial_value: f64,
    pub start_coef: f64,
    pub end_coef: f64,
    pub focus_coef: f64,
    /// Show the whole focus trajectory instead of its tail.
    pub show_full: bool,
    pub zoom: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_value: DEFAULT_INITIAL_VALUE,
            start_coef: DEFAULT_START_COEF,
            end_coef: DEFAULT_END_COEF,
            focus_coef: DEFAULT_FOCUS_COEF,
            show_full: true,
            zoom: 0,
        }
    }
}

impl DashboardConfig {
    pub fn window(&self) -> ZoomWindow {
        ZoomWindow::new(self.start_coef, self.end_coef, self.focus_coef)
    }

    pub fn with_window(self, window: ZoomWindow) -> Self {
        Self {
            start_coef: window.start_coef,
            end_coef: window.end_coef,
            focus_coef: window.focus_coef,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.initial_value) {
            return Err(ConfigError::InitialValueOutOfRange(self.initial_value));
        }
        Ok(())
    }

    /// Returns the configuration after `event`, or `None` if nothing changes.
    ///
    /// An unknown zoom preset resets the window to the default range.
    pub fn apply(&self, event: ControlEvent) -> Option<Self> {
        match event {
            ControlEvent::Zoom { preset } => match zoom_preset(preset) {
                Ok(window) => Some(Self {
                    zoom: preset,
                    ..self.with_window(window)
                }),
                Err(err) => {
                    log::warn!("{err} Falling back to the default window.");
                    Some(Self {
                        zoom: 0,
                        ..self.with_window(ZoomWindow::default())
                    })
                }
            },
            ControlEvent::Click { coefficient } => coefficient.map(|x| Self {
                focus_coef: round_to(x, CLICK_FOCUS_DIGITS),
                ..*self
            }),
        }
    }
}
