//! Request/response layer between the engines and a reactive UI shell.
//!
//! Each call takes the current control values and returns the data for one
//! chart. An incomplete request yields `None`: nothing to render, the shell
//! keeps whatever it showed before.

use crate::analysis::{solution_summary, sweep_with, SweepResult, SweepSettings};
use crate::config::DashboardConfig;
use crate::evolution::{evolve_with, trajectory_steps, EvolutionSettings};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Control values as sent by the shell; any of them may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardRequest {
    pub initial_value: Option<f64>,
    pub start_coef: Option<f64>,
    pub end_coef: Option<f64>,
    pub focus_coef: Option<f64>,
    pub show_full: Option<bool>,
}

impl From<&DashboardConfig> for DashboardRequest {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            initial_value: Some(config.initial_value),
            start_coef: Some(config.start_coef),
            end_coef: Some(config.end_coef),
            focus_coef: Some(config.focus_coef),
            show_full: Some(config.show_full),
        }
    }
}

/// Bifurcation diagram and solution-count chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub sweep: SweepResult,
    pub focus_markers: Vec<(f64, f64)>,
    pub focus_count: usize,
    /// Label for the focus coefficient on the count chart.
    pub annotation: String,
    /// Distinct focus values, sorted and comma-joined.
    pub solution_summary: String,
}

/// Population evolution chart data for the focus coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusResponse {
    pub full: bool,
    pub steps: Vec<usize>,
    pub values: Vec<f64>,
}

pub fn overview(
    request: &DashboardRequest,
    settings: &SweepSettings,
) -> Result<Option<OverviewResponse>> {
    let (Some(initial_value), Some(focus_coef), Some(start_coef), Some(end_coef)) = (
        request.initial_value,
        request.focus_coef,
        request.start_coef,
        request.end_coef,
    ) else {
        log::debug!("Overview request is incomplete, skipping update.");
        return Ok(None);
    };

    let sweep = sweep_with(initial_value, start_coef, end_coef, focus_coef, settings)?;
    let focus_count = sweep.focus_count;

    Ok(Some(OverviewResponse {
        focus_markers: sweep.focus_markers(focus_coef),
        focus_count,
        annotation: format!("coef {}: {} solutions", focus_coef, focus_count),
        solution_summary: solution_summary(&sweep.focus_points, settings.round_digits),
        sweep,
    }))
}

/// Trajectory of the focus coefficient. A missing `show_full` means tail only.
pub fn focus_trajectory(
    request: &DashboardRequest,
    settings: &EvolutionSettings,
) -> Option<FocusResponse> {
    let (Some(initial_value), Some(focus_coef)) = (request.initial_value, request.focus_coef)
    else {
        log::debug!("Focus request is incomplete, skipping update.");
        return None;
    };

    let full = request.show_full.unwrap_or(false);
    let values = evolve_with(initial_value, focus_coef, settings, full);
    let steps = trajectory_steps(settings.steps, values.len());
    Some(FocusResponse { full, steps, values })
}

#[cfg(test)]
mod tests {
    use super::{focus_trajectory, overview, DashboardRequest};
    use crate::analysis::SweepSettings;
    use crate::config::{ControlEvent, DashboardConfig};
    use crate::evolution::EvolutionSettings;

    #[test]
    fn overview_abstains_on_missing_input() {
        let settings = SweepSettings::default();
        let complete = DashboardRequest::from(&DashboardConfig::default());
        let variants = [
            DashboardRequest {
                initial_value: None,
                ..complete
            },
            DashboardRequest {
                start_coef: None,
                ..complete
            },
            DashboardRequest {
                end_coef: None,
                ..complete
            },
            DashboardRequest {
                focus_coef: None,
                ..complete
            },
        ];
        for request in &variants {
            let response = overview(request, &settings).expect("overview");
            assert!(response.is_none());
        }
    }

    #[test]
    fn overview_does_not_require_show_full() {
        let request = DashboardRequest {
            show_full: None,
            ..DashboardRequest::from(&DashboardConfig::default())
        };
        let response = overview(&request, &SweepSettings::default()).expect("overview");
        assert!(response.is_some());
    }

    #[test]
    fn overview_reports_focus_count_and_annotation() {
        let config = DashboardConfig::default()
            .apply(ControlEvent::Zoom { preset: 3 })
            .expect("zoom");
        let response = overview(&DashboardRequest::from(&config), &SweepSettings::default())
            .expect("overview")
            .expect("complete request");

        assert_eq!(response.focus_count, 8);
        assert_eq!(response.annotation, "coef 3.56: 8 solutions");
        assert_eq!(response.focus_markers.len(), 2);
        assert_eq!(response.solution_summary, "0.89");
        assert_eq!(response.sweep.count_series.len(), 251);
    }

    #[test]
    fn overview_propagates_engine_errors() {
        let settings = SweepSettings {
            n_steps_coef: 0,
            ..SweepSettings::default()
        };
        let request = DashboardRequest::from(&DashboardConfig::default());
        assert!(overview(&request, &settings).is_err());
    }

    #[test]
    fn focus_trajectory_full_and_tail() {
        let settings = EvolutionSettings::default();
        let config = DashboardConfig::default();

        let full = focus_trajectory(&DashboardRequest::from(&config), &settings)
            .expect("complete request");
        assert!(full.full);
        assert_eq!(full.values.len(), 81);
        assert_eq!(full.steps.len(), 81);
        assert_eq!(full.values[0], 0.6);

        let tail_config = DashboardConfig {
            show_full: false,
            ..config
        };
        let tail = focus_trajectory(&DashboardRequest::from(&tail_config), &settings)
            .expect("complete request");
        assert!(!tail.full);
        assert_eq!(tail.values.len(), 15);
        assert_eq!(tail.steps.first(), Some(&66));
        assert_eq!(tail.steps.last(), Some(&80));
        assert_eq!(tail.values.as_slice(), &full.values[66..]);
    }

    #[test]
    fn focus_trajectory_defaults_to_tail_and_abstains_on_missing_input() {
        let settings = EvolutionSettings::default();
        let request = DashboardRequest {
            initial_value: Some(0.6),
            focus_coef: Some(3.2),
            ..DashboardRequest::default()
        };
        let response = focus_trajectory(&request, &settings).expect("complete request");
        assert!(!response.full);
        assert_eq!(response.values.len(), 15);

        let missing = DashboardRequest {
            focus_coef: None,
            ..request
        };
        assert!(focus_trajectory(&missing, &settings).is_none());
    }

    #[test]
    fn request_deserializes_from_partial_json() {
        let request: DashboardRequest =
            serde_json::from_str(r#"{"initial_value": 0.6, "focus_coef": null}"#)
                .expect("request");
        assert_eq!(request.initial_value, Some(0.6));
        assert_eq!(request.focus_coef, None);
        assert_eq!(request.start_coef, None);
    }
}
