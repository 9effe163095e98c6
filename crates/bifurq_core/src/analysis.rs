//! Sweep/analysis engine: drives the evolution engine across a coefficient
//! range and derives the bifurcation diagram and solution counts.

use crate::evolution::{evolve_with, EvolutionSettings};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Number of coefficient intervals across a sweep.
pub const DEFAULT_SWEEP_STEPS: usize = 250;
/// Decimal digits kept when counting distinct tail values.
pub const DEFAULT_ROUND_DIGITS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    pub n_steps_coef: usize,
    pub evolution: EvolutionSettings,
    pub round_digits: i32,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            n_steps_coef: DEFAULT_SWEEP_STEPS,
            evolution: EvolutionSettings::default(),
            round_digits: DEFAULT_ROUND_DIGITS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// (coefficient, value) pairs at or above the sweep's dominance threshold.
    pub bifurcation_points: Vec<(f64, f64)>,
    /// (coefficient, distinct rounded tail values) for every visited coefficient.
    pub count_series: Vec<(f64, usize)>,
    /// Tail values of the focus coefficient strictly above the threshold.
    pub focus_points: Vec<f64>,
    pub focus_count: usize,
    /// Maximum of the first visited coefficient's tail.
    pub first_value: Option<f64>,
}

impl SweepResult {
    /// Focus points paired with their coefficient, for highlighting on the diagram.
    pub fn focus_markers(&self, focus_coef: f64) -> Vec<(f64, f64)> {
        self.focus_points.iter().map(|&v| (focus_coef, v)).collect()
    }
}

/// Coefficients `start + i * step` for `i` in `0..=n_steps`.
///
/// Empty when `start > end` or either bound is NaN.
pub fn coefficient_grid(start: f64, end: f64, n_steps: usize) -> Vec<f64> {
    if n_steps == 0 || !(start <= end) {
        return Vec::new();
    }
    let step = (end - start) / n_steps as f64;
    (0..=n_steps).map(|i| start + i as f64 * step).collect()
}

/// Rounds the exact binary value of `value` to `digits` decimals.
pub fn round_to(value: f64, digits: i32) -> f64 {
    if digits < 0 || !value.is_finite() {
        let scale = 10f64.powi(digits);
        return (value * scale).round() / scale;
    }
    format!("{:.*}", digits as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Distinct values after rounding, in ascending order.
pub fn distinct_rounded(values: &[f64], digits: i32) -> Vec<f64> {
    let mut rounded: Vec<f64> = values.iter().map(|&v| round_to(v, digits)).collect();
    rounded.sort_by(f64::total_cmp);
    rounded.dedup_by(|a, b| a == b || (a.is_nan() && b.is_nan()));
    rounded
}

/// Number of distinct values after rounding to `digits` decimals.
pub fn distinct_count(values: &[f64], digits: i32) -> usize {
    distinct_rounded(values, digits).len()
}

/// Count of the last sampled coefficient at or below `focus_coef`, 0 if none.
pub fn focus_solution_count(count_series: &[(f64, usize)], focus_coef: f64) -> usize {
    count_series
        .iter()
        .filter(|(coef, _)| *coef <= focus_coef)
        .last()
        .map(|&(_, count)| count)
        .unwrap_or(0)
}

/// Distinct rounded values, sorted and comma-joined for display.
pub fn solution_summary(values: &[f64], digits: i32) -> String {
    distinct_rounded(values, digits)
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn sweep(
    initial_value: f64,
    start_coef: f64,
    end_coef: f64,
    focus_coef: f64,
    n_steps_coef: usize,
) -> Result<SweepResult> {
    let settings = SweepSettings {
        n_steps_coef,
        ..SweepSettings::default()
    };
    sweep_with(initial_value, start_coef, end_coef, focus_coef, &settings)
}

/// Sweeps `[start_coef, end_coef]` and builds the bifurcation and count series.
///
/// The maximum of the first coefficient's tail is the threshold for every
/// coefficient of the sweep, including the focus coefficient.
pub fn sweep_with(
    initial_value: f64,
    start_coef: f64,
    end_coef: f64,
    focus_coef: f64,
    settings: &SweepSettings,
) -> Result<SweepResult> {
    if settings.n_steps_coef == 0 {
        bail!("Sweep resolution must be at least one step.");
    }

    log::debug!(
        "Sweeping coefficients {} to {} over {} steps from x0 = {}",
        start_coef,
        end_coef,
        settings.n_steps_coef,
        initial_value
    );

    let digits = settings.round_digits;
    let mut bifurcation_points = Vec::new();
    let mut count_series = Vec::with_capacity(settings.n_steps_coef + 1);
    let mut first_value: Option<f64> = None;

    for coefficient in coefficient_grid(start_coef, end_coef, settings.n_steps_coef) {
        let tail = evolve_with(initial_value, coefficient, &settings.evolution, false);
        if first_value.is_none() {
            first_value = max_value(&tail);
        }
        count_series.push((coefficient, distinct_count(&tail, digits)));

        if let Some(threshold) = first_value {
            bifurcation_points.extend(
                tail.iter()
                    .filter(|&&v| v >= threshold)
                    .map(|&v| (coefficient, v)),
            );
        }
    }

    // A zero threshold counts as unset for the focus series.
    let focus_points = match first_value {
        Some(threshold)
            if threshold != 0.0 && focus_coef >= start_coef && focus_coef <= end_coef =>
        {
            evolve_with(initial_value, focus_coef, &settings.evolution, false)
                .into_iter()
                .filter(|&v| v > threshold)
                .collect()
        }
        _ => Vec::new(),
    };
    let focus_count = focus_solution_count(&count_series, focus_coef);

    log::trace!(
        "Sweep done: {} diagram points, {} focus points, threshold {:?}",
        bifurcation_points.len(),
        focus_points.len(),
        first_value
    );

    Ok(SweepResult {
        bifurcation_points,
        count_series,
        focus_points,
        focus_count,
        first_value,
    })
}

fn max_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().fold(None, |acc, v| match acc {
        None => Some(v),
        Some(m) => Some(m.max(v)),
    })
}
