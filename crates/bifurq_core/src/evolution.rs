//! Evolution engine: iterates the logistic map from a start value and returns
//! either the whole trajectory or its steady-state tail.

use crate::logistic::LogisticMap;
use crate::solvers::DiscreteMap;
use crate::traits::{Scalar, Steppable};
use serde::{Deserialize, Serialize};

/// Number of map applications per trajectory.
pub const DEFAULT_STEPS: usize = 80;
/// Number of trailing values kept as the steady-state sample.
pub const DEFAULT_KEEP_TAIL: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionSettings {
    pub steps: usize,
    pub keep_tail: usize,
}

impl Default for EvolutionSettings {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            keep_tail: DEFAULT_KEEP_TAIL,
        }
    }
}

/// Full trajectory of `steps + 1` values; index 0 is `start`.
pub fn iterate<T: Scalar>(start: T, coefficient: T, steps: usize) -> Vec<T> {
    let system = LogisticMap::new(coefficient);
    let mut stepper = DiscreteMap::<T>::new();
    let mut state = start;

    let mut trajectory = Vec::with_capacity(steps + 1);
    trajectory.push(start);
    while stepper.iterations() < steps {
        stepper.step(&system, &mut state);
        trajectory.push(state);
    }
    trajectory
}

/// Iterates the map `steps` times from `start`.
///
/// With `full` the whole trajectory is returned, otherwise only its last
/// `keep_tail` values. A tail longer than the trajectory yields the whole
/// trajectory.
pub fn evolve(
    start: f64,
    coefficient: f64,
    steps: usize,
    keep_tail: usize,
    full: bool,
) -> Vec<f64> {
    let mut trajectory = iterate(start, coefficient, steps);
    if !full {
        let skip = trajectory.len().saturating_sub(keep_tail);
        trajectory.drain(..skip);
    }
    trajectory
}

pub fn evolve_with(
    start: f64,
    coefficient: f64,
    settings: &EvolutionSettings,
    full: bool,
) -> Vec<f64> {
    evolve(start, coefficient, settings.steps, settings.keep_tail, full)
}

/// Iteration indices of the last `len` values of a `steps`-step trajectory.
pub fn trajectory_steps(steps: usize, len: usize) -> Vec<usize> {
    let first = (steps + 1).saturating_sub(len);
    (first..=steps).collect()
}
