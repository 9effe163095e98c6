/// The `bifurq_core` crate computes the long-term behaviour of the logistic map
/// x_{n+1} = r * x_n * (1 - x_n) for the bifurcation dashboard.
///
/// Key components:
/// - **Traits / Solvers**: `Scalar`, `DynamicalSystem`, `Steppable` and the `DiscreteMap` stepper.
/// - **Evolution**: trajectories and steady-state tails for one coefficient.
/// - **Analysis**: coefficient sweeps, bifurcation points and solution counts.
/// - **Config / Dashboard**: per-request configuration and the request/response
///   interface a UI shell calls into.
pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod evolution;
pub mod logistic;
pub mod solvers;
pub mod traits;
