//! WASM bindings for the bifurcation dashboard.
//!
//! `engine` exposes the stateless evolution and sweep calls; `dashboard`
//! wraps the control values and answers chart requests for the page.

mod dashboard;
mod engine;

pub use dashboard::WasmDashboard;
pub use engine::{default_config, evolve, sweep, zoom_presets};
