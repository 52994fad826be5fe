//! YAML scenario verification
//!
//! A scenario lists generator runs with their expected values or error
//! codes; `fibreg verify` runs them and reports each as PASS or FAIL.

pub mod config;
pub mod runner;

pub use config::{Case, Scenario};
pub use runner::{evaluate_case, load_scenario, run_scenario, CaseResult, ScenarioResult};
