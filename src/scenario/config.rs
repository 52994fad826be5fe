//! Scenario file types
//!
//! Defines the data structures for deserializing YAML scenarios.

use serde::Deserialize;

use crate::common::Result;
use crate::sequence::{
    Arithmetic, Generator, Iterative, Mode, Recursive, RecursiveParams, DEFAULT_COUNT,
};

/// A complete scenario loaded from a YAML file
#[derive(Deserialize, Debug)]
pub struct Scenario {
    /// Name of the scenario
    pub name: String,
    /// Optional description of what the scenario checks
    pub description: Option<String>,
    /// Cases to run, in order
    pub cases: Vec<Case>,
}

/// One generator run and its expected outcome
#[derive(Deserialize, Debug)]
pub struct Case {
    pub name: String,
    /// Which generator to run
    pub generator: Mode,
    /// Iterative only
    pub count: Option<usize>,
    /// Recursive only
    pub seed: Option<(u8, u8)>,
    /// Recursive only
    pub threshold: Option<u64>,
    /// Recursive only
    pub max_steps: Option<usize>,
    #[serde(default)]
    pub arithmetic: Arithmetic,
    /// Expected values, in order
    pub expect: Option<Vec<u64>>,
    /// Expected error code (e.g. "step_limit", "overflow")
    pub expect_error: Option<String>,
}

impl Case {
    /// Construct the generator this case describes
    pub fn build(&self) -> Result<Generator> {
        match self.generator {
            Mode::Iterative => {
                let count = self.count.unwrap_or(DEFAULT_COUNT);
                Ok(Iterative::new(count, self.arithmetic).into())
            }
            Mode::Recursive => {
                let defaults = RecursiveParams::default();
                let params = RecursiveParams {
                    seed: self.seed.unwrap_or(defaults.seed),
                    threshold: self.threshold.unwrap_or(defaults.threshold),
                    arithmetic: self.arithmetic,
                    max_steps: self.max_steps.unwrap_or(defaults.max_steps),
                };
                Ok(Recursive::new(params)?.into())
            }
        }
    }
}
