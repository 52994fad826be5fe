//! Error types for fibreg
//!
//! Messages name the flag or config key that resolves the problem where
//! there is one.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fibreg
#[derive(Error, Debug)]
pub enum Error {
    // === Generator Errors ===
    #[error("Value at step {step} does not fit in 64 bits. Use '--arithmetic wrapping' or a smaller count")]
    Overflow { step: usize },

    #[error("Sequence did not pass the threshold within {max_steps} steps. Raise '--max-steps' or pick another seed")]
    StepLimit { max_steps: usize },

    #[error("Threshold {threshold} can never be exceeded by an 8-bit value. Use a threshold below 255 or '--arithmetic unbounded'")]
    UnreachableThreshold { threshold: u64 },

    #[error("max_steps must be at least 1")]
    InvalidMaxSteps,

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Scenario Errors ===
    #[error("{failed} of {total} scenario cases failed")]
    ScenarioFailed { failed: usize, total: usize },
}

impl Error {
    /// Create a file read error for the given path
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Stable snake_case code for generator errors, used by scenario files
    pub fn code(&self) -> &'static str {
        match self {
            Error::Overflow { .. } => "overflow",
            Error::StepLimit { .. } => "step_limit",
            Error::UnreachableThreshold { .. } => "unreachable_threshold",
            Error::InvalidMaxSteps => "invalid_max_steps",
            Error::Config(_) | Error::ConfigParse(_) => "config",
            Error::Io(_) | Error::FileRead { .. } => "io",
            Error::Json(_) => "json",
            Error::ScenarioFailed { .. } => "scenario_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_error_codes() {
        assert_eq!(Error::Overflow { step: 94 }.code(), "overflow");
        assert_eq!(Error::StepLimit { max_steps: 8 }.code(), "step_limit");
        assert_eq!(
            Error::UnreachableThreshold { threshold: 255 }.code(),
            "unreachable_threshold"
        );
        assert_eq!(Error::InvalidMaxSteps.code(), "invalid_max_steps");
    }

    #[test]
    fn test_messages_name_the_fix() {
        let msg = Error::StepLimit { max_steps: 16 }.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("--max-steps"));

        let msg = Error::UnreachableThreshold { threshold: 300 }.to_string();
        assert!(msg.contains("--arithmetic unbounded"));
    }
}
