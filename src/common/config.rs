//! Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};
use crate::sequence::{
    Arithmetic, Mode, RecursiveParams, DEFAULT_COUNT, DEFAULT_MAX_STEPS, DEFAULT_SEED,
    DEFAULT_THRESHOLD,
};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,

    /// Iterative generator settings
    #[serde(default)]
    pub iterative: IterativeConfig,

    /// Recursive generator settings
    #[serde(default)]
    pub recursive: RecursiveConfig,
}

/// Output rendering
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One `Fibonacci_...: <value>` line per value
    #[default]
    Text,
    /// A single JSON object with every term
    Json,
}

/// Default settings
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Defaults {
    /// Generator to run when `--mode` is not given
    #[serde(default)]
    pub mode: Mode,

    /// Register arithmetic when `--arithmetic` is not given
    #[serde(default)]
    pub arithmetic: Arithmetic,

    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct IterativeConfig {
    /// Number of values to produce
    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for IterativeConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
        }
    }
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct RecursiveConfig {
    /// Starting register pair
    #[serde(default = "default_seed")]
    pub seed: (u8, u8),

    /// Stop after the first value above this
    #[serde(default = "default_threshold")]
    pub threshold: u64,

    /// Give up after this many values below the threshold
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

impl Default for RecursiveConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            threshold: default_threshold(),
            max_steps: default_max_steps(),
        }
    }
}

fn default_seed() -> (u8, u8) {
    DEFAULT_SEED
}
fn default_threshold() -> u64 {
    DEFAULT_THRESHOLD
}
fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

impl RecursiveConfig {
    /// Generator parameters under the given arithmetic
    pub fn params(&self, arithmetic: Arithmetic) -> RecursiveParams {
        RecursiveParams {
            seed: self.seed,
            threshold: self.threshold,
            arithmetic,
            max_steps: self.max_steps,
        }
    }
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Load from `path` if given, otherwise from the default location
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Render as TOML, for `fibreg config`
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.defaults.mode, Mode::Iterative);
        assert_eq!(config.iterative.count, 10);
        assert_eq!(config.recursive.seed, (0, 1));
        assert_eq!(config.recursive.threshold, 100);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse(
            r#"
[defaults]
mode = "recursive"
arithmetic = "unbounded"

[recursive]
seed = [3, 5]
"#,
        )
        .unwrap();

        assert_eq!(config.defaults.mode, Mode::Recursive);
        assert_eq!(config.defaults.arithmetic, Arithmetic::Unbounded);
        assert_eq!(config.defaults.format, OutputFormat::Text);
        assert_eq!(config.recursive.seed, (3, 5));
        assert_eq!(config.recursive.max_steps, DEFAULT_MAX_STEPS);

        let params = config.recursive.params(config.defaults.arithmetic);
        assert_eq!(params.seed, (3, 5));
        assert_eq!(params.arithmetic, Arithmetic::Unbounded);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            Config::parse("[defaults]\nmode = \"sideways\"\n"),
            Err(Error::ConfigParse(_))
        ));
        assert!(matches!(
            Config::parse("[recursive]\nseed = [0, 300]\n"),
            Err(Error::ConfigParse(_))
        ));
        assert!(matches!(
            Config::parse("[iterative]\ncount = -1\n"),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_toml_output_parses_back() {
        let config = Config::default();
        let rendered = config.to_toml().unwrap();
        assert_eq!(Config::parse(&rendered).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            Config::load_from(&path),
            Err(Error::FileRead { .. })
        ));

        let path = dir.path().join("present.toml");
        std::fs::write(&path, "[iterative]\ncount = 3\n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap().iterative.count, 3);
    }
}
