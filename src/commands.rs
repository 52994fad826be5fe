//! CLI command definitions
//!
//! Defines the clap commands for fibreg.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::common::config::OutputFormat;
use crate::common::{self, Error};
use crate::sequence::{Arithmetic, Mode};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one generator and print its values (default command)
    Run(RunArgs),

    /// Check generator output against a YAML scenario file
    Verify {
        /// Path to the YAML scenario file
        path: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Print only the location of the config file
        #[arg(long)]
        path: bool,
    },
}

/// Options for `run`; anything left unset falls back to the config file
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Generator to run (default: iterative)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of values for the iterative generator (default: 10)
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Seed pair for the recursive generator, e.g. 0,1
    #[arg(long, value_parser = parse_seed_arg)]
    pub seed: Option<(u8, u8)>,

    /// Recursive generator stops after the first value above this (default: 100)
    #[arg(long)]
    pub threshold: Option<u64>,

    /// Register arithmetic (default: wrapping)
    #[arg(long, value_enum)]
    pub arithmetic: Option<Arithmetic>,

    /// Give up on the recursive generator after this many values (default: 1024)
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Output format (default: text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

fn parse_seed_arg(text: &str) -> Result<(u8, u8), Error> {
    common::parse_seed(text)
}
