//! fibreg - Fibonacci generators over fixed-width registers
//!
//! Runs either the iterative register simulation or the seeded recursive
//! generator and prints one line per value.

use clap::Parser;
use fibreg::commands::{Commands, RunArgs};
use fibreg::common::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fibreg", about = "Register-style and recursive Fibonacci generators")]
#[command(version, long_about = None)]
struct Cli {
    /// Configuration file (default: platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.verbose);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Run(RunArgs::default()));

    if let Err(e) = fibreg::cli::dispatch(command, cli.config.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
