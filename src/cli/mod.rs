//! CLI command handling
//!
//! Resolves flags against the config file, runs the selected generator,
//! and formats output.

pub mod render;

use std::io::{self, Write};
use std::path::Path;

use crate::commands::{Commands, RunArgs};
use crate::common::config::{Config, OutputFormat};
use crate::common::{paths, Error, Result};
use crate::scenario;
use crate::sequence::{Generator, Iterative, Mode, Recursive, RecursiveParams};

/// Dispatch a CLI command
pub fn dispatch(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Run(args) => {
            let config = Config::resolve(config_path)?;
            let (generator, format) = plan_run(&args, &config)?;
            tracing::debug!(
                mode = %generator.mode(),
                arithmetic = %generator.arithmetic(),
                "Running generator"
            );

            let stdout = io::stdout();
            let mut out = stdout.lock();
            let written = match format {
                OutputFormat::Text => render::write_text(&mut out, generator)?,
                OutputFormat::Json => render::write_json(&mut out, generator)?,
            };
            out.flush()?;
            tracing::debug!(values = written, "Run complete");

            Ok(())
        }

        Commands::Verify { path } => {
            let result = scenario::run_scenario(&path)?;
            if result.failed() > 0 {
                return Err(Error::ScenarioFailed {
                    failed: result.failed(),
                    total: result.cases.len(),
                });
            }
            Ok(())
        }

        Commands::Config { path } => {
            let location = config_path
                .map(Path::to_path_buf)
                .or_else(paths::config_path);

            if path {
                match location {
                    Some(location) => println!("{}", location.display()),
                    None => println!("No configuration directory available on this platform"),
                }
                return Ok(());
            }

            let config = Config::resolve(config_path)?;
            match &location {
                Some(location) if location.exists() => {
                    println!("# {}", location.display());
                }
                Some(location) => {
                    println!("# {} (not found, using defaults)", location.display());
                }
                None => println!("# using defaults"),
            }
            print!("{}", config.to_toml()?);

            Ok(())
        }
    }
}

/// Build the generator a `run` invocation asks for
///
/// Flags win over the config file, which wins over built-in defaults.
pub fn plan_run(args: &RunArgs, config: &Config) -> Result<(Generator, OutputFormat)> {
    let mode = args.mode.unwrap_or(config.defaults.mode);
    let arithmetic = args.arithmetic.unwrap_or(config.defaults.arithmetic);
    let format = args.format.unwrap_or(config.defaults.format);

    let generator = match mode {
        Mode::Iterative => {
            let count = args.count.unwrap_or(config.iterative.count);
            Iterative::new(count, arithmetic).into()
        }
        Mode::Recursive => {
            let defaults = config.recursive.params(arithmetic);
            let params = RecursiveParams {
                seed: args.seed.unwrap_or(defaults.seed),
                threshold: args.threshold.unwrap_or(defaults.threshold),
                max_steps: args.max_steps.unwrap_or(defaults.max_steps),
                ..defaults
            };
            Recursive::new(params)?.into()
        }
    };

    Ok((generator, format))
}
