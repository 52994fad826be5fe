//! Common utilities shared by the CLI and the scenario verifier

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};

/// Parse a seed pair written as `A,B` or `A B`
pub fn parse_seed(text: &str) -> Result<(u8, u8)> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    let [a, b] = parts.as_slice() else {
        return Err(Error::Config(format!(
            "Seed '{text}' must be two values, e.g. '0,1'"
        )));
    };

    let parse = |s: &str| {
        s.parse::<u8>().map_err(|_| {
            Error::Config(format!("Seed value '{s}' is not an integer in 0..=255"))
        })
    };
    Ok((parse(*a)?, parse(*b)?))
}
