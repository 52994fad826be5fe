//! Scenario runner implementation
//!
//! Runs each case against the generators directly and compares the
//! structured outcome rather than parsing CLI output.

use std::path::Path;

use colored::Colorize;

use crate::common::{Error, Result};
use crate::sequence::values;

use super::config::{Case, Scenario};

/// Outcome of a single case
#[derive(Debug)]
pub struct CaseResult {
    pub name: String,
    pub passed: bool,
    /// Why the case failed, or what it produced when it passed
    pub detail: String,
}

/// Outcome of a whole scenario file
#[derive(Debug)]
pub struct ScenarioResult {
    pub name: String,
    pub cases: Vec<CaseResult>,
}

impl ScenarioResult {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }
}

/// Load and parse a YAML scenario
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;

    serde_yaml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse scenario '{}': {}", path.display(), e)))
}

/// Run a scenario file, printing one line per case
pub fn run_scenario(path: &Path) -> Result<ScenarioResult> {
    let scenario = load_scenario(path)?;

    println!(
        "\n{} {}",
        "Scenario:".blue().bold(),
        scenario.name.white().bold()
    );
    if let Some(desc) = &scenario.description {
        println!("  {}", desc.dimmed());
    }

    let mut cases = Vec::with_capacity(scenario.cases.len());
    for case in &scenario.cases {
        let result = evaluate_case(case);
        if result.passed {
            println!("  {} {} {}", "PASS".green().bold(), result.name, result.detail.dimmed());
        } else {
            println!("  {} {}", "FAIL".red().bold(), result.name);
            println!("       {}", result.detail.red());
        }
        tracing::debug!(case = %result.name, passed = result.passed, "Case finished");
        cases.push(result);
    }

    let result = ScenarioResult {
        name: scenario.name,
        cases,
    };

    let summary = format!("{} passed, {} failed", result.passed(), result.failed());
    if result.failed() == 0 {
        println!("\n{}", summary.green().bold());
    } else {
        println!("\n{}", summary.red().bold());
    }

    Ok(result)
}

/// Run one case and compare it with its expectation
pub fn evaluate_case(case: &Case) -> CaseResult {
    let result = |passed: bool, detail: String| CaseResult {
        name: case.name.clone(),
        passed,
        detail,
    };

    let outcome = case.build().and_then(|generator| generator.collect_terms());

    match (&case.expect, &case.expect_error) {
        (Some(expected), None) => match outcome {
            Ok(terms) => {
                let actual = values(&terms);
                if &actual == expected {
                    result(true, format!("({} values)", actual.len()))
                } else {
                    result(false, format!("expected {:?}, got {:?}", expected, actual))
                }
            }
            Err(e) => result(false, format!("unexpected error: {}", e)),
        },
        (None, Some(code)) => match outcome {
            Err(e) if e.code() == code.as_str() => result(true, format!("({})", code)),
            Err(e) => result(
                false,
                format!("expected error '{}', got '{}': {}", code, e.code(), e),
            ),
            Ok(terms) => result(
                false,
                format!("expected error '{}', got {} values", code, terms.len()),
            ),
        },
        _ => result(
            false,
            "case must set exactly one of 'expect' or 'expect_error'".to_string(),
        ),
    }
}
