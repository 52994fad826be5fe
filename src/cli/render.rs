//! Output rendering for generator runs

use serde::Serialize;
use std::io::Write;

use crate::common::Result;
use crate::sequence::{Arithmetic, Generator, Mode, Term};

/// One text line for a term
///
/// The iterative generator prints its position; the recursive one has no
/// meaningful index beyond call depth, so it prints a fixed label.
pub fn text_line(mode: Mode, term: &Term) -> String {
    match mode {
        Mode::Iterative => format!("Fibonacci_{}: {}", term.index, term.value),
        Mode::Recursive => format!("Fibonacci_num: {}", term.value),
    }
}

/// Stream terms as text, one line per value as it is produced
///
/// Lines written before an error stay written.
pub fn write_text<W: Write>(out: &mut W, generator: Generator) -> Result<usize> {
    let mode = generator.mode();
    let mut written = 0;
    for term in generator {
        let term = term?;
        writeln!(out, "{}", text_line(mode, &term))?;
        written += 1;
    }
    Ok(written)
}

/// JSON document for a completed run
#[derive(Debug, Serialize)]
pub struct SequenceReport {
    pub mode: Mode,
    pub arithmetic: Arithmetic,
    pub terms: Vec<Term>,
}

/// Run to completion and write a single JSON object
pub fn write_json<W: Write>(out: &mut W, generator: Generator) -> Result<usize> {
    let report = SequenceReport {
        mode: generator.mode(),
        arithmetic: generator.arithmetic(),
        terms: generator.collect_terms()?,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(report.terms.len())
}
