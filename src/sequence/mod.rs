//! Fibonacci sequence generation
//!
//! Two strategies share one contract: a pair of registers `(prev, curr)`
//! is summed and rotated once per produced value. The iterative strategy
//! emits a fixed number of values starting from `(0, 1)`; the recursive
//! strategy starts from a caller-supplied seed and stops after the first
//! value above a threshold.
//!
//! Register width is an explicit parameter ([`Arithmetic`]) rather than a
//! property of the storage type.

mod iterative;
mod recursive;

pub use iterative::{Iterative, DEFAULT_COUNT};
pub use recursive::{
    Recursive, RecursiveParams, DEFAULT_MAX_STEPS, DEFAULT_SEED, DEFAULT_THRESHOLD,
};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::Result;

/// Which generator strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Fixed-count register simulation starting from (0, 1)
    #[default]
    Iterative,
    /// Seeded sequence that stops after the first value above a threshold
    Recursive,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Iterative => write!(f, "iterative"),
            Mode::Recursive => write!(f, "recursive"),
        }
    }
}

/// Register arithmetic used when summing the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Arithmetic {
    /// 8-bit registers; sums wrap modulo 256
    #[default]
    Wrapping,
    /// 64-bit registers; a sum that does not fit is an error
    Unbounded,
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arithmetic::Wrapping => write!(f, "wrapping"),
            Arithmetic::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Result of adding two registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sum {
    pub value: u64,
    /// The true sum did not fit in 8 bits and was reduced modulo 256
    pub wrapped: bool,
}

impl Arithmetic {
    /// Add two register values, returning `None` on 64-bit overflow
    ///
    /// Under `Wrapping` both operands are 8-bit register contents.
    pub fn add(self, a: u64, b: u64) -> Option<Sum> {
        match self {
            Arithmetic::Wrapping => {
                let (value, wrapped) = (a as u8).overflowing_add(b as u8);
                Some(Sum {
                    value: u64::from(value),
                    wrapped,
                })
            }
            Arithmetic::Unbounded => a.checked_add(b).map(|value| Sum {
                value,
                wrapped: false,
            }),
        }
    }
}

/// One emitted value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Term {
    /// 0-based position in the output
    pub index: usize,
    pub value: u64,
    /// The addition that produced this value wrapped past 8 bits
    pub wrapped: bool,
}

/// Lifecycle of a generator run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    Running,
    Terminated,
}

/// Either strategy behind one iterator
#[derive(Debug, Clone)]
pub enum Generator {
    Iterative(Iterative),
    Recursive(Recursive),
}

impl Generator {
    pub fn mode(&self) -> Mode {
        match self {
            Generator::Iterative(_) => Mode::Iterative,
            Generator::Recursive(_) => Mode::Recursive,
        }
    }

    pub fn arithmetic(&self) -> Arithmetic {
        match self {
            Generator::Iterative(g) => g.arithmetic(),
            Generator::Recursive(g) => g.params().arithmetic,
        }
    }

    pub fn state(&self) -> GeneratorState {
        match self {
            Generator::Iterative(g) => g.state(),
            Generator::Recursive(g) => g.state(),
        }
    }

    /// Reset to the initial register pair
    pub fn restart(&mut self) {
        match self {
            Generator::Iterative(g) => g.restart(),
            Generator::Recursive(g) => g.restart(),
        }
    }

    /// Drain the generator, stopping at the first error
    pub fn collect_terms(self) -> Result<Vec<Term>> {
        self.collect()
    }
}

impl Iterator for Generator {
    type Item = Result<Term>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Generator::Iterative(g) => g.next(),
            Generator::Recursive(g) => g.next(),
        }
    }
}

impl From<Iterative> for Generator {
    fn from(g: Iterative) -> Self {
        Generator::Iterative(g)
    }
}

impl From<Recursive> for Generator {
    fn from(g: Recursive) -> Self {
        Generator::Recursive(g)
    }
}

/// Values of a term list, dropping indices and wrap flags
pub fn values(terms: &[Term]) -> Vec<u64> {
    terms.iter().map(|t| t.value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_add_reduces_modulo_256() {
        let sum = Arithmetic::Wrapping.add(200, 100).unwrap();
        assert_eq!(sum.value, 44);
        assert!(sum.wrapped);

        let sum = Arithmetic::Wrapping.add(89, 55).unwrap();
        assert_eq!(sum.value, 144);
        assert!(!sum.wrapped);
    }

    #[test]
    fn test_unbounded_add_is_checked() {
        let sum = Arithmetic::Unbounded.add(200, 100).unwrap();
        assert_eq!(sum.value, 300);
        assert!(!sum.wrapped);

        assert!(Arithmetic::Unbounded.add(u64::MAX, 1).is_none());
    }

    #[test]
    fn test_generator_dispatch() {
        let mut generator = Generator::from(Iterative::new(3, Arithmetic::Wrapping));
        assert_eq!(generator.mode(), Mode::Iterative);
        assert_eq!(generator.state(), GeneratorState::Running);

        let first: Vec<u64> = generator.by_ref().take(3).map(|t| t.unwrap().value).collect();
        assert_eq!(first, vec![0, 1, 1]);
        assert_eq!(generator.state(), GeneratorState::Terminated);
        assert!(generator.next().is_none());

        generator.restart();
        assert_eq!(generator.state(), GeneratorState::Running);
        assert_eq!(values(&generator.collect_terms().unwrap()), vec![0, 1, 1]);
    }

    #[test]
    fn test_mode_and_arithmetic_names() {
        assert_eq!(Mode::Recursive.to_string(), "recursive");
        assert_eq!(Arithmetic::Unbounded.to_string(), "unbounded");
        assert_eq!(Mode::default(), Mode::Iterative);
        assert_eq!(Arithmetic::default(), Arithmetic::Wrapping);
    }
}
