//! Register-style generator
//!
//! Simulates two registers and an adder: each clock computes
//! `next = prev + curr`, latches out `prev`, then shifts `prev <- curr`
//! and `curr <- next`. The value latched out is the pre-shift low
//! register, so the sequence starts at 0.

use super::{Arithmetic, GeneratorState, Term};
use crate::common::{Error, Result};

/// Number of values produced when no count is given
pub const DEFAULT_COUNT: usize = 10;

/// Fixed-count generator starting from `(0, 1)`
///
/// A register holding `None` took a sum that did not fit in 64 bits. The
/// overflow is only reported if that register is latched out.
#[derive(Debug, Clone)]
pub struct Iterative {
    count: usize,
    arithmetic: Arithmetic,
    prev: Option<u64>,
    prev_wrapped: bool,
    curr: Option<u64>,
    curr_wrapped: bool,
    index: usize,
    state: GeneratorState,
}

impl Iterative {
    pub fn new(count: usize, arithmetic: Arithmetic) -> Self {
        Self {
            count,
            arithmetic,
            prev: Some(0),
            prev_wrapped: false,
            curr: Some(1),
            curr_wrapped: false,
            index: 0,
            state: if count == 0 {
                GeneratorState::Terminated
            } else {
                GeneratorState::Running
            },
        }
    }

    /// Produce all `count` values
    pub fn run(count: usize, arithmetic: Arithmetic) -> Result<Vec<Term>> {
        Self::new(count, arithmetic).collect()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn arithmetic(&self) -> Arithmetic {
        self.arithmetic
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.count, self.arithmetic);
    }
}

impl Iterator for Iterative {
    type Item = Result<Term>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == GeneratorState::Terminated {
            return None;
        }

        let Some(value) = self.prev else {
            self.state = GeneratorState::Terminated;
            return Some(Err(Error::Overflow { step: self.index }));
        };

        let sum = self
            .curr
            .and_then(|curr| self.arithmetic.add(value, curr));

        let term = Term {
            index: self.index,
            value,
            wrapped: self.prev_wrapped,
        };
        tracing::trace!(index = term.index, value = term.value, next = ?sum.map(|s| s.value), "register shift");

        self.prev = self.curr;
        self.prev_wrapped = self.curr_wrapped;
        self.curr = sum.map(|s| s.value);
        self.curr_wrapped = sum.is_some_and(|s| s.wrapped);
        self.index += 1;

        if self.index == self.count {
            tracing::debug!(count = self.count, "iterative generator finished");
            self.state = GeneratorState::Terminated;
        }

        Some(Ok(term))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            GeneratorState::Running => (0, Some(self.count() - self.index)),
            GeneratorState::Terminated => (0, Some(0)),
        }
    }
}
