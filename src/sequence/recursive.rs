//! Seeded generator with a stop threshold
//!
//! Each step sums the pair, emits the sum, and stops once the sum is above
//! the threshold; otherwise the pair advances to `(curr, sum)`. This is
//! the tail-recursive formulation unrolled into a loop guard, so the stop
//! condition is observable per step and the stack never grows.

use super::{Arithmetic, GeneratorState, Term};
use crate::common::{Error, Result};

pub const DEFAULT_SEED: (u8, u8) = (0, 1);
pub const DEFAULT_THRESHOLD: u64 = 100;
pub const DEFAULT_MAX_STEPS: usize = 1024;

/// Inputs of a recursive run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursiveParams {
    pub seed: (u8, u8),
    /// Generation stops after the first value strictly greater than this
    pub threshold: u64,
    pub arithmetic: Arithmetic,
    /// Values emitted without passing the threshold before giving up
    pub max_steps: usize,
}

impl Default for RecursiveParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            threshold: DEFAULT_THRESHOLD,
            arithmetic: Arithmetic::default(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl RecursiveParams {
    /// Reject parameters that can never terminate or never run
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(Error::InvalidMaxSteps);
        }
        if self.arithmetic == Arithmetic::Wrapping && self.threshold >= u64::from(u8::MAX) {
            return Err(Error::UnreachableThreshold {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Recursive {
    params: RecursiveParams,
    prev: u64,
    curr: u64,
    index: usize,
    state: GeneratorState,
}

impl Recursive {
    pub fn new(params: RecursiveParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            prev: u64::from(params.seed.0),
            curr: u64::from(params.seed.1),
            index: 0,
            state: GeneratorState::Running,
        })
    }

    /// Produce every value up to and including the first one above the threshold
    pub fn run(params: RecursiveParams) -> Result<Vec<Term>> {
        Self::new(params)?.collect()
    }

    pub fn params(&self) -> &RecursiveParams {
        &self.params
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn restart(&mut self) {
        self.prev = u64::from(self.params.seed.0);
        self.curr = u64::from(self.params.seed.1);
        self.index = 0;
        self.state = GeneratorState::Running;
    }
}

impl Iterator for Recursive {
    type Item = Result<Term>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == GeneratorState::Terminated {
            return None;
        }

        if self.index >= self.params.max_steps {
            self.state = GeneratorState::Terminated;
            return Some(Err(Error::StepLimit {
                max_steps: self.params.max_steps,
            }));
        }

        let Some(sum) = self.params.arithmetic.add(self.prev, self.curr) else {
            self.state = GeneratorState::Terminated;
            return Some(Err(Error::Overflow { step: self.index }));
        };

        let term = Term {
            index: self.index,
            value: sum.value,
            wrapped: sum.wrapped,
        };
        tracing::trace!(index = term.index, value = term.value, wrapped = term.wrapped, "sum");

        if sum.value > self.params.threshold {
            tracing::debug!(
                steps = self.index + 1,
                threshold = self.params.threshold,
                "recursive generator passed threshold"
            );
            self.state = GeneratorState::Terminated;
        } else {
            if sum.wrapped {
                tracing::warn!(
                    index = term.index,
                    value = sum.value,
                    threshold = self.params.threshold,
                    "8-bit sum wrapped below threshold, continuing past the true stopping point"
                );
            }
            self.prev = self.curr;
            self.curr = sum.value;
        }
        self.index += 1;

        Some(Ok(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::values;

    fn params(seed: (u8, u8), arithmetic: Arithmetic) -> RecursiveParams {
        RecursiveParams {
            seed,
            arithmetic,
            ..RecursiveParams::default()
        }
    }

    #[test]
    fn test_default_seed_stops_after_144() {
        let expected = vec![1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

        let terms = Recursive::run(params((0, 1), Arithmetic::Unbounded)).unwrap();
        assert_eq!(values(&terms), expected);

        // No sum from (0, 1) wraps before 144, so both widths agree
        let terms = Recursive::run(RecursiveParams::default()).unwrap();
        assert_eq!(values(&terms), expected);
        assert!(terms.iter().all(|t| !t.wrapped));
    }

    #[test]
    fn test_state_transitions() {
        let mut generator = Recursive::new(RecursiveParams::default()).unwrap();
        assert_eq!(generator.state(), GeneratorState::Running);

        for _ in 0..10 {
            generator.next().unwrap().unwrap();
            assert_eq!(generator.state(), GeneratorState::Running);
        }
        assert_eq!(generator.next().unwrap().unwrap().value, 144);
        assert_eq!(generator.state(), GeneratorState::Terminated);
        assert!(generator.next().is_none());
    }

    #[test]
    fn test_wrapped_sum_continues_past_true_stop() {
        // 200 + 100 = 300 would stop at once; 300 mod 256 = 44 keeps going
        let terms = Recursive::run(params((200, 100), Arithmetic::Unbounded)).unwrap();
        assert_eq!(values(&terms), vec![300]);

        let terms = Recursive::run(params((200, 100), Arithmetic::Wrapping)).unwrap();
        assert_eq!(values(&terms), vec![44, 144]);
        assert!(terms[0].wrapped);
        assert!(!terms[1].wrapped);
    }

    #[test]
    fn test_first_sum_above_threshold_is_emitted() {
        let terms = Recursive::run(params((60, 50), Arithmetic::Wrapping)).unwrap();
        assert_eq!(values(&terms), vec![110]);
    }

    #[test]
    fn test_zero_seed_hits_step_limit() {
        let p = RecursiveParams {
            seed: (0, 0),
            max_steps: 16,
            ..RecursiveParams::default()
        };
        let result = Recursive::run(p);
        assert!(matches!(result, Err(Error::StepLimit { max_steps: 16 })));

        let mut generator = Recursive::new(p).unwrap();
        let zeros = generator.by_ref().take_while(|r| r.is_ok()).count();
        assert_eq!(zeros, 16);
        assert_eq!(generator.state(), GeneratorState::Terminated);
    }

    #[test]
    fn test_validation() {
        let p = RecursiveParams {
            max_steps: 0,
            ..RecursiveParams::default()
        };
        assert!(matches!(Recursive::new(p), Err(Error::InvalidMaxSteps)));

        let p = RecursiveParams {
            threshold: 255,
            ..RecursiveParams::default()
        };
        assert!(matches!(
            Recursive::new(p),
            Err(Error::UnreachableThreshold { threshold: 255 })
        ));

        let p = RecursiveParams {
            threshold: 254,
            ..RecursiveParams::default()
        };
        assert!(Recursive::new(p).is_ok());

        let p = RecursiveParams {
            threshold: 1000,
            arithmetic: Arithmetic::Unbounded,
            ..RecursiveParams::default()
        };
        let terms = Recursive::run(p).unwrap();
        assert_eq!(terms.last().unwrap().value, 1597);
    }

    #[test]
    fn test_restart_replays_sequence() {
        let mut generator = Recursive::new(params((3, 5), Arithmetic::Wrapping)).unwrap();
        let first: Vec<Term> = generator.by_ref().map(|t| t.unwrap()).collect();
        generator.restart();
        let second: Vec<Term> = generator.map(|t| t.unwrap()).collect();
        assert_eq!(first, second);
        assert_eq!(values(&first), vec![8, 13, 21, 34, 55, 89, 144]);
    }
}
