//! fibreg - register-style and recursive Fibonacci generators
//!
//! Both generators sum and rotate a pair of registers. Register width is
//! an explicit choice: 8-bit wrapping registers (the default) or 64-bit
//! checked registers.

pub mod cli;
pub mod commands;
pub mod common;
pub mod scenario;
pub mod sequence;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use sequence::{
    Arithmetic, Generator, GeneratorState, Iterative, Mode, Recursive, RecursiveParams, Term,
};
