//! # Random Number Generation Infrastructure
//!
//! Random capabilities consumed by the path generators, plus seeded
//! pseudo-random implementations of each.
//!
//! ## Design Rationale
//!
//! - **Injected capabilities**: generators depend on the
//!   [`RandomSequenceGenerator`] and [`RandomArrayGenerator`] traits, so
//!   deterministic test doubles, quasi-random or importance-weighted sources
//!   plug in without touching generator code
//! - **Reproducibility**: all shipped generators are seeded
//! - **Efficiency**: sequences are written into owned buffers and lent out by
//!   reference; no allocation per draw
//!
//! ## Module Structure
//!
//! - [`prng`]: Seeded standard normal source filling caller-owned buffers
//! - [`sequence`]: Per-trajectory sequences of independent draws
//! - [`array`](self::array): Per-step correlated draw vectors
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_paths::rng::{GaussianSequenceGenerator, RandomSequenceGenerator};
//!
//! // 2 assets x 12 steps
//! let mut generator = GaussianSequenceGenerator::new(24, 12345);
//! assert_eq!(generator.dimension(), 24);
//!
//! let sequence = generator.next_sequence().unwrap();
//! assert_eq!(sequence.value.len(), 24);
//! ```

use thiserror::Error;

pub mod array;
pub mod prng;
pub mod sequence;

// Public re-exports
pub use array::{CorrelatedGaussianArrayGenerator, RandomArrayGenerator};
pub use prng::PricerRng;
pub use sequence::{GaussianSequenceGenerator, RandomSequenceGenerator};

/// Errors raised by random sources.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomError {
    /// A finite source has no more draws.
    #[error("Random source exhausted after {0} draws")]
    Exhausted(usize),

    /// A draw had the wrong length.
    #[error("Random draw has length {actual}, expected {expected}")]
    DimensionMismatch {
        /// Declared dimension
        expected: usize,
        /// Length of the produced draw
        actual: usize,
    },

    /// Failure reported by an external source.
    #[error("Random source failure: {0}")]
    Source(String),
}
