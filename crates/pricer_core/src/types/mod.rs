//! Core simulation types.
//!
//! This module provides:
//! - `time_grid`: The discretised simulation time axis
//! - `sample`: Weighted Monte Carlo samples
//! - `error`: Structured error types for time grid construction
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`TimeGrid`] from `time_grid`
//! - [`Sample`] from `sample`
//! - [`TimeGridError`] from `error`

pub mod error;
pub mod sample;
pub mod time_grid;

// Re-export commonly used types at module level
pub use error::TimeGridError;
pub use sample::Sample;
pub use time_grid::TimeGrid;
