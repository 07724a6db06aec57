//! Error types for structured error handling.
//!
//! This module provides:
//! - `TimeGridError`: Errors from time grid construction

use thiserror::Error;

/// Time grid construction errors.
///
/// Provides structured error handling for [`TimeGrid`](super::TimeGrid)
/// construction with the offending index or value for each failure mode.
///
/// # Variants
/// - `Empty`: No time points supplied
/// - `NonFinite`: A time point is NaN or infinite
/// - `NegativeStart`: The first time point is negative
/// - `Decreasing`: A time point precedes its predecessor
/// - `InvalidHorizon`: Uniform grid horizon is not strictly positive
/// - `InvalidStepCount`: Uniform grid requested with zero steps
///
/// # Examples
/// ```
/// use pricer_core::types::TimeGridError;
///
/// let err = TimeGridError::NegativeStart { time: -0.5 };
/// assert_eq!(format!("{}", err), "Time grid starts at -0.5: first time must be non-negative");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeGridError {
    /// No time points were supplied.
    #[error("Time grid is empty")]
    Empty,

    /// A time point is NaN or infinite.
    #[error("Time grid point {index} is not finite")]
    NonFinite {
        /// Index of the offending point
        index: usize,
    },

    /// The first time point is negative.
    #[error("Time grid starts at {time}: first time must be non-negative")]
    NegativeStart {
        /// The first time point
        time: f64,
    },

    /// A time point is earlier than the one before it.
    #[error("Time grid point {index} = {current} is earlier than the preceding point {previous}")]
    Decreasing {
        /// Index of the offending point
        index: usize,
        /// Value at `index - 1`
        previous: f64,
        /// Value at `index`
        current: f64,
    },

    /// Horizon of a uniform grid is zero, negative or not finite.
    #[error("Invalid time grid horizon {0}: must be positive and finite")]
    InvalidHorizon(f64),

    /// A uniform grid was requested with zero steps.
    #[error("Invalid time grid step count {0}: must be greater than zero")]
    InvalidStepCount(usize),
}
