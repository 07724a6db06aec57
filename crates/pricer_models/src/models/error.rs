//! Diffusion process error types.

use thiserror::Error;

/// Errors raised by diffusion process construction or evaluation.
///
/// Path generators propagate these unchanged to their callers.
///
/// # Examples
///
/// ```
/// use pricer_models::models::ProcessError;
///
/// let err = ProcessError::InvalidParameter {
///     name: "volatility",
///     value: -0.2,
/// };
/// assert_eq!(format!("{}", err), "Invalid process parameter 'volatility': -0.2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessError {
    /// A model parameter is outside its valid domain.
    #[error("Invalid process parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Variance requested over a negative or non-finite time step.
    #[error("Invalid time step {0}: must be non-negative and finite")]
    InvalidTimeStep(f64),

    /// Evaluation failed in an externally supplied process.
    #[error("Process evaluation failed: {0}")]
    Evaluation(String),
}
