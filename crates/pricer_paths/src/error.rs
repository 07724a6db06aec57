//! Error types for multi-path generation.
//!
//! Validation errors are raised eagerly at construction so a misconfigured
//! generator never produces trajectories of the wrong shape. Failures of the
//! injected random source or diffusion processes pass through unchanged.

use pricer_core::math::CorrelationError;
use pricer_core::types::TimeGridError;
use pricer_models::models::ProcessError;
use thiserror::Error;

use crate::rng::RandomError;

/// Errors raised by path generator construction and sampling.
///
/// # Variants
///
/// - Configuration: `DimensionMismatch`, `TimeGridTooShort`,
///   `InvalidStepCount`, `InvalidHorizon`, `NegativeVariance`,
///   `NonIncreasingTime`, `InvalidParameter`
/// - Capability: `Unsupported`
/// - State: `NoBaseSample`
/// - Propagated: `TimeGrid`, `Correlation`, `Process`, `Random`
///
/// # Examples
///
/// ```
/// use pricer_paths::PathGeneratorError;
///
/// let err = PathGeneratorError::DimensionMismatch {
///     quantity: "drift vector",
///     expected: 2,
///     actual: 3,
/// };
/// assert_eq!(
///     err.to_string(),
///     "drift vector has size 3, expected 2"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathGeneratorError {
    /// A sized input does not match the asset count or step count.
    #[error("{quantity} has size {actual}, expected {expected}")]
    DimensionMismatch {
        /// What was measured
        quantity: &'static str,
        /// Required size
        expected: usize,
        /// Supplied size
        actual: usize,
    },

    /// Time grid has fewer than two points.
    #[error("Time grid has {points} point(s): at least 2 are required")]
    TimeGridTooShort {
        /// Number of points supplied
        points: usize,
    },

    /// Step count is zero.
    #[error("Invalid step count {0}: must be greater than zero")]
    InvalidStepCount(usize),

    /// Horizon is zero, negative or not finite.
    #[error("Invalid horizon {0}: must be positive and finite")]
    InvalidHorizon(f64),

    /// A diagonal covariance entry is negative.
    #[error("Negative variance {variance} for asset {asset}")]
    NegativeVariance {
        /// Asset index
        asset: usize,
        /// Offending variance
        variance: f64,
    },

    /// Time grid is not strictly increasing.
    #[error("Time grid point {index} = {current} does not follow {previous}")]
    NonIncreasingTime {
        /// Index of the offending point
        index: usize,
        /// Value at `index - 1`
        previous: f64,
        /// Value at `index`
        current: f64,
    },

    /// Invalid configuration value.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },

    /// Operation not provided by this generator.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Sign-flip antithetic requested before any base trajectory.
    #[error("No base trajectory drawn yet: call next() before antithetic()")]
    NoBaseSample,

    /// Time grid construction failed.
    #[error(transparent)]
    TimeGrid(#[from] TimeGridError),

    /// Covariance validation or decomposition failed.
    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    /// A diffusion process failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// The random source failed.
    #[error(transparent)]
    Random(#[from] RandomError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PathGeneratorError::TimeGridTooShort { points: 1 };
        assert!(err.to_string().contains("1 point"));

        let err = PathGeneratorError::NegativeVariance {
            asset: 2,
            variance: -0.01,
        };
        assert!(err.to_string().contains("asset 2"));

        let err = PathGeneratorError::InvalidParameter {
            name: "psd_tolerance",
            value: "must be non-negative".to_string(),
        };
        assert!(err.to_string().contains("psd_tolerance"));
    }

    #[test]
    fn test_propagated_errors_are_transparent() {
        let inner = ProcessError::Evaluation("quote not set".to_string());
        let err: PathGeneratorError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, PathGeneratorError::Process(inner));
    }
}
