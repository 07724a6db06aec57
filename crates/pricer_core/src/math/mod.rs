//! Numerical building blocks.
//!
//! - [`correlation`]: covariance matrices and their square-root decomposition

pub mod correlation;

pub use correlation::{
    CorrelationError, CorrelationTransform, CovarianceMatrix, SqrtMethod, DEFAULT_PSD_TOLERANCE,
};
