//! Integration tests for module exports.
//!
//! Verify that public modules and types are accessible via absolute paths
//! and that the re-exports point at the same items.

use approx::assert_relative_eq;

/// Test that time grid types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::TimeGridError;
    use pricer_core::types::sample::Sample;
    use pricer_core::types::time_grid::TimeGrid;

    let grid = TimeGrid::uniform(2.0, 4).unwrap();
    assert_eq!(grid.len(), 5);
    assert_eq!(grid.end(), 2.0);

    let sample = Sample::with_weight(grid.times().to_vec(), 0.5);
    assert_eq!(sample.weight, 0.5);

    let err: TimeGridError = TimeGrid::new(Vec::new()).unwrap_err();
    assert_eq!(err, TimeGridError::Empty);
}

/// Test that correlation types are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::correlation::{
        CorrelationError, CorrelationTransform, CovarianceMatrix, SqrtMethod,
    };

    let cov = CovarianceMatrix::from_rows(&[vec![1.0, 0.5], vec![0.5, 1.0]]).unwrap();
    let transform = CorrelationTransform::new(&cov, SqrtMethod::Cholesky, 1e-12).unwrap();
    assert_eq!(transform.dim(), 2);

    let err = CovarianceMatrix::new(&[1.0, 2.0, 3.0], 2).unwrap_err();
    assert!(matches!(err, CorrelationError::InvalidDimensions { .. }));
}

/// Test that module-level re-exports resolve to the same types.
#[test]
fn test_reexports_match() {
    let grid: pricer_core::types::TimeGrid =
        pricer_core::types::time_grid::TimeGrid::uniform(1.0, 1).unwrap();
    assert_eq!(grid.steps(), 1);

    let cov: pricer_core::math::CovarianceMatrix =
        pricer_core::math::correlation::CovarianceMatrix::identity(3);
    let transform = pricer_core::math::CorrelationTransform::from_covariance(&cov).unwrap();
    let rebuilt = transform.reconstruct();
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(rebuilt.get(i, j), cov.get(i, j), epsilon = 1e-12);
        }
    }
}
