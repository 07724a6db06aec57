//! Random array generators: one correlated draw vector per time step.
//!
//! Used by the legacy generator, which does not apply a correlation
//! transform itself. The array generator owns it instead.

use pricer_core::math::{
    CorrelationError, CorrelationTransform, CovarianceMatrix, SqrtMethod, DEFAULT_PSD_TOLERANCE,
};
use pricer_core::types::Sample;

use super::prng::PricerRng;
use super::RandomError;

/// Source of weighted, already correlated draw vectors.
pub trait RandomArrayGenerator {
    /// Length of every produced array (the asset count).
    fn dimension(&self) -> usize;

    /// Produces the next weighted array.
    fn next_array(&mut self) -> Result<&Sample<Vec<f64>>, RandomError>;
}

impl<G: RandomArrayGenerator + ?Sized> RandomArrayGenerator for Box<G> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn next_array(&mut self) -> Result<&Sample<Vec<f64>>, RandomError> {
        (**self).next_array()
    }
}

impl<G: RandomArrayGenerator + ?Sized> RandomArrayGenerator for &mut G {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn next_array(&mut self) -> Result<&Sample<Vec<f64>>, RandomError> {
        (**self).next_array()
    }
}

/// Gaussian arrays with a prescribed covariance.
///
/// Each call draws independent standard normals `z` and returns `M * z`
/// where `M * M^T` is the covariance. Weights are always 1.
///
/// # Examples
///
/// ```
/// use pricer_core::math::{CovarianceMatrix, SqrtMethod};
/// use pricer_paths::rng::{CorrelatedGaussianArrayGenerator, RandomArrayGenerator};
///
/// let cov = CovarianceMatrix::new(&[0.04, 0.01, 0.01, 0.09], 2).unwrap();
/// let mut generator =
///     CorrelatedGaussianArrayGenerator::new(&cov, 7, SqrtMethod::Cholesky).unwrap();
///
/// let draw = generator.next_array().unwrap();
/// assert_eq!(draw.value.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct CorrelatedGaussianArrayGenerator {
    rng: PricerRng,
    transform: CorrelationTransform,
    independent: Vec<f64>,
    array: Sample<Vec<f64>>,
}

impl CorrelatedGaussianArrayGenerator {
    /// Creates a generator for `covariance` seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Fails if the covariance is not positive semi-definite.
    pub fn new(
        covariance: &CovarianceMatrix,
        seed: u64,
        method: SqrtMethod,
    ) -> Result<Self, CorrelationError> {
        let transform = CorrelationTransform::new(covariance, method, DEFAULT_PSD_TOLERANCE)?;
        Ok(Self::from_transform(transform, seed))
    }

    /// Creates a generator from a precomputed transform.
    pub fn from_transform(transform: CorrelationTransform, seed: u64) -> Self {
        let dim = transform.dim();
        Self {
            rng: PricerRng::from_seed(seed),
            transform,
            independent: vec![0.0; dim],
            array: Sample::new(vec![0.0; dim]),
        }
    }

    /// Returns the covariance square root applied to each draw.
    #[inline]
    pub fn transform(&self) -> &CorrelationTransform {
        &self.transform
    }
}

impl RandomArrayGenerator for CorrelatedGaussianArrayGenerator {
    fn dimension(&self) -> usize {
        self.transform.dim()
    }

    fn next_array(&mut self) -> Result<&Sample<Vec<f64>>, RandomError> {
        self.rng.fill_normal(&mut self.independent);
        self.transform.apply(&self.independent, &mut self.array.value);
        Ok(&self.array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_and_weight() {
        let cov = CovarianceMatrix::identity(3);
        let mut g = CorrelatedGaussianArrayGenerator::new(&cov, 1, SqrtMethod::Symmetric).unwrap();
        assert_eq!(g.dimension(), 3);
        let draw = g.next_array().unwrap();
        assert_eq!(draw.value.len(), 3);
        assert_eq!(draw.weight, 1.0);
    }

    #[test]
    fn test_rejects_indefinite_covariance() {
        let cov = CovarianceMatrix::new(&[1.0, 2.0, 2.0, 1.0], 2).unwrap();
        assert!(CorrelatedGaussianArrayGenerator::new(&cov, 1, SqrtMethod::Cholesky).is_err());
    }

    #[test]
    fn test_sample_covariance_matches_target() {
        let cov = CovarianceMatrix::new(&[0.04, 0.018, 0.018, 0.09], 2).unwrap();
        let mut g = CorrelatedGaussianArrayGenerator::new(&cov, 2024, SqrtMethod::Cholesky).unwrap();

        let n = 200_000;
        let (mut s00, mut s01, mut s11) = (0.0, 0.0, 0.0);
        for _ in 0..n {
            let v = &g.next_array().unwrap().value;
            s00 += v[0] * v[0];
            s01 += v[0] * v[1];
            s11 += v[1] * v[1];
        }
        let n = n as f64;

        assert!((s00 / n - 0.04).abs() < 0.001);
        assert!((s01 / n - 0.018).abs() < 0.001);
        assert!((s11 / n - 0.09).abs() < 0.002);
    }
}
