//! Constant-drift multi-path generator fed by correlated draw vectors.
//!
//! Unlike [`MultiPathGenerator`](super::MultiPathGenerator), no diffusion
//! process is consulted: drift increments are `drift[j] * dt(i)`, fixed at
//! construction, and diffusion increments are `draw[j] * sqrt(dt(i))` where
//! `draw` already carries the covariance.

use std::sync::Arc;

use pricer_core::math::{CovarianceMatrix, SqrtMethod};
use pricer_core::types::{Sample, TimeGrid};
use tracing::{debug, trace};

use crate::error::PathGeneratorError;
use crate::path::MultiPath;
use crate::rng::{CorrelatedGaussianArrayGenerator, RandomArrayGenerator};

use super::sampler::MultiPathSampler;

/// Multi-path generator with linear drift and additive correlated diffusion.
///
/// # Examples
///
/// ```
/// use pricer_core::math::CovarianceMatrix;
/// use pricer_core::types::TimeGrid;
/// use pricer_paths::generator::{LegacyMultiPathGenerator, MultiPathSampler};
///
/// let cov = CovarianceMatrix::diagonal(&[0.01, 0.01]).unwrap();
/// let grid = TimeGrid::uniform(1.0, 4).unwrap();
/// let mut generator = LegacyMultiPathGenerator::seeded(&[0.05, 0.03], &cov, grid, 42).unwrap();
///
/// let sample = generator.next().unwrap();
/// assert_eq!(sample.value[0].drift(), &[0.0125; 4]);
/// assert!(generator.antithetic().is_err());
/// ```
#[derive(Debug)]
pub struct LegacyMultiPathGenerator<R> {
    generator: R,
    grid: Arc<TimeGrid>,
    /// `sqrt(dt(i))` per step.
    sqrt_dts: Vec<f64>,
    buffer: Sample<MultiPath>,
}

impl<R: RandomArrayGenerator> LegacyMultiPathGenerator<R> {
    /// Creates a generator over a uniform grid `0, h/n, ..., h`.
    ///
    /// # Errors
    ///
    /// - `InvalidStepCount` if `steps == 0`
    /// - `InvalidHorizon` if `horizon` is not positive and finite
    /// - any error of [`LegacyMultiPathGenerator::with_time_grid`]
    pub fn with_horizon(
        drifts: &[f64],
        covariance: &CovarianceMatrix,
        horizon: f64,
        steps: usize,
        generator: R,
    ) -> Result<Self, PathGeneratorError> {
        if steps == 0 {
            return Err(PathGeneratorError::InvalidStepCount(steps));
        }
        if !(horizon > 0.0 && horizon.is_finite()) {
            return Err(PathGeneratorError::InvalidHorizon(horizon));
        }
        let grid = TimeGrid::uniform(horizon, steps)?;
        Self::with_time_grid(drifts, covariance, grid, generator)
    }

    /// Creates a generator over an explicit grid.
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if the drift vector or the array dimension does
    ///   not match the covariance size
    /// - `NegativeVariance` if a diagonal covariance entry is negative
    /// - `TimeGridTooShort` if the grid has fewer than two points
    /// - `NonIncreasingTime` if two consecutive grid points are equal
    pub fn with_time_grid(
        drifts: &[f64],
        covariance: &CovarianceMatrix,
        grid: TimeGrid,
        generator: R,
    ) -> Result<Self, PathGeneratorError> {
        let assets = covariance.dim();
        if drifts.len() != assets {
            return Err(PathGeneratorError::DimensionMismatch {
                quantity: "drift vector",
                expected: assets,
                actual: drifts.len(),
            });
        }
        check_variances(covariance)?;
        if grid.len() < 2 {
            return Err(PathGeneratorError::TimeGridTooShort {
                points: grid.len(),
            });
        }
        if let Some(index) = grid.first_non_increasing() {
            return Err(PathGeneratorError::NonIncreasingTime {
                index,
                previous: grid[index - 1],
                current: grid[index],
            });
        }
        if generator.dimension() != assets {
            return Err(PathGeneratorError::DimensionMismatch {
                quantity: "random array",
                expected: assets,
                actual: generator.dimension(),
            });
        }

        let grid = Arc::new(grid);
        let sqrt_dts = grid.dts().map(f64::sqrt).collect();

        let mut buffer = Sample::new(MultiPath::new(assets, Arc::clone(&grid)));
        for (path, &mu) in buffer.value.paths_mut().iter_mut().zip(drifts) {
            for (increment, dt) in path.drift_mut().iter_mut().zip(grid.dts()) {
                *increment = mu * dt;
            }
        }

        debug!(assets, steps = grid.steps(), "Legacy multi-path generator initialised");

        Ok(Self {
            generator,
            grid,
            sqrt_dts,
            buffer,
        })
    }

    /// Returns the random source.
    #[inline]
    pub fn generator(&self) -> &R {
        &self.generator
    }
}

impl LegacyMultiPathGenerator<CorrelatedGaussianArrayGenerator> {
    /// Creates a generator driven by seeded Gaussian draws with `covariance`.
    ///
    /// Uses the symmetric square root of the covariance.
    ///
    /// # Errors
    ///
    /// - `NegativeVariance` if a diagonal covariance entry is negative
    /// - `Correlation` if the covariance is not positive semi-definite
    /// - any error of [`LegacyMultiPathGenerator::with_time_grid`]
    pub fn seeded(
        drifts: &[f64],
        covariance: &CovarianceMatrix,
        grid: TimeGrid,
        seed: u64,
    ) -> Result<Self, PathGeneratorError> {
        check_variances(covariance)?;
        let generator =
            CorrelatedGaussianArrayGenerator::new(covariance, seed, SqrtMethod::default())?;
        Self::with_time_grid(drifts, covariance, grid, generator)
    }
}

fn check_variances(covariance: &CovarianceMatrix) -> Result<(), PathGeneratorError> {
    match covariance
        .variances()
        .into_iter()
        .enumerate()
        .find(|&(_, v)| v < 0.0)
    {
        Some((asset, variance)) => Err(PathGeneratorError::NegativeVariance { asset, variance }),
        None => Ok(()),
    }
}

impl<R: RandomArrayGenerator> MultiPathSampler for LegacyMultiPathGenerator<R> {
    fn asset_count(&self) -> usize {
        self.buffer.value.asset_count()
    }

    fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    fn next_ref(&mut self) -> Result<&Sample<MultiPath>, PathGeneratorError> {
        let assets = self.buffer.value.asset_count();
        let mut weight = 1.0;

        for (i, &sqrt_dt) in self.sqrt_dts.iter().enumerate() {
            let array = self.generator.next_array()?;
            if array.value.len() != assets {
                return Err(PathGeneratorError::DimensionMismatch {
                    quantity: "random array",
                    expected: assets,
                    actual: array.value.len(),
                });
            }
            weight *= array.weight;
            for (path, &draw) in self.buffer.value.paths_mut().iter_mut().zip(&array.value) {
                path.diffusion_mut()[i] = draw * sqrt_dt;
            }
        }

        self.buffer.weight = weight;
        trace!(weight, "Legacy trajectory generated");
        Ok(&self.buffer)
    }

    fn antithetic_ref(&mut self) -> Result<&Sample<MultiPath>, PathGeneratorError> {
        Err(PathGeneratorError::Unsupported(
            "antithetic sampling is not available for the legacy generator",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let cov = CovarianceMatrix::new(&[0.04, 0.01, 0.01, 0.09], 2).unwrap();
        let grid = TimeGrid::uniform(2.0, 5).unwrap();
        let mut a = LegacyMultiPathGenerator::seeded(&[0.0, 0.0], &cov, grid.clone(), 9).unwrap();
        let mut b = LegacyMultiPathGenerator::seeded(&[0.0, 0.0], &cov, grid, 9).unwrap();

        for _ in 0..3 {
            assert_eq!(a.next().unwrap(), b.next().unwrap());
        }
    }

    #[test]
    fn test_uneven_grid_scales_by_step() {
        let cov = CovarianceMatrix::identity(1);
        let grid = TimeGrid::new(vec![0.0, 0.25, 1.25]).unwrap();
        let mut g = LegacyMultiPathGenerator::seeded(&[0.1], &cov, grid, 5).unwrap();

        let sample = g.next_ref().unwrap();
        assert_eq!(sample.value[0].drift(), &[0.025, 0.1]);
        assert_eq!(sample.value.path_size(), 2);
    }

    #[test]
    fn test_antithetic_unsupported() {
        let cov = CovarianceMatrix::identity(2);
        let random = CorrelatedGaussianArrayGenerator::new(&cov, 1, SqrtMethod::Cholesky).unwrap();
        let mut g =
            LegacyMultiPathGenerator::with_horizon(&[0.0, 0.0], &cov, 1.0, 2, random).unwrap();
        assert!(matches!(
            g.antithetic_ref(),
            Err(PathGeneratorError::Unsupported(_))
        ));
    }
}
