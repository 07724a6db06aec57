//! Common output contract of the multi-path generators.

use pricer_core::types::{Sample, TimeGrid};

use crate::error::PathGeneratorError;
use crate::path::MultiPath;

/// Source of weighted multi-asset trajectories.
///
/// The `_ref` methods lend out the generator's internal buffer, which is
/// overwritten by the following call. `next` and `antithetic` return an
/// owned copy instead.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pricer_core::math::CovarianceMatrix;
/// use pricer_core::types::TimeGrid;
/// use pricer_models::models::{DiffusionProcess, GbmProcess};
/// use pricer_paths::generator::{MultiPathGenerator, MultiPathSampler};
/// use pricer_paths::rng::GaussianSequenceGenerator;
///
/// let processes: Vec<Arc<dyn DiffusionProcess>> = vec![
///     Arc::new(GbmProcess::new(100.0, 0.03, 0.0, 0.2).unwrap()),
///     Arc::new(GbmProcess::new(50.0, 0.03, 0.01, 0.3).unwrap()),
/// ];
/// let cov = CovarianceMatrix::new(&[0.04, 0.03, 0.03, 0.09], 2).unwrap();
/// let grid = TimeGrid::uniform(1.0, 12).unwrap();
/// let random = GaussianSequenceGenerator::new(24, 42);
///
/// let mut generator =
///     MultiPathGenerator::new(processes, &[0.0, 0.0], &cov, grid, random).unwrap();
///
/// let sample = generator.next().unwrap();
/// assert_eq!(sample.value.asset_count(), 2);
/// assert_eq!(sample.value.path_size(), 12);
/// ```
pub trait MultiPathSampler {
    /// Number of assets per trajectory.
    fn asset_count(&self) -> usize;

    /// Grid every trajectory is sampled on.
    fn time_grid(&self) -> &TimeGrid;

    /// Produces the next trajectory into the internal buffer.
    fn next_ref(&mut self) -> Result<&Sample<MultiPath>, PathGeneratorError>;

    /// Produces the antithetic trajectory into the internal buffer.
    fn antithetic_ref(&mut self) -> Result<&Sample<MultiPath>, PathGeneratorError>;

    /// Produces the next trajectory as an owned value.
    fn next(&mut self) -> Result<Sample<MultiPath>, PathGeneratorError> {
        self.next_ref().cloned()
    }

    /// Produces the antithetic trajectory as an owned value.
    fn antithetic(&mut self) -> Result<Sample<MultiPath>, PathGeneratorError> {
        self.antithetic_ref().cloned()
    }
}

impl<S: MultiPathSampler + ?Sized> MultiPathSampler for Box<S> {
    fn asset_count(&self) -> usize {
        (**self).asset_count()
    }

    fn time_grid(&self) -> &TimeGrid {
        (**self).time_grid()
    }

    fn next_ref(&mut self) -> Result<&Sample<MultiPath>, PathGeneratorError> {
        (**self).next_ref()
    }

    fn antithetic_ref(&mut self) -> Result<&Sample<MultiPath>, PathGeneratorError> {
        (**self).antithetic_ref()
    }
}
