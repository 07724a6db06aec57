//! Correlated multi-asset path generator driven by diffusion processes.
//!
//! # Algorithm
//!
//! For each trajectory one sequence of `N * steps` independent draws is
//! taken. For each step `i`, with `t = t[i+1]` and `dt = dt(i)`:
//!
//! 1. the `i`-th block of `N` draws is multiplied by the covariance square
//!    root `M`,
//! 2. component `j` is divided by the norm of row `j` of `M`, giving a
//!    unit-variance draw `w[j]`,
//! 3. asset `j` moves by
//!    `drift = dt * drift(t, x[j])` and
//!    `diffusion = -w[j] * sqrt(variance(t, x[j], dt))`,
//!    then `x[j] *= exp(drift + diffusion)`.

use std::sync::Arc;

use pricer_core::math::{CorrelationTransform, CovarianceMatrix};
use pricer_core::types::{Sample, TimeGrid};
use pricer_models::models::DiffusionProcess;
use tracing::{debug, trace, warn};

use crate::config::{AntitheticPolicy, GeneratorConfig};
use crate::error::PathGeneratorError;
use crate::path::MultiPath;
use crate::rng::RandomSequenceGenerator;

use super::sampler::MultiPathSampler;

/// Multi-asset path generator.
///
/// Owns its random source, the covariance square root and a reusable output
/// buffer. Construction validates every size up front; afterwards the only
/// failures come from the injected processes and random source.
///
/// # Type Parameters
///
/// * `G` - Random sequence source; `Box<dyn RandomSequenceGenerator>` works
///   when the source is chosen at runtime
pub struct MultiPathGenerator<G> {
    processes: Vec<Arc<dyn DiffusionProcess>>,
    transform: CorrelationTransform,
    /// `1 / row_norm(j)`, or 0 for a zero row.
    scales: Vec<f64>,
    grid: Arc<TimeGrid>,
    generator: G,
    config: GeneratorConfig,
    /// Copy of the most recent base sequence.
    draws: Vec<f64>,
    /// Weight of the most recent base sequence, if any.
    base_weight: Option<f64>,
    correlated: Vec<f64>,
    levels: Vec<f64>,
    buffer: Sample<MultiPath>,
}

impl<G: RandomSequenceGenerator> MultiPathGenerator<G> {
    /// Creates a generator with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `processes` - One diffusion process per asset
    /// * `drifts` - One drift rate per asset, used to initialise the drift
    ///   increments
    /// * `covariance` - `N x N` covariance; `N` is the asset count
    /// * `grid` - Time grid with at least two points
    /// * `generator` - Source of `N * steps` long sequences
    ///
    /// # Errors
    ///
    /// See [`MultiPathGenerator::with_config`].
    pub fn new(
        processes: Vec<Arc<dyn DiffusionProcess>>,
        drifts: &[f64],
        covariance: &CovarianceMatrix,
        grid: TimeGrid,
        generator: G,
    ) -> Result<Self, PathGeneratorError> {
        Self::with_config(
            processes,
            drifts,
            covariance,
            grid,
            generator,
            GeneratorConfig::default(),
        )
    }

    /// Creates a generator with an explicit configuration.
    ///
    /// # Errors
    ///
    /// - `TimeGridTooShort` if the grid has fewer than two points
    /// - `DimensionMismatch` if the drift vector, the process list or the
    ///   generator dimension does not match the covariance size
    /// - `Correlation` if the covariance is not positive semi-definite
    pub fn with_config(
        processes: Vec<Arc<dyn DiffusionProcess>>,
        drifts: &[f64],
        covariance: &CovarianceMatrix,
        grid: TimeGrid,
        generator: G,
        config: GeneratorConfig,
    ) -> Result<Self, PathGeneratorError> {
        config.validate()?;

        let assets = covariance.dim();
        if grid.len() < 2 {
            return Err(PathGeneratorError::TimeGridTooShort {
                points: grid.len(),
            });
        }
        let steps = grid.steps();

        check_size("drift vector", assets, drifts.len())?;
        check_size("process list", assets, processes.len())?;
        check_size("random sequence", assets * steps, generator.dimension())?;

        let transform =
            CorrelationTransform::new(covariance, config.sqrt_method(), config.psd_tolerance())?;

        let scales = (0..assets)
            .map(|j| {
                let norm = transform.row_norm(j);
                if norm > 0.0 {
                    1.0 / norm
                } else {
                    warn!(asset = j, "Zero variance: correlated draw is always zero");
                    0.0
                }
            })
            .collect();

        let grid = Arc::new(grid);
        let mut buffer = Sample::new(MultiPath::new(assets, Arc::clone(&grid)));
        for (path, &mu) in buffer.value.paths_mut().iter_mut().zip(drifts) {
            for (increment, dt) in path.drift_mut().iter_mut().zip(grid.dts()) {
                *increment = mu * dt;
            }
        }

        debug!(
            assets,
            steps,
            method = ?config.sqrt_method(),
            antithetic = ?config.antithetic(),
            "Multi-path generator initialised"
        );

        Ok(Self {
            processes,
            transform,
            scales,
            grid,
            generator,
            config,
            draws: vec![0.0; assets * steps],
            base_weight: None,
            correlated: vec![0.0; assets],
            levels: vec![0.0; assets],
            buffer,
        })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the covariance square root.
    #[inline]
    pub fn transform(&self) -> &CorrelationTransform {
        &self.transform
    }

    /// Returns the random source.
    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Draws a base sequence into `self.draws` and records its weight.
    fn draw(&mut self) -> Result<f64, PathGeneratorError> {
        let sequence = self.generator.next_sequence()?;
        if sequence.value.len() != self.draws.len() {
            return Err(PathGeneratorError::DimensionMismatch {
                quantity: "random sequence",
                expected: self.draws.len(),
                actual: sequence.value.len(),
            });
        }
        self.draws.copy_from_slice(&sequence.value);
        self.base_weight = Some(sequence.weight);
        Ok(sequence.weight)
    }

    /// Evolves every asset over the grid from `sign * self.draws`.
    fn evolve(&mut self, sign: f64, weight: f64) -> Result<(), PathGeneratorError> {
        let assets = self.processes.len();
        let times = self.grid.times();

        for (level, process) in self.levels.iter_mut().zip(&self.processes) {
            *level = process.x0();
        }

        // Covariance construction guarantees at least one asset.
        for (i, block) in self.draws.chunks_exact(assets).enumerate() {
            let t = times[i + 1];
            let dt = times[i + 1] - times[i];
            self.transform.apply(block, &mut self.correlated);

            let paths = self.buffer.value.paths_mut();
            for j in 0..assets {
                let process = &self.processes[j];
                let x = self.levels[j];
                let w = sign * self.correlated[j] * self.scales[j];

                let variance = process.variance(t, x, dt)?;
                // Also rejects NaN.
                if !(variance >= 0.0) {
                    return Err(PathGeneratorError::NegativeVariance { asset: j, variance });
                }
                let drift = dt * process.drift(t, x)?;
                let diffusion = -w * variance.sqrt();

                paths[j].drift_mut()[i] = drift;
                paths[j].diffusion_mut()[i] = diffusion;
                self.levels[j] = x * (drift + diffusion).exp();
            }
        }

        self.buffer.weight = weight;
        trace!(weight, sign, "Trajectory generated");
        Ok(())
    }
}

impl<G: RandomSequenceGenerator> MultiPathSampler for MultiPathGenerator<G> {
    fn asset_count(&self) -> usize {
        self.processes.len()
    }

    fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    fn next_ref(&mut self) -> Result<&Sample<MultiPath>, PathGeneratorError> {
        let weight = self.draw()?;
        self.evolve(1.0, weight)?;
        Ok(&self.buffer)
    }

    fn antithetic_ref(&mut self) -> Result<&Sample<MultiPath>, PathGeneratorError> {
        match self.config.antithetic() {
            AntitheticPolicy::Independent => self.next_ref(),
            AntitheticPolicy::SignFlip => {
                let weight = self.base_weight.ok_or(PathGeneratorError::NoBaseSample)?;
                self.evolve(-1.0, weight)?;
                Ok(&self.buffer)
            }
        }
    }
}

impl<G> std::fmt::Debug for MultiPathGenerator<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiPathGenerator")
            .field("assets", &self.processes.len())
            .field("steps", &self.grid.steps())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[inline]
fn check_size(
    quantity: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), PathGeneratorError> {
    if expected == actual {
        Ok(())
    } else {
        Err(PathGeneratorError::DimensionMismatch {
            quantity,
            expected,
            actual,
        })
    }
}
