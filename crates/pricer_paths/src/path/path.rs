//! Single-asset trajectory stored as per-step log increments.

use std::sync::Arc;

use pricer_core::types::TimeGrid;

/// Trajectory of one asset over a time grid.
///
/// Step `i` covers `[t[i], t[i+1]]` and holds two log-space increments: the
/// deterministic `drift[i]` and the stochastic `diffusion[i]`. The asset
/// level at `t[i+1]` is the level at `t[i]` times
/// `exp(drift[i] + diffusion[i])`.
///
/// # Memory Layout
///
/// Two contiguous buffers of length `steps`, reused across draws by the
/// generators. The grid is shared, not copied.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    grid: Arc<TimeGrid>,
    drift: Vec<f64>,
    diffusion: Vec<f64>,
}

impl Path {
    /// Creates a zero-filled path over `grid`.
    pub fn new(grid: Arc<TimeGrid>) -> Self {
        let steps = grid.steps();
        Self {
            grid,
            drift: vec![0.0; steps],
            diffusion: vec![0.0; steps],
        }
    }

    /// Number of steps (grid points minus one).
    #[inline]
    pub fn len(&self) -> usize {
        self.drift.len()
    }

    /// Returns true if the path has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drift.is_empty()
    }

    /// Drift increments, one per step.
    #[inline]
    pub fn drift(&self) -> &[f64] {
        &self.drift
    }

    /// Diffusion increments, one per step.
    #[inline]
    pub fn diffusion(&self) -> &[f64] {
        &self.diffusion
    }

    #[inline]
    pub(crate) fn drift_mut(&mut self) -> &mut [f64] {
        &mut self.drift
    }

    #[inline]
    pub(crate) fn diffusion_mut(&mut self) -> &mut [f64] {
        &mut self.diffusion
    }

    /// The grid this path is sampled on.
    #[inline]
    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Total log increment over step `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn log_increment(&self, i: usize) -> f64 {
        self.drift[i] + self.diffusion[i]
    }

    /// Sum of all log increments.
    pub fn total_log_increment(&self) -> f64 {
        self.drift
            .iter()
            .zip(&self.diffusion)
            .map(|(d, w)| d + w)
            .sum()
    }

    /// Levels at every grid point starting from `x0`.
    ///
    /// Returns `steps + 1` values: `x0`, then `x0 * exp(cumulative log
    /// increment)` at each subsequent point.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use pricer_core::types::TimeGrid;
    /// use pricer_paths::path::Path;
    ///
    /// let grid = Arc::new(TimeGrid::uniform(1.0, 4).unwrap());
    /// let path = Path::new(grid);
    ///
    /// // Zero increments keep the level flat
    /// assert_eq!(path.levels(100.0), vec![100.0; 5]);
    /// ```
    pub fn levels(&self, x0: f64) -> Vec<f64> {
        let mut levels = Vec::with_capacity(self.len() + 1);
        let mut level = x0;
        levels.push(level);
        for i in 0..self.len() {
            level *= self.log_increment(i).exp();
            levels.push(level);
        }
        levels
    }
}
