//! Discretised simulation time axis.
//!
//! A [`TimeGrid`] is an ordered, immutable sequence of non-negative time
//! points (year fractions). Step `i` spans `[t[i], t[i+1]]` with spacing
//! `dt(i) = t[i+1] - t[i]`.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::TimeGrid;
//!
//! let grid = TimeGrid::uniform(1.0, 4).unwrap();
//! assert_eq!(grid.len(), 5);
//! assert_eq!(grid.steps(), 4);
//! assert!((grid.dt(0) - 0.25).abs() < 1e-15);
//! assert_eq!(grid[4], 1.0);
//! ```

use std::ops::Index;

use super::error::TimeGridError;

/// Ordered sequence of simulation time points.
///
/// Points are finite, non-decreasing and start at or after zero. The grid is
/// immutable once built; generators share it with the paths they produce.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeGrid {
    times: Vec<f64>,
}

impl TimeGrid {
    /// Creates a grid from explicit time points.
    ///
    /// # Arguments
    ///
    /// * `times` - Time points in year fractions
    ///
    /// # Errors
    ///
    /// - `TimeGridError::Empty` if `times` is empty
    /// - `TimeGridError::NonFinite` if any point is NaN or infinite
    /// - `TimeGridError::NegativeStart` if the first point is negative
    /// - `TimeGridError::Decreasing` if a point precedes its predecessor
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::TimeGrid;
    ///
    /// let grid = TimeGrid::new(vec![0.0, 0.5, 2.0]).unwrap();
    /// assert_eq!(grid.dt(1), 1.5);
    ///
    /// assert!(TimeGrid::new(vec![0.0, 1.0, 0.5]).is_err());
    /// ```
    pub fn new(times: Vec<f64>) -> Result<Self, TimeGridError> {
        let first = *times.first().ok_or(TimeGridError::Empty)?;

        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(TimeGridError::NonFinite { index });
        }
        if first < 0.0 {
            return Err(TimeGridError::NegativeStart { time: first });
        }
        for (index, pair) in times.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(TimeGridError::Decreasing {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        Ok(Self { times })
    }

    /// Creates an equally spaced grid `0, h/n, 2h/n, ..., h`.
    ///
    /// # Arguments
    ///
    /// * `horizon` - Final time `h` (must be positive and finite)
    /// * `steps` - Number of steps `n` (must be positive)
    ///
    /// # Errors
    ///
    /// `TimeGridError::InvalidHorizon` or `TimeGridError::InvalidStepCount`.
    pub fn uniform(horizon: f64, steps: usize) -> Result<Self, TimeGridError> {
        if steps == 0 {
            return Err(TimeGridError::InvalidStepCount(steps));
        }
        if !(horizon > 0.0 && horizon.is_finite()) {
            return Err(TimeGridError::InvalidHorizon(horizon));
        }

        let dt = horizon / steps as f64;
        let mut times: Vec<f64> = (0..steps).map(|i| i as f64 * dt).collect();
        // Pin the final point so the horizon is hit exactly.
        times.push(horizon);

        Ok(Self { times })
    }

    /// Returns the number of time points.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the number of steps (`len() - 1`).
    #[inline]
    pub fn steps(&self) -> usize {
        self.times.len() - 1
    }

    /// Returns the spacing of step `i`, `t[i+1] - t[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= steps()`.
    #[inline]
    pub fn dt(&self, i: usize) -> f64 {
        self.times[i + 1] - self.times[i]
    }

    /// Returns time point `i`, or `None` when out of range.
    #[inline]
    pub fn at(&self, i: usize) -> Option<f64> {
        self.times.get(i).copied()
    }

    /// Returns the first time point.
    #[inline]
    pub fn start(&self) -> f64 {
        self.times[0]
    }

    /// Returns the last time point.
    #[inline]
    pub fn end(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Returns all time points.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Iterates over the step spacings.
    pub fn dts(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.times.windows(2).map(|pair| pair[1] - pair[0])
    }

    /// Returns `true` if every step has strictly positive spacing.
    pub fn is_strictly_increasing(&self) -> bool {
        self.times.windows(2).all(|pair| pair[1] > pair[0])
    }

    /// Returns the index of the first strictly non-increasing point, if any.
    pub fn first_non_increasing(&self) -> Option<usize> {
        self.times
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
            .map(|i| i + 1)
    }
}

impl Index<usize> for TimeGrid {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.times[i]
    }
}
