//! DiffusionProcess trait: the per-asset evolution capability.
//!
//! A path generator asks each asset's process for three things:
//!
//! - `x0()`: the level at the start of the simulation,
//! - `drift(t, x)`: the deterministic rate of change of the log-level,
//! - `variance(t, x, dt)`: the variance of the log-level increment over `dt`.
//!
//! The generator evolves levels multiplicatively:
//!
//! ```text
//! x(t+dt) = x(t) * exp(drift(t, x) * dt - w * sqrt(variance(t, x, dt)))
//! ```
//!
//! where `w` is a correlated unit-variance draw.
//!
//! ## Dynamic dispatch
//!
//! Generators hold processes as `Arc<dyn DiffusionProcess>`, so test doubles
//! and heterogeneous asset sets can be mixed freely.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{DiffusionProcess, ProcessError};
//!
//! #[derive(Debug)]
//! struct FlatProcess;
//!
//! impl DiffusionProcess for FlatProcess {
//!     fn x0(&self) -> f64 {
//!         1.0
//!     }
//!     fn drift(&self, _t: f64, _x: f64) -> Result<f64, ProcessError> {
//!         Ok(0.0)
//!     }
//!     fn variance(&self, _t: f64, _x: f64, dt: f64) -> Result<f64, ProcessError> {
//!         Ok(0.01 * dt)
//!     }
//! }
//!
//! let process = FlatProcess;
//! assert!((process.std_deviation(0.0, 1.0, 4.0).unwrap() - 0.2).abs() < 1e-15);
//! ```

use std::fmt;
use std::sync::Arc;

use super::error::ProcessError;

/// Per-asset diffusion capability consumed by path generators.
///
/// Implementations must be cheap to evaluate: generators call `drift` and
/// `variance` once per asset per time step.
pub trait DiffusionProcess: fmt::Debug + Send + Sync {
    /// Initial level of the process.
    fn x0(&self) -> f64;

    /// Drift of the log-level at time `t` and level `x`.
    fn drift(&self, t: f64, x: f64) -> Result<f64, ProcessError>;

    /// Variance of the log-level increment over `[t, t + dt]` from level `x`.
    ///
    /// Must be non-negative.
    fn variance(&self, t: f64, x: f64, dt: f64) -> Result<f64, ProcessError>;

    /// Standard deviation over `dt`, `sqrt(variance(t, x, dt))`.
    fn std_deviation(&self, t: f64, x: f64, dt: f64) -> Result<f64, ProcessError> {
        Ok(self.variance(t, x, dt)?.sqrt())
    }
}

impl<P: DiffusionProcess + ?Sized> DiffusionProcess for Arc<P> {
    fn x0(&self) -> f64 {
        (**self).x0()
    }

    fn drift(&self, t: f64, x: f64) -> Result<f64, ProcessError> {
        (**self).drift(t, x)
    }

    fn variance(&self, t: f64, x: f64, dt: f64) -> Result<f64, ProcessError> {
        (**self).variance(t, x, dt)
    }
}

/// Checks a time step passed to [`DiffusionProcess::variance`].
#[inline]
pub(crate) fn check_time_step(dt: f64) -> Result<(), ProcessError> {
    if dt >= 0.0 && dt.is_finite() {
        Ok(())
    } else {
        Err(ProcessError::InvalidTimeStep(dt))
    }
}
