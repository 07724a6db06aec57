//! Ornstein-Uhlenbeck (mean-reverting) diffusion process.
//!
//! The process is described by:
//! ```text
//! dx(t) = a * (b - x(t)) * dt + sigma * dW(t)
//! ```
//! where:
//! - a = mean reversion speed (non-negative)
//! - b = long-term level
//! - sigma = volatility (non-negative)
//!
//! ## Exact variance
//!
//! The conditional variance over a step is known in closed form:
//! ```text
//! Var[x(t+dt) | x(t)] = sigma^2 * (1 - exp(-2 a dt)) / (2 a)
//! ```
//! which tends to `sigma^2 * dt` as `a -> 0`.

use super::error::ProcessError;
use super::process::{check_time_step, DiffusionProcess};

/// Below this speed the variance uses its `a -> 0` limit.
const SPEED_EPSILON: f64 = 1e-12;

/// Ornstein-Uhlenbeck process with constant parameters.
///
/// # Examples
///
/// ```
/// use pricer_models::models::{DiffusionProcess, OrnsteinUhlenbeckProcess};
///
/// let ou = OrnsteinUhlenbeckProcess::new(0.03, 0.5, 0.05, 0.01).unwrap();
///
/// // Pulled towards the long-term level
/// assert!(ou.drift(0.0, 0.03).unwrap() > 0.0);
/// assert!(ou.drift(0.0, 0.07).unwrap() < 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrnsteinUhlenbeckProcess {
    x0: f64,
    speed: f64,
    level: f64,
    volatility: f64,
}

impl OrnsteinUhlenbeckProcess {
    /// Creates a new OU process.
    ///
    /// # Arguments
    /// * `x0` - Initial value
    /// * `speed` - Mean reversion speed `a` (non-negative)
    /// * `level` - Long-term level `b`
    /// * `volatility` - Volatility `sigma` (non-negative)
    ///
    /// # Errors
    /// `ProcessError::InvalidParameter` for negative speed or volatility, or
    /// any non-finite input.
    pub fn new(x0: f64, speed: f64, level: f64, volatility: f64) -> Result<Self, ProcessError> {
        if !x0.is_finite() {
            return Err(ProcessError::InvalidParameter {
                name: "x0",
                value: x0,
            });
        }
        if !(speed >= 0.0 && speed.is_finite()) {
            return Err(ProcessError::InvalidParameter {
                name: "speed",
                value: speed,
            });
        }
        if !level.is_finite() {
            return Err(ProcessError::InvalidParameter {
                name: "level",
                value: level,
            });
        }
        if !(volatility >= 0.0 && volatility.is_finite()) {
            return Err(ProcessError::InvalidParameter {
                name: "volatility",
                value: volatility,
            });
        }

        Ok(Self {
            x0,
            speed,
            level,
            volatility,
        })
    }

    /// Mean reversion speed.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Long-term level.
    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

impl DiffusionProcess for OrnsteinUhlenbeckProcess {
    fn x0(&self) -> f64 {
        self.x0
    }

    fn drift(&self, _t: f64, x: f64) -> Result<f64, ProcessError> {
        Ok(self.speed * (self.level - x))
    }

    fn variance(&self, _t: f64, _x: f64, dt: f64) -> Result<f64, ProcessError> {
        check_time_step(dt)?;
        let sigma2 = self.volatility * self.volatility;
        if self.speed < SPEED_EPSILON {
            return Ok(sigma2 * dt);
        }
        // -expm1(-2a dt) keeps precision for small a*dt
        Ok(sigma2 * -(-2.0 * self.speed * dt).exp_m1() / (2.0 * self.speed))
    }
}
