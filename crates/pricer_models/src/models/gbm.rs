//! Geometric Brownian Motion (Black-Scholes) diffusion process.
//!
//! GBM is the fundamental model for asset price dynamics, described by:
//! ```text
//! dS = (r - q) * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - r = risk-free rate
//! - q = continuous dividend yield
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Log-space formulation
//!
//! Path generators evolve `ln S`, whose drift and variance are constant:
//! ```text
//! d ln S = (r - q - 0.5*sigma^2) dt + sigma dW
//! Var[ln S(t+dt) - ln S(t)] = sigma^2 * dt
//! ```

use super::error::ProcessError;
use super::process::{check_time_step, DiffusionProcess};

/// Black-Scholes process with constant rate, dividend yield and volatility.
///
/// # Examples
///
/// ```
/// use pricer_models::models::{DiffusionProcess, GbmProcess};
///
/// let process = GbmProcess::new(100.0, 0.05, 0.01, 0.2).unwrap();
/// assert_eq!(process.x0(), 100.0);
///
/// // Log-drift: r - q - sigma^2 / 2
/// assert!((process.drift(0.0, 100.0).unwrap() - 0.02).abs() < 1e-15);
///
/// // Variance over a quarter: sigma^2 * dt
/// assert!((process.variance(0.0, 100.0, 0.25).unwrap() - 0.01).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmProcess {
    spot: f64,
    rate: f64,
    dividend: f64,
    volatility: f64,
}

impl GbmProcess {
    /// Creates new GBM process with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial spot price (must be positive)
    /// * `rate` - Risk-free rate (annualised)
    /// * `dividend` - Continuous dividend yield (annualised)
    /// * `volatility` - Volatility (must be non-negative)
    ///
    /// # Errors
    /// `ProcessError::InvalidParameter` for a non-positive spot, negative
    /// volatility or any non-finite input.
    pub fn new(spot: f64, rate: f64, dividend: f64, volatility: f64) -> Result<Self, ProcessError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(ProcessError::InvalidParameter {
                name: "spot",
                value: spot,
            });
        }
        if !rate.is_finite() {
            return Err(ProcessError::InvalidParameter {
                name: "rate",
                value: rate,
            });
        }
        if !dividend.is_finite() {
            return Err(ProcessError::InvalidParameter {
                name: "dividend",
                value: dividend,
            });
        }
        if !(volatility >= 0.0 && volatility.is_finite()) {
            return Err(ProcessError::InvalidParameter {
                name: "volatility",
                value: volatility,
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend,
            volatility,
        })
    }

    /// Initial spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Dividend yield.
    #[inline]
    pub fn dividend(&self) -> f64 {
        self.dividend
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

impl DiffusionProcess for GbmProcess {
    fn x0(&self) -> f64 {
        self.spot
    }

    fn drift(&self, _t: f64, _x: f64) -> Result<f64, ProcessError> {
        Ok(self.rate - self.dividend - 0.5 * self.volatility * self.volatility)
    }

    fn variance(&self, _t: f64, _x: f64, dt: f64) -> Result<f64, ProcessError> {
        check_time_step(dt)?;
        Ok(self.volatility * self.volatility * dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ================================================================
    // Construction
    // ================================================================

    #[test]
    fn test_gbm_new_valid() {
        let p = GbmProcess::new(100.0, 0.05, 0.0, 0.2).unwrap();
        assert_eq!(p.spot(), 100.0);
        assert_eq!(p.rate(), 0.05);
        assert_eq!(p.dividend(), 0.0);
        assert_eq!(p.volatility(), 0.2);
    }

    #[test]
    fn test_gbm_new_invalid() {
        assert!(matches!(
            GbmProcess::new(0.0, 0.05, 0.0, 0.2),
            Err(ProcessError::InvalidParameter { name: "spot", .. })
        ));
        assert!(matches!(
            GbmProcess::new(100.0, 0.05, 0.0, -0.2),
            Err(ProcessError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));
        assert!(GbmProcess::new(100.0, f64::NAN, 0.0, 0.2).is_err());
        assert!(GbmProcess::new(100.0, 0.05, f64::INFINITY, 0.2).is_err());
    }

    #[test]
    fn test_zero_volatility_allowed() {
        let p = GbmProcess::new(100.0, 0.05, 0.0, 0.0).unwrap();
        assert_eq!(p.variance(0.0, 100.0, 1.0).unwrap(), 0.0);
        assert_relative_eq!(p.drift(0.0, 100.0).unwrap(), 0.05, epsilon = 1e-15);
    }

    // ================================================================
    // Drift and variance
    // ================================================================

    #[test]
    fn test_drift_is_level_independent() {
        let p = GbmProcess::new(100.0, 0.03, 0.01, 0.3).unwrap();
        let expected = 0.03 - 0.01 - 0.5 * 0.09;
        assert_relative_eq!(p.drift(0.0, 50.0).unwrap(), expected, epsilon = 1e-15);
        assert_relative_eq!(p.drift(2.0, 500.0).unwrap(), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_variance_scales_with_dt() {
        let p = GbmProcess::new(100.0, 0.05, 0.0, 0.25).unwrap();
        let v1 = p.variance(0.0, 100.0, 0.5).unwrap();
        let v2 = p.variance(0.0, 100.0, 1.0).unwrap();
        assert_relative_eq!(v2, 2.0 * v1, epsilon = 1e-15);
        assert_relative_eq!(p.std_deviation(0.0, 100.0, 1.0).unwrap(), 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_negative_dt_rejected() {
        let p = GbmProcess::new(100.0, 0.05, 0.0, 0.2).unwrap();
        assert_eq!(
            p.variance(0.0, 100.0, -0.1),
            Err(ProcessError::InvalidTimeStep(-0.1))
        );
    }
}
