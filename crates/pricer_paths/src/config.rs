//! Multi-path generator configuration.
//!
//! Settings that do not change the shape of the simulation: how the
//! covariance square root is taken, how antithetic draws are produced, and
//! how much negative curvature the decomposition tolerates.

use pricer_core::math::{SqrtMethod, DEFAULT_PSD_TOLERANCE};

use crate::error::PathGeneratorError;

/// How `antithetic()` produces its trajectory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AntitheticPolicy {
    /// Draw a fresh, independent trajectory (same as `next()`).
    #[default]
    Independent,

    /// Re-evaluate the most recent base draw with every draw negated.
    ///
    /// Requires a preceding `next()` call.
    SignFlip,
}

/// Generator configuration.
///
/// Use [`GeneratorConfig::builder`] to construct validated instances;
/// `Default` gives the validated defaults.
///
/// # Examples
///
/// ```rust
/// use pricer_core::math::SqrtMethod;
/// use pricer_paths::config::{AntitheticPolicy, GeneratorConfig};
///
/// let config = GeneratorConfig::builder()
///     .sqrt_method(SqrtMethod::Cholesky)
///     .antithetic(AntitheticPolicy::SignFlip)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.sqrt_method(), SqrtMethod::Cholesky);
/// assert_eq!(config.psd_tolerance(), 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Covariance square-root method.
    sqrt_method: SqrtMethod,
    /// Antithetic behaviour.
    antithetic: AntitheticPolicy,
    /// Tolerance for negative eigenvalues or pivots.
    psd_tolerance: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sqrt_method: SqrtMethod::default(),
            antithetic: AntitheticPolicy::default(),
            psd_tolerance: DEFAULT_PSD_TOLERANCE,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the covariance square-root method.
    #[inline]
    pub fn sqrt_method(&self) -> SqrtMethod {
        self.sqrt_method
    }

    /// Returns the antithetic policy.
    #[inline]
    pub fn antithetic(&self) -> AntitheticPolicy {
        self.antithetic
    }

    /// Returns the semi-definiteness tolerance.
    #[inline]
    pub fn psd_tolerance(&self) -> f64 {
        self.psd_tolerance
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `PathGeneratorError::InvalidParameter` if `psd_tolerance` is negative
    /// or not finite.
    pub fn validate(&self) -> Result<(), PathGeneratorError> {
        if !(self.psd_tolerance >= 0.0 && self.psd_tolerance.is_finite()) {
            return Err(PathGeneratorError::InvalidParameter {
                name: "psd_tolerance",
                value: format!("{} must be finite and non-negative", self.psd_tolerance),
            });
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML.
    ///
    /// Missing keys take their default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_paths::config::{AntitheticPolicy, GeneratorConfig};
    ///
    /// let config = GeneratorConfig::from_toml_str(r#"
    ///     antithetic = "sign_flip"
    /// "#).unwrap();
    /// assert_eq!(config.antithetic(), AntitheticPolicy::SignFlip);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, PathGeneratorError> {
        let config: GeneratorConfig =
            toml::from_str(content).map_err(|e| PathGeneratorError::InvalidParameter {
                name: "config",
                value: format!("failed to parse TOML: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, PathGeneratorError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            PathGeneratorError::InvalidParameter {
                name: "config",
                value: format!("failed to read {}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    sqrt_method: SqrtMethod,
    antithetic: AntitheticPolicy,
    psd_tolerance: Option<f64>,
}

impl GeneratorConfigBuilder {
    /// Sets the covariance square-root method.
    #[inline]
    pub fn sqrt_method(mut self, method: SqrtMethod) -> Self {
        self.sqrt_method = method;
        self
    }

    /// Sets the antithetic policy.
    #[inline]
    pub fn antithetic(mut self, policy: AntitheticPolicy) -> Self {
        self.antithetic = policy;
        self
    }

    /// Sets the semi-definiteness tolerance.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Finite, non-negative
    #[inline]
    pub fn psd_tolerance(mut self, tolerance: f64) -> Self {
        self.psd_tolerance = Some(tolerance);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// `PathGeneratorError::InvalidParameter` if the tolerance is invalid.
    pub fn build(self) -> Result<GeneratorConfig, PathGeneratorError> {
        let config = GeneratorConfig {
            sqrt_method: self.sqrt_method,
            antithetic: self.antithetic,
            psd_tolerance: self.psd_tolerance.unwrap_or(DEFAULT_PSD_TOLERANCE),
        };

        config.validate()?;
        Ok(config)
    }
}
