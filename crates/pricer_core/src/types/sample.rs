//! Weighted Monte Carlo samples.

/// A value paired with its likelihood weight.
///
/// Plain Monte Carlo draws carry weight 1.0; importance sampling or
/// weighted quasi-random schemes may attach other weights, which downstream
/// estimators multiply into each observation.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Sample;
///
/// let sample = Sample::new(vec![0.3, -1.2]);
/// assert_eq!(sample.weight, 1.0);
///
/// let weighted = Sample::with_weight(2.5, 0.5);
/// assert_eq!(weighted.value, 2.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<T> {
    /// The sampled value.
    pub value: T,
    /// Likelihood weight.
    pub weight: f64,
}

impl<T> Sample<T> {
    /// Creates a sample with unit weight.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value, weight: 1.0 }
    }

    /// Creates a sample with the given weight.
    #[inline]
    pub fn with_weight(value: T, weight: f64) -> Self {
        Self { value, weight }
    }

    /// Transforms the value, keeping the weight.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Sample<U> {
        Sample {
            value: f(self.value),
            weight: self.weight,
        }
    }
}

impl<T: Default> Default for Sample<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
