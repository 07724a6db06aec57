//! Random sequence generators: one weighted draw vector per trajectory.
//!
//! A sequence generator declares its dimensionality up front. The
//! multi-path generator requires `dimension() == assets * steps` and reads
//! the sequence grouped per time step, then per asset:
//!
//! ```text
//! [z(step 0, asset 0), z(step 0, asset 1), ..., z(step 1, asset 0), ...]
//! ```

use pricer_core::types::Sample;

use super::prng::PricerRng;
use super::RandomError;

/// Source of weighted sequences of independent draws.
///
/// Implementations are called once per trajectory. The returned reference
/// is valid until the next call.
pub trait RandomSequenceGenerator {
    /// Length of every produced sequence.
    fn dimension(&self) -> usize;

    /// Produces the next weighted sequence.
    fn next_sequence(&mut self) -> Result<&Sample<Vec<f64>>, RandomError>;
}

impl<G: RandomSequenceGenerator + ?Sized> RandomSequenceGenerator for Box<G> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn next_sequence(&mut self) -> Result<&Sample<Vec<f64>>, RandomError> {
        (**self).next_sequence()
    }
}

impl<G: RandomSequenceGenerator + ?Sized> RandomSequenceGenerator for &mut G {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn next_sequence(&mut self) -> Result<&Sample<Vec<f64>>, RandomError> {
        (**self).next_sequence()
    }
}

/// Independent standard normal sequences with unit weight.
///
/// # Examples
///
/// ```
/// use pricer_paths::rng::{GaussianSequenceGenerator, RandomSequenceGenerator};
///
/// let mut generator = GaussianSequenceGenerator::new(6, 42);
/// let sequence = generator.next_sequence().unwrap();
/// assert_eq!(sequence.value.len(), 6);
/// assert_eq!(sequence.weight, 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct GaussianSequenceGenerator {
    rng: PricerRng,
    sequence: Sample<Vec<f64>>,
}

impl GaussianSequenceGenerator {
    /// Creates a generator of `dimension`-long sequences seeded with `seed`.
    pub fn new(dimension: usize, seed: u64) -> Self {
        Self {
            rng: PricerRng::from_seed(seed),
            sequence: Sample::new(vec![0.0; dimension]),
        }
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl RandomSequenceGenerator for GaussianSequenceGenerator {
    fn dimension(&self) -> usize {
        self.sequence.value.len()
    }

    fn next_sequence(&mut self) -> Result<&Sample<Vec<f64>>, RandomError> {
        self.rng.fill_normal(&mut self.sequence.value);
        Ok(&self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_sequence_dimension_and_weight() {
        let mut g = GaussianSequenceGenerator::new(10, 3);
        assert_eq!(g.dimension(), 10);
        assert_eq!(g.seed(), 3);

        let s = g.next_sequence().unwrap();
        assert_eq!(s.value.len(), 10);
        assert_eq!(s.weight, 1.0);
    }

    #[test]
    fn test_gaussian_sequence_reproducible() {
        let mut a = GaussianSequenceGenerator::new(5, 99);
        let mut b = GaussianSequenceGenerator::new(5, 99);
        for _ in 0..10 {
            let sa = a.next_sequence().unwrap().clone();
            let sb = b.next_sequence().unwrap().clone();
            assert_eq!(sa, sb);
        }
    }

    #[test]
    fn test_successive_sequences_differ() {
        let mut g = GaussianSequenceGenerator::new(4, 1);
        let first = g.next_sequence().unwrap().value.clone();
        let second = g.next_sequence().unwrap().value.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn test_boxed_trait_object() {
        let mut boxed: Box<dyn RandomSequenceGenerator> =
            Box::new(GaussianSequenceGenerator::new(3, 5));
        assert_eq!(boxed.dimension(), 3);
        assert_eq!(boxed.next_sequence().unwrap().value.len(), 3);
    }

    #[test]
    fn test_borrowed_generator() {
        fn draw_len<G: RandomSequenceGenerator>(mut generator: G) -> usize {
            generator.next_sequence().map(|s| s.value.len()).unwrap_or(0)
        }

        let mut g = GaussianSequenceGenerator::new(2, 8);
        assert_eq!(draw_len(&mut g), 2);
        // Still usable after lending it out
        assert!(g.next_sequence().is_ok());
    }
}
