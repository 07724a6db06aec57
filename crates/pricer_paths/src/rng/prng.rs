//! Seeded standard normal source shared by the shipped random generators.
//!
//! [`PricerRng`] only fills caller-owned buffers, so sequence and array
//! generators can reuse one allocation for every trajectory.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Standard normal draws from a seeded `StdRng`.
///
/// Cloning copies the stream position: a clone continues with exactly the
/// draws the original would have produced next.
///
/// # Examples
///
/// ```rust
/// use pricer_paths::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let mut step = [0.0; 3];
/// rng.fill_normal(&mut step);
///
/// let mut replay = PricerRng::from_seed(42);
/// let mut again = [0.0; 3];
/// replay.fill_normal(&mut again);
/// assert_eq!(step, again);
/// ```
#[derive(Clone, Debug)]
pub struct PricerRng {
    inner: StdRng,
    seed: u64,
}

impl PricerRng {
    /// Starts the stream identified by `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the stream was started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Overwrites every element of `buffer` with the next standard normals.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = PricerRng::from_seed(2718);
        let mut b = PricerRng::from_seed(2718);
        let (mut xa, mut xb) = ([0.0; 16], [0.0; 16]);

        for _ in 0..8 {
            a.fill_normal(&mut xa);
            b.fill_normal(&mut xb);
            assert_eq!(xa, xb);
        }
        assert_eq!(a.seed(), 2718);
    }

    #[test]
    fn test_clone_continues_stream() {
        let mut original = PricerRng::from_seed(5);
        let mut warmup = [0.0; 7];
        original.fill_normal(&mut warmup);

        let mut copy = original.clone();
        let (mut x, mut y) = ([0.0; 4], [0.0; 4]);
        original.fill_normal(&mut x);
        copy.fill_normal(&mut y);
        assert_eq!(x, y);
        assert_ne!(&x[..], &warmup[..4]);
    }

    #[test]
    fn test_split_fills_match_single_fill() {
        let mut whole = PricerRng::from_seed(31);
        let mut split = PricerRng::from_seed(31);

        let mut all = [0.0; 6];
        whole.fill_normal(&mut all);

        let mut parts = [0.0; 6];
        let (head, tail) = parts.split_at_mut(2);
        split.fill_normal(head);
        split.fill_normal(tail);
        assert_eq!(all, parts);
    }

    #[test]
    fn test_standard_normal_moments() {
        let mut rng = PricerRng::from_seed(7);
        let mut buffer = vec![0.0; 100_000];
        rng.fill_normal(&mut buffer);

        let n = buffer.len() as f64;
        let mean = buffer.iter().sum::<f64>() / n;
        let var = buffer.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1.0);

        assert!(mean.abs() < 0.02, "mean {mean} too far from 0");
        assert!((var - 1.0).abs() < 0.02, "variance {var} too far from 1");
    }

    #[test]
    fn test_empty_buffer_is_a_no_op() {
        let mut rng = PricerRng::from_seed(1);
        let mut reference = rng.clone();
        let mut empty: [f64; 0] = [];
        rng.fill_normal(&mut empty);

        let (mut x, mut y) = ([0.0; 2], [0.0; 2]);
        rng.fill_normal(&mut x);
        reference.fill_normal(&mut y);
        assert_eq!(x, y);
    }
}
