//! Random source used by the generator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomness needed to build an instance
pub trait RandomSource {
    /// `true` with probability `p`
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..upper`
    fn index(&mut self, upper: usize) -> usize;
}

/// [`RandomSource`] over any `rand` generator
pub struct RngSource<R> {
    inner: R,
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn chance(&mut self, p: f64) -> bool {
        self.inner.random::<f64>() < p
    }

    fn index(&mut self, upper: usize) -> usize {
        self.inner.random_range(0..upper)
    }
}
