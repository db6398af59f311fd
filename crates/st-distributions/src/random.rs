//! The uniform-random-source capability distributions sample from.
//!
//! There is no global RNG state: every `rvs` call takes the source as an
//! explicit argument, so thread safety is entirely the caller's choice of
//! source.

use rand::RngCore;
use rand_mt::Mt19937GenRand64;
use st_core::Real;

/// A source of uniform deviates in `[0, 1)`.
pub trait UniformSource {
    /// The next uniform deviate in `[0, 1)`.
    fn next_uniform(&mut self) -> Real;

    /// The next uniform deviate in the open interval `(0, 1)`.
    ///
    /// Used by inverse-CDF sampling, where an exact 0 would map to the
    /// support infimum (often −∞).
    fn next_open(&mut self) -> Real {
        loop {
            let u = self.next_uniform();
            if u > 0.0 {
                return u;
            }
        }
    }
}

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwister {
    rng: Mt19937GenRand64,
}

impl MersenneTwister {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }
}

impl UniformSource for MersenneTwister {
    fn next_uniform(&mut self) -> Real {
        // Map u64 to [0.0, 1.0)
        let u: u64 = self.rng.next_u64();
        u as f64 / (u64::MAX as f64 + 1.0)
    }
}
