//! Exponential distribution.

use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};

/// Exponential distribution with rate `λ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: Real,
}

impl Exponential {
    /// Create an exponential distribution with the given rate.
    pub fn new(rate: Real) -> Result<Self> {
        ensure!(
            rate.is_finite() && rate > 0.0,
            "rate must be positive, got {rate}"
        );
        Ok(Self { rate })
    }

    /// Rate parameter λ.
    pub fn rate(&self) -> Real {
        self.rate
    }
}

impl ContinuousDistribution for Exponential {
    fn pdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        self.rate * (-self.rate * x).exp()
    }

    fn cdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        1.0 - (-self.rate * x).exp()
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        -(1.0 - p).ln() / self.rate
    }

    fn summary(&self, which: Moments) -> Summary {
        let l = self.rate;
        Summary::build(
            which,
            || 1.0 / l,
            || 1.0 / (l * l),
            || 2.0,
            || 6.0,
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.ppf(src.next_open())
    }
}
