//! Normal (Gaussian) distribution.

use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};
use st_special::erf::{erf, inverse_erf};
use std::f64::consts::{PI, SQRT_2};

/// Normal distribution with mean `μ` and variance `σ²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: Real,
    variance: Real,
    std_dev: Real,
}

impl Normal {
    /// Create a normal distribution from its mean and variance.
    pub fn new(mean: Real, variance: Real) -> Result<Self> {
        ensure!(mean.is_finite(), "mean must be finite, got {mean}");
        ensure!(
            variance.is_finite() && variance > 0.0,
            "variance must be positive, got {variance}"
        );
        Ok(Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }

    /// The standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            variance: 1.0,
            std_dev: 1.0,
        }
    }

    /// Location parameter μ.
    pub fn mean(&self) -> Real {
        self.mean
    }

    /// Variance σ².
    pub fn variance(&self) -> Real {
        self.variance
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: Real) -> Real {
        let z = (x - self.mean) / self.std_dev;
        (-0.5 * z * z).exp() / (self.std_dev * (2.0 * PI).sqrt())
    }

    fn cdf(&self, x: Real) -> Real {
        0.5 * (1.0 + erf((x - self.mean) / (self.std_dev * SQRT_2)))
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        self.mean + self.std_dev * SQRT_2 * inverse_erf(2.0 * p - 1.0)
    }

    fn summary(&self, which: Moments) -> Summary {
        Summary::build(
            which,
            || self.mean,
            || self.variance,
            || 0.0,
            || 0.0,
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.ppf(src.next_open())
    }
}
