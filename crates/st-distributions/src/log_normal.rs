//! Log-normal distribution.

use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};
use st_special::erf::{erf, inverse_erf};
use std::f64::consts::{PI, SQRT_2};

/// Log-normal distribution: `ln X` is normal with mean `μ` and variance
/// `σ²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormal {
    mu: Real,
    sigma2: Real,
    sigma: Real,
}

impl LogNormal {
    /// Create a log-normal distribution from the mean and variance of
    /// the underlying normal.
    pub fn new(mu: Real, sigma2: Real) -> Result<Self> {
        ensure!(mu.is_finite(), "mu must be finite, got {mu}");
        ensure!(
            sigma2.is_finite() && sigma2 > 0.0,
            "sigma2 must be positive, got {sigma2}"
        );
        Ok(Self {
            mu,
            sigma2,
            sigma: sigma2.sqrt(),
        })
    }

    /// Log-scale location μ.
    pub fn mu(&self) -> Real {
        self.mu
    }

    /// Log-scale variance σ².
    pub fn sigma2(&self) -> Real {
        self.sigma2
    }
}

impl ContinuousDistribution for LogNormal {
    fn pdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        let z = (x.ln() - self.mu) / self.sigma;
        (-0.5 * z * z).exp() / (x * self.sigma * (2.0 * PI).sqrt())
    }

    fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        0.5 + 0.5 * erf((x.ln() - self.mu) / (self.sigma * SQRT_2))
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        if p == 0.0 {
            return 0.0;
        }
        (self.mu + self.sigma * SQRT_2 * inverse_erf(2.0 * p - 1.0)).exp()
    }

    fn summary(&self, which: Moments) -> Summary {
        let (m, s2) = (self.mu, self.sigma2);
        Summary::build(
            which,
            || (m + s2 / 2.0).exp(),
            || (s2.exp() - 1.0) * (2.0 * m + s2).exp(),
            || (s2.exp() + 2.0) * (s2.exp() - 1.0).sqrt(),
            || (4.0 * s2).exp() + 2.0 * (3.0 * s2).exp() + 3.0 * (2.0 * s2).exp() - 6.0,
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.ppf(src.next_open())
    }
}
