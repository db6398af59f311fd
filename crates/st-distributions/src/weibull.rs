//! Weibull distribution.

use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};
use st_special::gamma::gamma;

/// Weibull distribution with scale `λ` and shape `k`.
///
/// The exponential (k = 1) and Rayleigh (k = 2) distributions are
/// special cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weibull {
    scale: Real,
    shape: Real,
}

impl Weibull {
    /// Create a Weibull distribution with the given scale and shape.
    pub fn new(scale: Real, shape: Real) -> Result<Self> {
        ensure!(
            scale.is_finite() && scale > 0.0,
            "scale must be positive, got {scale}"
        );
        ensure!(
            shape.is_finite() && shape > 0.0,
            "shape must be positive, got {shape}"
        );
        Ok(Self { scale, shape })
    }

    /// Scale parameter λ.
    pub fn scale(&self) -> Real {
        self.scale
    }

    /// Shape parameter k.
    pub fn shape(&self) -> Real {
        self.shape
    }
}

impl ContinuousDistribution for Weibull {
    fn pdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        let (l, k) = (self.scale, self.shape);
        (k / l) * (x / l).powf(k - 1.0) * (-(x / l).powf(k)).exp()
    }

    fn cdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        1.0 - (-(x / self.scale).powf(self.shape)).exp()
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        self.scale * (-(1.0 - p).ln()).powf(1.0 / self.shape)
    }

    fn summary(&self, which: Moments) -> Summary {
        let (l, k) = (self.scale, self.shape);
        let g = |i: Real| gamma(1.0 + i / k);
        let mean = l * g(1.0);
        let variance = l * l * g(2.0) - mean * mean;
        Summary::build(
            which,
            || mean,
            || variance,
            || (g(3.0) * l * l * l - 3.0 * mean * variance - mean * mean * mean)
                / variance.powf(1.5),
            || {
                let g1 = g(1.0);
                let g2 = g(2.0);
                (-6.0 * g1.powi(4) + 12.0 * g1 * g1 * g2 - 3.0 * g2 * g2
                    - 4.0 * g1 * g(3.0)
                    + g(4.0))
                    / (g2 - g1 * g1).powi(2)
            },
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.ppf(src.next_open())
    }
}
