//! Levy distribution.

use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};
use st_special::erf::{erfc, inverse_erf, inverse_erfc};
use std::f64::consts::{PI, SQRT_2};

/// Levy distribution with location `μ` and scale `c`, supported on
/// `(μ, ∞)`.
///
/// Mean and variance are infinite; skew and kurtosis are undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levy {
    location: Real,
    scale: Real,
}

impl Levy {
    /// Create a Levy distribution with the given location and scale.
    pub fn new(location: Real, scale: Real) -> Result<Self> {
        ensure!(location.is_finite(), "location must be finite, got {location}");
        ensure!(
            scale.is_finite() && scale > 0.0,
            "scale must be positive, got {scale}"
        );
        Ok(Self { location, scale })
    }

    /// Location parameter μ.
    pub fn location(&self) -> Real {
        self.location
    }

    /// Scale parameter c.
    pub fn scale(&self) -> Real {
        self.scale
    }
}

impl ContinuousDistribution for Levy {
    fn pdf(&self, x: Real) -> Real {
        if x <= self.location {
            return 0.0;
        }
        let d = x - self.location;
        (self.scale / (2.0 * PI)).sqrt() * (-self.scale / (2.0 * d)).exp() / d.powf(1.5)
    }

    fn cdf(&self, x: Real) -> Real {
        if x <= self.location {
            return 0.0;
        }
        erfc((self.scale / (2.0 * (x - self.location))).sqrt())
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        if p == 0.0 {
            return self.location;
        }
        if p == 1.0 {
            return Real::INFINITY;
        }
        let z = inverse_erfc(p);
        self.location + self.scale / (2.0 * z * z)
    }

    fn summary(&self, which: Moments) -> Summary {
        Summary::build(
            which,
            || Real::INFINITY,
            || Real::INFINITY,
            || Real::NAN,
            || Real::NAN,
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        // If Z is standard normal, μ + c/Z² is Levy(μ, c)
        let z = loop {
            let z = SQRT_2 * inverse_erf(2.0 * src.next_open() - 1.0);
            if z != 0.0 {
                break z;
            }
        };
        self.location + self.scale / (z * z)
    }
}
