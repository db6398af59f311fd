//! Cauchy (Lorentz) distribution.

use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};
use st_special::erf::inverse_erf;
use std::f64::consts::{FRAC_1_PI, PI, SQRT_2};

/// Cauchy distribution with location `μ` and scale `γ`.
///
/// No moments exist for any parameter values: all four summary moments
/// are NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cauchy {
    location: Real,
    scale: Real,
}

impl Cauchy {
    /// Create a Cauchy distribution with the given location and scale.
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

    /// Scale parameter γ.
    pub fn scale(&self) -> Real {
        self.scale
    }
}

impl ContinuousDistribution for Cauchy {
    fn pdf(&self, x: Real) -> Real {
        let z = (x - self.location) / self.scale;
        1.0 / (PI * self.scale * (1.0 + z * z))
    }

    fn cdf(&self, x: Real) -> Real {
        FRAC_1_PI * ((x - self.location) / self.scale).atan() + 0.5
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        if p == 0.0 {
            return Real::NEG_INFINITY;
        }
        if p == 1.0 {
            return Real::INFINITY;
        }
        self.scale * (PI * (p - 0.5)).tan() + self.location
    }

    fn summary(&self, which: Moments) -> Summary {
        Summary::build(
            which,
            || Real::NAN,
            || Real::NAN,
            || Real::NAN,
            || Real::NAN,
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        // Ratio of two standard normal draws
        let u = standard_normal(src);
        let v = loop {
            let v = standard_normal(src);
            if v != 0.0 {
                break v;
            }
        };
        self.scale * (u / v) + self.location
    }
}

fn standard_normal(src: &mut dyn UniformSource) -> Real {
    SQRT_2 * inverse_erf(2.0 * src.next_open() - 1.0)
}
