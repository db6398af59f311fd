//! Pareto distribution.

use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};

/// Pareto distribution with minimum `x_m` and shape `α`, supported on
/// `[x_m, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pareto {
    minimum: Real,
    shape: Real,
}

impl Pareto {
    /// Create a Pareto distribution with the given minimum and shape.
    pub fn new(minimum: Real, shape: Real) -> Result<Self> {
        ensure!(
            minimum.is_finite() && minimum > 0.0,
            "minimum must be positive, got {minimum}"
        );
        ensure!(
            shape.is_finite() && shape > 0.0,
            "shape must be positive, got {shape}"
        );
        Ok(Self { minimum, shape })
    }

    /// Scale (minimum) parameter x_m.
    pub fn minimum(&self) -> Real {
        self.minimum
    }

    /// Shape parameter α.
    pub fn shape(&self) -> Real {
        self.shape
    }
}

impl ContinuousDistribution for Pareto {
    fn pdf(&self, x: Real) -> Real {
        if x < self.minimum {
            return 0.0;
        }
        let (xm, a) = (self.minimum, self.shape);
        a * xm.powf(a) / x.powf(a + 1.0)
    }

    fn cdf(&self, x: Real) -> Real {
        if x < self.minimum {
            return 0.0;
        }
        1.0 - (self.minimum / x).powf(self.shape)
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        self.minimum * (1.0 - p).powf(-1.0 / self.shape)
    }

    fn summary(&self, which: Moments) -> Summary {
        let (xm, a) = (self.minimum, self.shape);
        Summary::build(
            which,
            || {
                if a > 1.0 {
                    a * xm / (a - 1.0)
                } else {
                    Real::INFINITY
                }
            },
            || {
                if a > 2.0 {
                    xm * xm * a / ((a - 1.0) * (a - 1.0) * (a - 2.0))
                } else {
                    Real::INFINITY
                }
            },
            || {
                if a > 3.0 {
                    2.0 * (1.0 + a) / (a - 3.0) * ((a - 2.0) / a).sqrt()
                } else {
                    Real::NAN
                }
            },
            || {
                if a > 4.0 {
                    6.0 * (a * a * a + a * a - 6.0 * a - 2.0)
                        / (a * (a - 3.0) * (a - 4.0))
                } else {
                    Real::NAN
                }
            },
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.ppf(src.next_open())
    }
}
