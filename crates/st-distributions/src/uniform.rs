//! Discrete and continuous uniform distributions.

use crate::distribution::{ContinuousDistribution, DiscreteDistribution};
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Natural, Probability, Real};

/// Discrete uniform distribution on the integers `a ..= b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteUniform {
    lower: i64,
    upper: i64,
}

impl DiscreteUniform {
    /// Create a discrete uniform distribution on `lower ..= upper`.
    ///
    /// Outcomes are addressed as naturals, so the support must be
    /// non-negative.
    pub fn new(lower: i64, upper: i64) -> Result<Self> {
        ensure!(lower >= 0, "lower bound must be non-negative, got {lower}");
        ensure!(
            lower <= upper,
            "lower bound {lower} must not exceed upper bound {upper}"
        );
        Ok(Self { lower, upper })
    }

    /// Inclusive lower bound.
    pub fn lower(&self) -> i64 {
        self.lower
    }

    /// Inclusive upper bound.
    pub fn upper(&self) -> i64 {
        self.upper
    }

    fn count(&self) -> Real {
        (self.upper - self.lower + 1) as Real
    }
}

impl DiscreteDistribution for DiscreteUniform {
    fn pmf(&self, k: Natural) -> Real {
        let k = k as i64;
        if k < self.lower || k > self.upper {
            0.0
        } else {
            1.0 / self.count()
        }
    }

    fn cdf(&self, x: Real) -> Real {
        if x.is_nan() {
            return Real::NAN;
        }
        let k = x.floor();
        if k < self.lower as Real {
            0.0
        } else if k >= self.upper as Real {
            1.0
        } else {
            (k - self.lower as Real + 1.0) / self.count()
        }
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        if p == 0.0 {
            return self.lower as Real;
        }
        self.lower as Real - 1.0 + (p * self.count()).ceil()
    }

    fn summary(&self, which: Moments) -> Summary {
        let n = self.count();
        Summary::build(
            which,
            || (self.lower + self.upper) as Real / 2.0,
            || (n * n - 1.0) / 12.0,
            || 0.0,
            || -6.0 * (n * n + 1.0) / (5.0 * (n * n - 1.0)),
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Natural {
        let k = self.lower + (src.next_uniform() * self.count()) as i64;
        k.min(self.upper) as Natural
    }
}

/// Continuous uniform distribution on the interval `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousUniform {
    lower: Real,
    upper: Real,
}

impl ContinuousUniform {
    /// Create a continuous uniform distribution on `[lower, upper]`.
    pub fn new(lower: Real, upper: Real) -> Result<Self> {
        ensure!(
            lower.is_finite() && upper.is_finite(),
            "bounds must be finite, got [{lower}, {upper}]"
        );
        ensure!(
            lower < upper,
            "lower bound {lower} must be below upper bound {upper}"
        );
        Ok(Self { lower, upper })
    }

    /// Lower bound.
    pub fn lower(&self) -> Real {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> Real {
        self.upper
    }

    fn width(&self) -> Real {
        self.upper - self.lower
    }
}

impl ContinuousDistribution for ContinuousUniform {
    fn pdf(&self, x: Real) -> Real {
        if x < self.lower || x > self.upper {
            0.0
        } else {
            1.0 / self.width()
        }
    }

    fn cdf(&self, x: Real) -> Real {
        if x.is_nan() {
            return Real::NAN;
        }
        ((x - self.lower) / self.width()).clamp(0.0, 1.0)
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        self.lower + p * self.width()
    }

    fn summary(&self, which: Moments) -> Summary {
        let w = self.width();
        Summary::build(
            which,
            || (self.lower + self.upper) / 2.0,
            || w * w / 12.0,
            || 0.0,
            || -6.0 / 5.0,
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.lower + src.next_uniform() * self.width()
    }
}
