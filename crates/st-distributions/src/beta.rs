//! Beta distribution.

use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};
use st_special::beta::{
    beta as beta_fn, inverse_regularized_incomplete_beta, regularized_incomplete_beta,
};

/// Beta distribution with shape parameters `α` and `β` on [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beta {
    alpha: Real,
    beta: Real,
}

impl Beta {
    /// Create a beta distribution with the given shape parameters.
    pub fn new(alpha: Real, beta: Real) -> Result<Self> {
        ensure!(
            alpha.is_finite() && alpha > 0.0,
            "alpha must be positive, got {alpha}"
        );
        ensure!(
            beta.is_finite() && beta > 0.0,
            "beta must be positive, got {beta}"
        );
        Ok(Self { alpha, beta })
    }

    /// Shape parameter α.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Shape parameter β.
    pub fn beta(&self) -> Real {
        self.beta
    }
}

impl ContinuousDistribution for Beta {
    fn pdf(&self, x: Real) -> Real {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        x.powf(self.alpha - 1.0) * (1.0 - x).powf(self.beta - 1.0)
            / beta_fn(self.alpha, self.beta)
    }

    fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        regularized_incomplete_beta(self.alpha, self.beta, x)
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        inverse_regularized_incomplete_beta(self.alpha, self.beta, p)
    }

    fn summary(&self, which: Moments) -> Summary {
        let a = self.alpha;
        let b = self.beta;
        Summary::build(
            which,
            || a / (a + b),
            || a * b / ((a + b) * (a + b) * (a + b + 1.0)),
            || 2.0 * (b - a) * (a + b + 1.0).sqrt() / ((a + b + 2.0) * (a * b).sqrt()),
            || {
                6.0 * ((a - b) * (a - b) * (a + b + 1.0) - a * b * (a + b + 2.0))
                    / (a * b * (a + b + 2.0) * (a + b + 3.0))
            },
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.ppf(src.next_open())
    }
}
