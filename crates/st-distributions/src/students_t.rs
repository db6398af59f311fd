//! Student's t-distribution.

use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};
use st_special::beta::{
    beta as beta_fn, inverse_regularized_incomplete_beta, regularized_incomplete_beta,
};

/// Student's t-distribution with `df` degrees of freedom, symmetric
/// about zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentsT {
    df: Real,
}

impl StudentsT {
    /// Create a Student's t-distribution with the given degrees of
    /// freedom.
    pub fn new(df: Real) -> Result<Self> {
        ensure!(
            df.is_finite() && df > 0.0,
            "degrees of freedom must be positive, got {df}"
        );
        Ok(Self { df })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> Real {
        self.df
    }
}

impl ContinuousDistribution for StudentsT {
    fn pdf(&self, x: Real) -> Real {
        let df = self.df;
        (1.0 + x * x / df).powf(-(df + 1.0) / 2.0)
            / (df.sqrt() * beta_fn(0.5, df / 2.0))
    }

    fn cdf(&self, x: Real) -> Real {
        if x == 0.0 {
            return 0.5;
        }
        let df = self.df;
        let w = df / (df + x * x);
        let tail = 0.5 * regularized_incomplete_beta(df / 2.0, 0.5, w);
        if x > 0.0 {
            1.0 - tail
        } else {
            tail
        }
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
        if p == 0.5 {
            return 0.0;
        }
        let df = self.df;
        let tail = 2.0 * p.min(1.0 - p);
        let w = inverse_regularized_incomplete_beta(df / 2.0, 0.5, tail);
        let t = (df * (1.0 - w) / w).sqrt();
        if p < 0.5 {
            -t
        } else {
            t
        }
    }

    fn summary(&self, which: Moments) -> Summary {
        let df = self.df;
        Summary::build(
            which,
            || if df > 1.0 { 0.0 } else { Real::NAN },
            || if df > 2.0 { df / (df - 2.0) } else { Real::NAN },
            || if df > 3.0 { 0.0 } else { Real::NAN },
            || if df > 4.0 { 6.0 / (df - 4.0) } else { Real::NAN },
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.ppf(src.next_open())
    }
}
