//! The capability set every distribution implements.

use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{Natural, Probability, Real};
use st_special::solvers;

/// A continuous probability distribution with fixed parameters.
///
/// Implementations are immutable value types: every query is independent
/// and there is no state beyond the parameters.  Query arguments outside
/// the support return the appropriate boundary value (0, 1, or NaN) and
/// never panic; NaN from the underlying special functions propagates
/// arithmetically.
pub trait ContinuousDistribution {
    /// Probability density at `x`.  Zero outside the support.
    fn pdf(&self, x: Real) -> Real;

    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: Real) -> Real;

    /// Survival function P(X > x) = 1 − cdf(x).
    fn sf(&self, x: Real) -> Real {
        1.0 - self.cdf(x)
    }

    /// Percent-point (quantile) function: the smallest `x` with
    /// `cdf(x) ≥ p`.  NaN for `p` outside [0, 1]; the support infimum at
    /// `p = 0` and supremum at `p = 1`.
    fn ppf(&self, p: Probability) -> Real;

    /// Inverse survival function: `ppf(1 − p)`.
    fn isf(&self, p: Probability) -> Real {
        self.ppf(1.0 - p)
    }

    /// The summary moments selected by `which`.
    fn summary(&self, which: Moments) -> Summary;

    /// Draw one random variate from the injected uniform source.
    fn rvs(&self, src: &mut dyn UniformSource) -> Real;
}

/// A discrete probability distribution with fixed parameters.
///
/// Mass lives on the integers; `cdf`, `ppf`, and `isf` keep the
/// floating-point interface so that boundary sentinels (NaN, ±∞) have
/// somewhere to go.
pub trait DiscreteDistribution {
    /// Probability mass at the integer outcome `k`.
    fn pmf(&self, k: Natural) -> Real;

    /// Cumulative distribution function P(X ≤ x), evaluated at
    /// `floor(x)`.
    fn cdf(&self, x: Real) -> Real;

    /// Survival function P(X > x) = 1 − cdf(x).
    fn sf(&self, x: Real) -> Real {
        1.0 - self.cdf(x)
    }

    /// Percent-point (quantile) function: the smallest outcome `k` with
    /// `cdf(k) ≥ p`, as a `Real`.  NaN for `p` outside [0, 1]; the
    /// support supremum (possibly +∞) at `p = 1`.
    fn ppf(&self, p: Probability) -> Real;

    /// Inverse survival function: `ppf(1 − p)`.
    fn isf(&self, p: Probability) -> Real {
        self.ppf(1.0 - p)
    }

    /// The summary moments selected by `which`.
    fn summary(&self, which: Moments) -> Summary;

    /// Draw one random variate from the injected uniform source.
    fn rvs(&self, src: &mut dyn UniformSource) -> Natural;
}

/// Quantile by root-finding `cdf(x) − p = 0` over an expanding bracket,
/// with the density as the Newton derivative.
///
/// The fallback route for distributions without a closed-form or
/// special-function inverse; only valid for supports bounded below by
/// zero.
pub(crate) fn newton_on_cdf<D: ContinuousDistribution>(dist: &D, p: Probability) -> Real {
    let f = |x: Real| dist.cdf(x) - p;
    let Some((lo, hi)) = solvers::bracket_upward(f, 1.0e-8) else {
        return Real::NAN;
    };
    match solvers::newton_safe(|x| (f(x), dist.pdf(x)), lo, hi, 1.0e-10, 100) {
        Ok(outcome) => outcome.root,
        Err(_) => Real::NAN,
    }
}
