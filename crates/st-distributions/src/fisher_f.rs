//! F distribution (Fisher–Snedecor).

use crate::chi_square::ChiSquare;
use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};
use st_special::beta::{
    beta as beta_fn, inverse_regularized_incomplete_beta, regularized_incomplete_beta,
};

/// F distribution with `d1` numerator and `d2` denominator degrees of
/// freedom: the distribution of the ratio of two scaled chi-square
/// variates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FisherF {
    d1: Real,
    d2: Real,
}

impl FisherF {
    /// Create an F distribution with the given degrees of freedom.
    pub fn new(d1: Real, d2: Real) -> Result<Self> {
        ensure!(
            d1.is_finite() && d1 > 0.0,
            "numerator degrees of freedom must be positive, got {d1}"
        );
        ensure!(
            d2.is_finite() && d2 > 0.0,
            "denominator degrees of freedom must be positive, got {d2}"
        );
        Ok(Self { d1, d2 })
    }

    /// Numerator degrees of freedom.
    pub fn d1(&self) -> Real {
        self.d1
    }

    /// Denominator degrees of freedom.
    pub fn d2(&self) -> Real {
        self.d2
    }
}

impl ContinuousDistribution for FisherF {
    fn pdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        let (d1, d2) = (self.d1, self.d2);
        let num = (d1 * x).powf(d1) * d2.powf(d2) / (d1 * x + d2).powf(d1 + d2);
        num.sqrt() / (x * beta_fn(d1 / 2.0, d2 / 2.0))
    }

    fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        let (d1, d2) = (self.d1, self.d2);
        regularized_incomplete_beta(d1 / 2.0, d2 / 2.0, d1 * x / (d1 * x + d2))
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        if p == 0.0 {
            return 0.0;
        }
        if p == 1.0 {
            return Real::INFINITY;
        }
        let (d1, d2) = (self.d1, self.d2);
        let w = inverse_regularized_incomplete_beta(d1 / 2.0, d2 / 2.0, p);
        d2 * w / (d1 * (1.0 - w))
    }

    fn summary(&self, which: Moments) -> Summary {
        let (d1, d2) = (self.d1, self.d2);
        Summary::build(
            which,
            || {
                if d2 > 2.0 {
                    d2 / (d2 - 2.0)
                } else {
                    Real::NAN
                }
            },
            || {
                if d2 > 4.0 {
                    2.0 * d2 * d2 * (d1 + d2 - 2.0)
                        / (d1 * (d2 - 2.0) * (d2 - 2.0) * (d2 - 4.0))
                } else {
                    Real::NAN
                }
            },
            || {
                if d2 > 6.0 {
                    (2.0 * d1 + d2 - 2.0) * (8.0 * (d2 - 4.0)).sqrt()
                        / ((d2 - 6.0) * (d1 * (d1 + d2 - 2.0)).sqrt())
                } else {
                    Real::NAN
                }
            },
            || {
                if d2 > 8.0 {
                    12.0 * (d1 * (5.0 * d2 - 22.0) * (d1 + d2 - 2.0)
                        + (d2 - 4.0) * (d2 - 2.0) * (d2 - 2.0))
                        / (d1 * (d2 - 6.0) * (d2 - 8.0) * (d1 + d2 - 2.0))
                } else {
                    Real::NAN
                }
            },
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        // Ratio of two independent scaled chi-square draws.  The inner
        // constructions cannot fail: d1 and d2 were validated above.
        let num = ChiSquare::new(self.d1)
            .map(|c| c.rvs(src))
            .unwrap_or(Real::NAN);
        let den = ChiSquare::new(self.d2)
            .map(|c| c.rvs(src))
            .unwrap_or(Real::NAN);
        (num / self.d1) / (den / self.d2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist() -> FisherF {
        FisherF::new(12.0, 10.0).unwrap()
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(FisherF::new(0.0, 5.0).is_err());
        assert!(FisherF::new(5.0, -1.0).is_err());
    }

    #[test]
    fn pdf_known_values() {
        let d = dist();
        assert!((d.pdf(1.0) - 0.64389).abs() < 1e-5);
        assert!((d.pdf(1.6) - 0.29981).abs() < 1e-5);
        assert_eq!(d.pdf(0.0), 0.0);
    }

    #[test]
    fn cdf_known_values() {
        let d = dist();
        assert!((d.cdf(1.01157) - 0.5).abs() < 1e-5);
        assert!((d.cdf(2.28405) - 0.9).abs() < 1e-5);
        assert_eq!(d.cdf(-1.0), 0.0);
    }

    #[test]
    fn ppf_known_values() {
        let d = dist();
        assert!((d.ppf(0.5) - 1.01157).abs() < 1e-4);
        assert!((d.ppf(0.9) - 2.28405).abs() < 1e-4);
        assert!((d.isf(0.1) - 2.28405).abs() < 1e-4);
    }

    #[test]
    fn ppf_boundaries() {
        let d = dist();
        assert_eq!(d.ppf(0.0), 0.0);
        assert_eq!(d.ppf(1.0), Real::INFINITY);
        assert!(d.ppf(-0.1).is_nan());
    }

    #[test]
    fn summary_values() {
        let s = dist().summary(Moments::ALL);
        assert!((s.mean.unwrap() - 1.25).abs() < 1e-9);
        assert!((s.variance.unwrap() - 0.86806).abs() < 1e-5);
        assert!((s.skew.unwrap() - 3.57771).abs() < 1e-5);
        assert!((s.kurtosis.unwrap() - 44.4).abs() < 1e-9);
    }

    #[test]
    fn summary_thresholds() {
        let s = FisherF::new(5.0, 4.0).unwrap().summary(Moments::ALL);
        assert!((s.mean.unwrap() - 2.0).abs() < 1e-9);
        assert!(s.variance.unwrap().is_nan());
        assert!(s.skew.unwrap().is_nan());
        assert!(s.kurtosis.unwrap().is_nan());
    }

    #[test]
    fn cdf_ppf_roundtrip() {
        let d = dist();
        for p in [0.05, 0.25, 0.5, 0.75, 0.95] {
            let x = d.ppf(p);
            assert!((d.cdf(x) - p).abs() < 1e-4, "p={p}, x={x}");
        }
    }
}
