//! Chi-square distribution.

use crate::distribution::ContinuousDistribution;
use crate::gamma::Gamma;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Probability, Real};

/// Chi-square distribution with `df` degrees of freedom.
///
/// A special case of the gamma distribution: χ²(df) = Gamma(df/2, 2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquare {
    df: Real,
    inner: Gamma,
}

impl ChiSquare {
    /// Create a chi-square distribution with the given degrees of
    /// freedom.
    pub fn new(df: Real) -> Result<Self> {
        ensure!(
            df.is_finite() && df > 0.0,
            "degrees of freedom must be positive, got {df}"
        );
        Ok(Self {
            df,
            inner: Gamma::new(df / 2.0, 2.0)?,
        })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> Real {
        self.df
    }
}

impl ContinuousDistribution for ChiSquare {
    fn pdf(&self, x: Real) -> Real {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: Real) -> Real {
        self.inner.cdf(x)
    }

    fn ppf(&self, p: Probability) -> Real {
        self.inner.ppf(p)
    }

    fn summary(&self, which: Moments) -> Summary {
        let df = self.df;
        Summary::build(
            which,
            || df,
            || 2.0 * df,
            || (8.0 / df).sqrt(),
            || 12.0 / df,
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.inner.rvs(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist() -> ChiSquare {
        ChiSquare::new(5.0).unwrap()
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(ChiSquare::new(0.0).is_err());
        assert!(ChiSquare::new(-3.0).is_err());
    }

    #[test]
    fn pdf_known_values() {
        let d = dist();
        assert!((d.pdf(4.0) - 0.14398).abs() < 1e-5);
        assert!((d.pdf(8.0) - 0.05511).abs() < 1e-5);
    }

    #[test]
    fn cdf_known_values() {
        let d = dist();
        assert!((d.cdf(4.35146) - 0.5).abs() < 1e-4);
        assert!((d.cdf(9.23636) - 0.9).abs() < 1e-4);
        assert_eq!(d.cdf(0.0), 0.0);
    }

    #[test]
    fn two_df_closed_form() {
        // For df = 2, CDF(x) = 1 − e^(−x/2)
        let d = ChiSquare::new(2.0).unwrap();
        let x = 4.0;
        assert!((d.cdf(x) - (1.0 - (-x / 2.0).exp())).abs() < 1e-9);
        assert!((d.pdf(3.0) - 0.5 * (-1.5_f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn ppf_known_values() {
        let d = dist();
        assert!((d.ppf(0.5) - 4.35146).abs() < 1e-3);
        assert!((d.ppf(0.9) - 9.23636).abs() < 1e-3);
        assert!((d.isf(0.9) - 1.61030).abs() < 1e-3);
    }

    #[test]
    fn summary_values() {
        let s = dist().summary(Moments::ALL);
        assert_eq!(s.mean, Some(5.0));
        assert_eq!(s.variance, Some(10.0));
        assert!((s.skew.unwrap() - 1.26491).abs() < 1e-5);
        assert!((s.kurtosis.unwrap() - 2.4).abs() < 1e-9);
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
