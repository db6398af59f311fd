//! Rayleigh distribution.

use crate::distribution::ContinuousDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use crate::weibull::Weibull;
use st_core::{ensure, errors::Result, Probability, Real};
use std::f64::consts::SQRT_2;

/// Rayleigh distribution with scale `σ`: a Weibull with scale `σ√2` and
/// shape 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rayleigh {
    sigma: Real,
    inner: Weibull,
}

impl Rayleigh {
    /// Create a Rayleigh distribution with the given scale.
    pub fn new(sigma: Real) -> Result<Self> {
        ensure!(
            sigma.is_finite() && sigma > 0.0,
            "sigma must be positive, got {sigma}"
        );
        Ok(Self {
            sigma,
            inner: Weibull::new(sigma * SQRT_2, 2.0)?,
        })
    }

    /// Scale parameter σ.
    pub fn sigma(&self) -> Real {
        self.sigma
    }
}

impl ContinuousDistribution for Rayleigh {
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
        self.inner.summary(which)
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.inner.rvs(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist() -> Rayleigh {
        Rayleigh::new(2.0).unwrap()
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(Rayleigh::new(0.0).is_err());
        assert!(Rayleigh::new(-1.0).is_err());
    }

    #[test]
    fn pdf_known_values() {
        let d = dist();
        assert!((d.pdf(1.0) - 0.22062).abs() < 1e-5);
        assert!((d.pdf(0.5) - 0.12115).abs() < 1e-5);
    }

    #[test]
    fn pdf_matches_closed_form() {
        // f(x) = x/σ² · exp(−x²/(2σ²))
        let d = dist();
        for x in [0.5, 1.0, 2.0, 4.0] {
            let expected = x / 4.0 * (-x * x / 8.0_f64).exp();
            assert!((d.pdf(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn cdf_known_values() {
        let d = dist();
        assert!((d.cdf(1.51706) - 0.25).abs() < 1e-5);
        assert!((d.cdf(2.35482) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn ppf_known_values() {
        let d = dist();
        assert!((d.ppf(0.25) - 1.51706).abs() < 1e-4);
        assert!((d.ppf(0.5) - 2.35482).abs() < 1e-4);
        assert!((d.isf(0.75) - 1.51706).abs() < 1e-4);
    }

    #[test]
    fn summary_values() {
        let s = dist().summary(Moments::ALL);
        assert!((s.mean.unwrap() - 2.50663).abs() < 1e-5);
        assert!((s.variance.unwrap() - 1.71681).abs() < 1e-5);
        assert!((s.skew.unwrap() - 0.63111).abs() < 1e-5);
        assert!((s.kurtosis.unwrap() - 0.24509).abs() < 1e-4);
    }
}
