//! Poisson distribution.

use crate::distribution::DiscreteDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Natural, Probability, Real};
use st_special::gamma::ln_gamma;

/// Poisson distribution with rate `λ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: Real,
}

impl Poisson {
    /// Create a Poisson distribution with the given rate.
    pub fn new(lambda: Real) -> Result<Self> {
        ensure!(
            lambda.is_finite() && lambda > 0.0,
            "lambda must be positive, got {lambda}"
        );
        Ok(Self { lambda })
    }

    /// Rate parameter λ.
    pub fn lambda(&self) -> Real {
        self.lambda
    }
}

impl DiscreteDistribution for Poisson {
    fn pmf(&self, k: Natural) -> Real {
        // e^{-λ}·λ^k/k! evaluated in log space so large k does not
        // overflow the numerator and denominator separately
        let k = k as Real;
        (k * self.lambda.ln() - self.lambda - ln_gamma(k + 1.0)).exp()
    }

    fn cdf(&self, x: Real) -> Real {
        if x.is_nan() {
            return Real::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        let mut sum = 0.0;
        for k in 0..=x.floor() as Natural {
            sum += self.pmf(k);
        }
        sum.min(1.0)
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        if p >= 1.0 {
            return Real::INFINITY;
        }
        let mut k: Natural = 0;
        let mut cumulative = 0.0;
        loop {
            let mass = self.pmf(k);
            cumulative += mass;
            if cumulative >= p {
                return k as Real;
            }
            // Past the mode the mass underflows before the cumulative
            // sum can close the rounding gap to p; stop rather than
            // scan forever.
            if mass == 0.0 && k as Real > self.lambda {
                return k as Real;
            }
            k += 1;
        }
    }

    fn summary(&self, which: Moments) -> Summary {
        let l = self.lambda;
        Summary::build(
            which,
            || l,
            || l,
            || l.powf(-0.5),
            || 1.0 / l,
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Natural {
        // Product-of-uniforms method: multiply uniform draws until the
        // product drops below e^{-λ}
        let threshold = (-self.lambda).exp();
        let mut k: Natural = 0;
        let mut product = 1.0;
        loop {
            k += 1;
            product *= src.next_uniform();
            if product <= threshold {
                break;
            }
        }
        k - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MersenneTwister;

    fn dist() -> Poisson {
        Poisson::new(5.0).unwrap()
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(-1.0).is_err());
    }

    #[test]
    fn pmf_known_values() {
        let d = dist();
        assert!((d.pmf(5) - 0.17547).abs() < 1e-5);
        // P(X=0) = e^{-5}
        assert!((d.pmf(0) - (-5.0_f64).exp()).abs() < 1e-10);
    }

    #[test]
    fn cdf_known_values() {
        let d = dist();
        assert!((d.cdf(5.0) - 0.61596).abs() < 1e-5);
        assert!((d.sf(5.0) - 0.38404).abs() < 1e-5);
        assert_eq!(d.cdf(-1.0), 0.0);
        assert!((d.cdf(50.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn cdf_floors_its_argument() {
        let d = dist();
        assert_eq!(d.cdf(5.7), d.cdf(5.0));
    }

    #[test]
    fn ppf_known_values() {
        let d = dist();
        assert_eq!(d.ppf(0.5), 5.0);
        assert_eq!(d.isf(0.5), 5.0);
        assert_eq!(d.ppf(1.0), Real::INFINITY);
        assert!(d.ppf(-0.1).is_nan());
    }

    #[test]
    fn ppf_inverts_cdf() {
        let d = dist();
        for p in [0.05, 0.25, 0.5, 0.75, 0.95] {
            let k = d.ppf(p);
            assert!(d.cdf(k) >= p, "cdf(ppf({p})) = {}", d.cdf(k));
            if k > 0.0 {
                assert!(d.cdf(k - 1.0) < p, "ppf({p}) = {k} is not minimal");
            }
        }
    }

    #[test]
    fn summary_values() {
        let s = dist().summary(Moments::ALL);
        assert_eq!(s.mean, Some(5.0));
        assert_eq!(s.variance, Some(5.0));
        assert!((s.skew.unwrap() - 0.44721).abs() < 1e-5);
        assert!((s.kurtosis.unwrap() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn sample_mean_is_near_lambda() {
        let d = dist();
        let mut src = MersenneTwister::new(42);
        let n = 10_000;
        let sum: Real = (0..n).map(|_| d.rvs(&mut src) as Real).sum();
        let mean = sum / n as Real;
        assert!((mean - 5.0).abs() < 0.15, "sample mean {mean}");
    }
}
