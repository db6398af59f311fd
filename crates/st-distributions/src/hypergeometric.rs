//! Hypergeometric distribution.

use crate::distribution::DiscreteDistribution;
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{ensure, errors::Result, Natural, Probability, Real};
use st_special::combinatorics::combinations;

/// Hypergeometric distribution: the number of successes in `draws`
/// draws, without replacement, from a population of size `population`
/// containing `successes` successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hypergeometric {
    population: Natural,
    successes: Natural,
    draws: Natural,
}

impl Hypergeometric {
    /// Create a hypergeometric distribution.
    pub fn new(population: Natural, successes: Natural, draws: Natural) -> Result<Self> {
        ensure!(population > 0, "population must be non-empty");
        ensure!(
            successes <= population,
            "successes {successes} cannot exceed population {population}"
        );
        ensure!(
            draws <= population,
            "draws {draws} cannot exceed population {population}"
        );
        Ok(Self {
            population,
            successes,
            draws,
        })
    }

    /// Population size N.
    pub fn population(&self) -> Natural {
        self.population
    }

    /// Number of successes K in the population.
    pub fn successes(&self) -> Natural {
        self.successes
    }

    /// Number of draws n.
    pub fn draws(&self) -> Natural {
        self.draws
    }

    /// Largest attainable outcome, min(n, K).
    fn support_max(&self) -> Natural {
        self.draws.min(self.successes)
    }
}

impl DiscreteDistribution for Hypergeometric {
    fn pmf(&self, k: Natural) -> Real {
        let (n_pop, k_pop, n) = (self.population, self.successes, self.draws);
        if k > n || k > k_pop || n - k > n_pop - k_pop {
            return 0.0;
        }
        combinations(k_pop, k) * combinations(n_pop - k_pop, n - k) / combinations(n_pop, n)
    }

    fn cdf(&self, x: Real) -> Real {
        if x.is_nan() {
            return Real::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        let top = (x.floor() as Natural).min(self.support_max());
        let mut sum = 0.0;
        for k in 0..=top {
            sum += self.pmf(k);
        }
        sum.min(1.0)
    }

    fn ppf(&self, p: Probability) -> Real {
        if !(0.0..=1.0).contains(&p) {
            return Real::NAN;
        }
        if p >= 1.0 {
            return self.support_max() as Real;
        }
        let mut k: Natural = 0;
        let mut cumulative = 0.0;
        while cumulative < p && k <= self.support_max() {
            cumulative += self.pmf(k);
            k += 1;
        }
        k.saturating_sub(1) as Real
    }

    fn summary(&self, which: Moments) -> Summary {
        let n_pop = self.population as Real;
        let k_pop = self.successes as Real;
        let n = self.draws as Real;
        Summary::build(
            which,
            || n * k_pop / n_pop,
            || {
                n * k_pop * (n_pop - k_pop) * (n_pop - n)
                    / (n_pop * n_pop * (n_pop - 1.0))
            },
            || {
                (n_pop - 2.0 * k_pop) * (n_pop - 1.0).sqrt() * (n_pop - 2.0 * n)
                    / ((n * k_pop * (n_pop - k_pop) * (n_pop - n)).sqrt()
                        * (n_pop - 2.0))
            },
            || {
                let num = (n_pop - 1.0)
                    * n_pop
                    * n_pop
                    * (n_pop * (n_pop + 1.0)
                        - 6.0 * k_pop * (n_pop - k_pop)
                        - 6.0 * n * (n_pop - n))
                    + 6.0 * n * k_pop * (n_pop - k_pop) * (n_pop - n) * (5.0 * n_pop - 6.0);
                let den = n * k_pop * (n_pop - k_pop) * (n_pop - n)
                    * (n_pop - 2.0)
                    * (n_pop - 3.0);
                num / den
            },
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Natural {
        // Sequential draws without replacement
        let mut remaining_pop = self.population;
        let mut remaining_succ = self.successes;
        let mut hits: Natural = 0;
        for _ in 0..self.draws {
            if src.next_uniform() * (remaining_pop as Real) < remaining_succ as Real {
                hits += 1;
                remaining_succ -= 1;
            }
            remaining_pop -= 1;
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist() -> Hypergeometric {
        Hypergeometric::new(10, 5, 5).unwrap()
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(Hypergeometric::new(0, 0, 0).is_err());
        assert!(Hypergeometric::new(10, 11, 5).is_err());
        assert!(Hypergeometric::new(10, 5, 11).is_err());
    }

    #[test]
    fn pmf_known_values() {
        let d = dist();
        assert!((d.pmf(2) - 0.39683).abs() < 1e-5);
        assert_eq!(d.pmf(6), 0.0);
    }

    #[test]
    fn pmf_respects_support_bounds() {
        // With 7 failures available, at least 3 of 10 draws must succeed
        let d = Hypergeometric::new(10, 3, 10).unwrap();
        assert_eq!(d.pmf(2), 0.0);
        assert!((d.pmf(3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pmf_sums_to_one() {
        let d = dist();
        let total: Real = (0..=5).map(|k| d.pmf(k)).sum();
        assert!((total - 1.0).abs() < 1e-10);
    }

    #[test]
    fn cdf_known_values() {
        let d = dist();
        assert!((d.cdf(2.0) - 0.5).abs() < 1e-10);
        assert!((d.sf(2.0) - 0.5).abs() < 1e-10);
        assert_eq!(d.cdf(-1.0), 0.0);
        assert_eq!(d.cdf(5.0), 1.0);
    }

    #[test]
    fn ppf_known_values() {
        let d = dist();
        assert_eq!(d.ppf(0.45), 2.0);
        assert_eq!(d.ppf(0.55), 3.0);
        assert_eq!(d.isf(0.55), 2.0);
        assert_eq!(d.ppf(1.0), 5.0);
        assert!(d.ppf(1.5).is_nan());
    }

    #[test]
    fn summary_values() {
        let s = dist().summary(Moments::ALL);
        assert_eq!(s.mean, Some(2.5));
        assert!((s.variance.unwrap() - 0.69444).abs() < 1e-5);
        assert_eq!(s.skew, Some(0.0));
        assert!((s.kurtosis.unwrap() - -0.17143).abs() < 1e-5);
    }

    #[test]
    fn rvs_stays_in_support() {
        use crate::random::MersenneTwister;
        let d = dist();
        let mut src = MersenneTwister::new(9);
        for _ in 0..1_000 {
            let k = d.rvs(&mut src);
            assert!(k <= 5);
        }
    }
}
