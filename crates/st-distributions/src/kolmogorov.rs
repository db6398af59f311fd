//! Kolmogorov distribution: the limiting law of the scaled one-sample
//! Kolmogorov–Smirnov statistic √n·Dₙ.

use crate::distribution::{newton_on_cdf, ContinuousDistribution};
use crate::moments::{Moments, Summary};
use crate::random::UniformSource;
use st_core::{Probability, Real};
use std::f64::consts::{FRAC_PI_2, LN_2, PI};

/// Kolmogorov distribution (no parameters), supported on `(0, ∞)`:
///
/// `K(x) = 1 − 2·Σ_{j≥1} (−1)^{j−1} e^{−2j²x²}`.
///
/// Below the crossover point the equivalent Jacobi-theta form
/// `(√(2π)/x)·Σ_{k≥1} e^{−(2k−1)²π²/(8x²)}` is used; the alternating
/// series loses all its digits to cancellation there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kolmogorov;

/// Crossover between the two theta-series representations.
const SERIES_CROSSOVER: Real = 1.18;

/// Relative truncation tolerance for both series.
const SERIES_TOLERANCE: Real = 1.0e-16;

/// Dirichlet eta function at 3: η(3) = (3/4)·ζ(3).
const ETA3: Real = 0.9015426773696957;

/// Dirichlet eta function at 4: η(4) = (7/8)·ζ(4) = 7π⁴/720.
const ETA4: Real = 0.9470328294972459;

impl Kolmogorov {
    /// Create the Kolmogorov distribution.
    pub fn new() -> Self {
        Kolmogorov
    }

    /// Raw moment E[X^s] = s·Γ(s/2)·2^(−s/2)·η(s), specialized to the
    /// first four.
    fn raw_moments() -> (Real, Real, Real, Real) {
        let e1 = FRAC_PI_2.sqrt() * LN_2;
        let e2 = PI * PI / 12.0;
        // Γ(3/2) = √π/2
        let e3 = 3.0 * (PI.sqrt() / 2.0) * 0.5_f64.powf(1.5) * ETA3;
        let e4 = ETA4;
        (e1, e2, e3, e4)
    }
}

impl ContinuousDistribution for Kolmogorov {
    fn pdf(&self, x: Real) -> Real {
        if x.is_nan() {
            return Real::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x < SERIES_CROSSOVER {
            let mut sum = 0.0;
            for k in 1..=100u32 {
                let odd = (2 * k - 1) as Real;
                let a = odd * odd * PI * PI / 8.0;
                let term = (-a / (x * x)).exp() * (2.0 * a / x.powi(4) - 1.0 / (x * x));
                sum += term;
                if term.abs() < SERIES_TOLERANCE * sum.abs().max(1.0) {
                    break;
                }
            }
            (2.0 * PI).sqrt() * sum
        } else {
            let mut sum = 0.0;
            let mut sign = 1.0;
            for j in 1..=100u32 {
                let j = j as Real;
                let term = j * j * (-2.0 * j * j * x * x).exp();
                sum += sign * term;
                sign = -sign;
                if term < SERIES_TOLERANCE {
                    break;
                }
            }
            8.0 * x * sum
        }
    }

    fn cdf(&self, x: Real) -> Real {
        if x.is_nan() {
            return Real::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x < SERIES_CROSSOVER {
            let mut sum = 0.0;
            for k in 1..=100u32 {
                let odd = (2 * k - 1) as Real;
                let term = (-odd * odd * PI * PI / (8.0 * x * x)).exp();
                sum += term;
                if term < SERIES_TOLERANCE * sum {
                    break;
                }
            }
            ((2.0 * PI).sqrt() / x * sum).min(1.0)
        } else {
            let mut sum = 0.0;
            let mut sign = 1.0;
            for j in 1..=100u32 {
                let j = j as Real;
                let term = (-2.0 * j * j * x * x).exp();
                sum += sign * term;
                sign = -sign;
                if term < SERIES_TOLERANCE {
                    break;
                }
            }
            (1.0 - 2.0 * sum).clamp(0.0, 1.0)
        }
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
        newton_on_cdf(self, p)
    }

    fn summary(&self, which: Moments) -> Summary {
        let (e1, e2, e3, e4) = Self::raw_moments();
        let variance = e2 - e1 * e1;
        Summary::build(
            which,
            || e1,
            || variance,
            || (e3 - 3.0 * e1 * variance - e1 * e1 * e1) / variance.powf(1.5),
            || {
                (e4 - 4.0 * e1 * e3 + 6.0 * e1 * e1 * e2 - 3.0 * e1.powi(4))
                    / (variance * variance)
                    - 3.0
            },
        )
    }

    fn rvs(&self, src: &mut dyn UniformSource) -> Real {
        self.ppf(src.next_open())
    }
}
