//! Property tests for the special functions.

use proptest::prelude::*;
use st_special::{
    erf, gamma, inverse_erf, inverse_regularized_incomplete_beta, ln_gamma,
    regularized_incomplete_beta,
};

proptest! {
    #[test]
    fn gamma_recurrence_holds(x in 0.5f64..20.0) {
        // Γ(x+1) = x·Γ(x)
        let lhs = gamma(x + 1.0);
        let rhs = x * gamma(x);
        prop_assert!((lhs - rhs).abs() < 1e-9 * rhs.abs().max(1.0));
    }

    #[test]
    fn ln_gamma_is_log_of_gamma(x in 0.1f64..30.0) {
        prop_assert!((ln_gamma(x) - gamma(x).ln()).abs() < 1e-6);
    }

    #[test]
    fn erf_is_bounded_and_odd(x in -6.0f64..6.0) {
        let y = erf(x);
        prop_assert!((-1.0..=1.0).contains(&y));
        prop_assert!((y + erf(-x)).abs() < 1e-12);
    }

    #[test]
    fn inverse_erf_roundtrips(x in -0.999f64..0.999) {
        let y = erf(inverse_erf(x));
        prop_assert!((y - x).abs() < 1e-6);
    }

    #[test]
    fn incomplete_beta_monotone_in_x(
        a in 0.5f64..10.0,
        b in 0.5f64..10.0,
        x in 0.01f64..0.98,
    ) {
        let lo = regularized_incomplete_beta(a, b, x);
        let hi = regularized_incomplete_beta(a, b, x + 0.01);
        prop_assert!(hi >= lo - 1e-9);
    }

    #[test]
    fn inverse_incomplete_beta_roundtrips(
        a in 1.0f64..10.0,
        b in 1.0f64..10.0,
        p in 0.01f64..0.99,
    ) {
        let x = inverse_regularized_incomplete_beta(a, b, p);
        let back = regularized_incomplete_beta(a, b, x);
        prop_assert!((back - p).abs() < 1e-4);
    }
}
