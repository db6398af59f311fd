//! Property tests for the descriptive statistics.

use proptest::prelude::*;
use st_stats::descriptive::{correlation, mean, sample_variance, std_dev, variance};

proptest! {
    #[test]
    fn variance_is_non_negative(data in prop::collection::vec(-1e3f64..1e3, 2..50)) {
        prop_assert!(variance(&data) >= -1e-9);
    }

    #[test]
    fn mean_lies_within_range(data in prop::collection::vec(-1e3f64..1e3, 1..50)) {
        let m = mean(&data);
        let lo = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(lo - 1e-9 <= m && m <= hi + 1e-9);
    }

    #[test]
    fn sample_variance_exceeds_population(data in prop::collection::vec(-1e3f64..1e3, 2..50)) {
        // Bessel's correction scales the population variance by n/(n-1)
        let n = data.len() as f64;
        let expected = variance(&data) * n / (n - 1.0);
        prop_assert!((sample_variance(&data) - expected).abs() < 1e-6 * expected.abs().max(1.0));
    }

    #[test]
    fn correlation_is_bounded(
        xs in prop::collection::vec(-1e3f64..1e3, 3..40),
        shift in -10.0f64..10.0,
    ) {
        // Perturb a copy so both slices have nonzero spread
        let ys: Vec<f64> = xs.iter().enumerate().map(|(i, x)| x + shift * i as f64).collect();
        if std_dev(&xs) > 1e-9 && std_dev(&ys) > 1e-9 {
            let r = correlation(&xs[..], &ys[..]);
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&r));
        }
    }
}
