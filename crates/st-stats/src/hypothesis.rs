//! Goodness-of-fit hypothesis tests built on the distribution engine.

use st_core::errors::{Error, Result};
use st_core::Real;
use st_distributions::{ChiSquare, ContinuousDistribution, Kolmogorov};

/// Pearson's chi-square goodness-of-fit test.
///
/// Computes `Σ (O − E)² / E` over the paired observed/expected counts
/// and returns the p-value under a chi-square distribution with
/// `degrees_of_freedom` degrees of freedom.
pub fn chi_square_test(
    observed: &[Real],
    expected: &[Real],
    degrees_of_freedom: Real,
) -> Result<Real> {
    if observed.len() != expected.len() {
        return Err(Error::Precondition(format!(
            "observed ({}) and expected ({}) counts must be paired",
            observed.len(),
            expected.len()
        )));
    }
    let statistic: Real = observed
        .iter()
        .zip(expected)
        .map(|(o, e)| (o - e) * (o - e) / e)
        .sum();
    let chi2 = ChiSquare::new(degrees_of_freedom)?;
    Ok(chi2.sf(statistic))
}

/// The Kolmogorov limiting cdf K(x), exposed directly for callers that
/// already hold a scaled statistic.
pub fn kolmogorov_cdf(x: Real) -> Real {
    Kolmogorov::new().cdf(x)
}

/// One-sample Kolmogorov–Smirnov test of `sample` against a reference
/// distribution.
///
/// Computes the supremum distance D between the empirical cdf and the
/// reference cdf and returns the asymptotic p-value `1 − K(√n·D)`.
pub fn kolmogorov_smirnov<D: ContinuousDistribution>(
    sample: &[Real],
    reference: &D,
) -> Result<Real> {
    if sample.is_empty() {
        return Err(Error::Precondition("sample must be non-empty".into()));
    }
    if sample.iter().any(|x| x.is_nan()) {
        return Err(Error::Precondition("sample contains NaN".into()));
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len() as Real;
    let mut d: Real = 0.0;
    for (i, x) in sorted.iter().enumerate() {
        let f = reference.cdf(*x);
        let above = (i as Real + 1.0) / n - f;
        let below = f - i as Real / n;
        d = d.max(above).max(below);
    }

    Ok(Kolmogorov::new().sf(n.sqrt() * d))
}
