//! Moment selection flags and the summary-moments record.

use st_core::{ensure, errors::Result, Real};

/// Selects which summary moments a [`summary`] call should compute.
///
/// The recognized single-character options of the classic `"mvsk"`
/// contract are kept at the boundary via [`Moments::parse`]; call sites
/// inside the library use the typed constants.
///
/// [`summary`]: crate::ContinuousDistribution::summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moments {
    bits: u8,
}

impl Moments {
    const MEAN_BIT: u8 = 1;
    const VARIANCE_BIT: u8 = 1 << 1;
    const SKEW_BIT: u8 = 1 << 2;
    const KURTOSIS_BIT: u8 = 1 << 3;

    /// Only the mean.
    pub const MEAN: Moments = Moments { bits: Self::MEAN_BIT };
    /// Only the variance.
    pub const VARIANCE: Moments = Moments { bits: Self::VARIANCE_BIT };
    /// Only the skewness.
    pub const SKEW: Moments = Moments { bits: Self::SKEW_BIT };
    /// Only the excess kurtosis.
    pub const KURTOSIS: Moments = Moments { bits: Self::KURTOSIS_BIT };
    /// Mean and variance (the classic default).
    pub const MEAN_VARIANCE: Moments = Moments {
        bits: Self::MEAN_BIT | Self::VARIANCE_BIT,
    };
    /// All four moments.
    pub const ALL: Moments = Moments {
        bits: Self::MEAN_BIT | Self::VARIANCE_BIT | Self::SKEW_BIT | Self::KURTOSIS_BIT,
    };

    /// Parse a selection from the single-character option string:
    /// `m` = mean, `v` = variance, `s` = skew, `k` = kurtosis.
    ///
    /// Unknown characters are rejected.
    pub fn parse(codes: &str) -> Result<Moments> {
        let mut bits = 0;
        for c in codes.chars() {
            match c {
                'm' => bits |= Self::MEAN_BIT,
                'v' => bits |= Self::VARIANCE_BIT,
                's' => bits |= Self::SKEW_BIT,
                'k' => bits |= Self::KURTOSIS_BIT,
                _ => ensure!(false, "unrecognized moment code {c:?} in {codes:?}"),
            }
        }
        Ok(Moments { bits })
    }

    /// Whether the mean is requested.
    pub fn mean(self) -> bool {
        self.bits & Self::MEAN_BIT != 0
    }

    /// Whether the variance is requested.
    pub fn variance(self) -> bool {
        self.bits & Self::VARIANCE_BIT != 0
    }

    /// Whether the skewness is requested.
    pub fn skew(self) -> bool {
        self.bits & Self::SKEW_BIT != 0
    }

    /// Whether the excess kurtosis is requested.
    pub fn kurtosis(self) -> bool {
        self.bits & Self::KURTOSIS_BIT != 0
    }
}

impl std::ops::BitOr for Moments {
    type Output = Moments;

    fn bitor(self, rhs: Moments) -> Moments {
        Moments {
            bits: self.bits | rhs.bits,
        }
    }
}

impl Default for Moments {
    fn default() -> Self {
        Moments::MEAN_VARIANCE
    }
}

/// The summary moments of a distribution.
///
/// A field is `None` when the corresponding moment was not requested,
/// `Some(NAN)` when it was requested but does not exist for the family's
/// parameters, and `Some(INFINITY)` where it diverges.  Kurtosis is
/// excess kurtosis throughout (0 for the normal distribution).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// First moment.
    pub mean: Option<Real>,
    /// Second central moment.
    pub variance: Option<Real>,
    /// Standardized third central moment.
    pub skew: Option<Real>,
    /// Excess kurtosis.
    pub kurtosis: Option<Real>,
}

impl Summary {
    /// Assemble a summary from per-moment evaluators, invoking only the
    /// ones selected by `which`.
    pub fn build(
        which: Moments,
        mean: impl FnOnce() -> Real,
        variance: impl FnOnce() -> Real,
        skew: impl FnOnce() -> Real,
        kurtosis: impl FnOnce() -> Real,
    ) -> Summary {
        Summary {
            mean: which.mean().then(mean),
            variance: which.variance().then(variance),
            skew: which.skew().then(skew),
            kurtosis: which.kurtosis().then(kurtosis),
        }
    }
}
