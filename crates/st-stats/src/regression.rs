//! Closed-form least-squares regression models.

use crate::descriptive::{correlation, covariance, mean, variance};
use st_core::errors::{Error, Result};
use st_core::Real;

/// Simple linear regression `y ≈ α + β·x`, fit by ordinary least
/// squares over the descriptive statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleLinearRegression {
    alpha: Real,
    beta: Real,
    r: Real,
}

impl SimpleLinearRegression {
    /// Fit a line to the paired data.
    pub fn fit(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_paired(xs, ys)?;
        let beta = covariance(xs, ys) / variance(xs);
        let alpha = mean(ys) - beta * mean(xs);
        Ok(Self {
            alpha,
            beta,
            r: correlation(xs, ys),
        })
    }

    /// Intercept α.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Slope β.
    pub fn beta(&self) -> Real {
        self.beta
    }

    /// Pearson correlation coefficient of the fit.
    pub fn r(&self) -> Real {
        self.r
    }

    /// Predicted response at `x`.
    pub fn predict(&self, x: Real) -> Real {
        self.alpha + self.beta * x
    }
}

/// Power-law regression `y ≈ α·x^β`: a linear fit in log-log space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerRegression {
    alpha: Real,
    beta: Real,
    r: Real,
}

impl PowerRegression {
    /// Fit a power law to the paired data.  All values must be
    /// positive, since the fit runs on logarithms.
    pub fn fit(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_paired(xs, ys)?;
        if xs.iter().chain(ys).any(|&v| v <= 0.0) {
            return Err(Error::Precondition(
                "power regression requires positive data".into(),
            ));
        }
        let log_x: Vec<Real> = xs.iter().map(|x| x.ln()).collect();
        let log_y: Vec<Real> = ys.iter().map(|y| y.ln()).collect();

        let line = SimpleLinearRegression::fit(&log_x, &log_y)?;
        Ok(Self {
            alpha: line.alpha().exp(),
            beta: line.beta(),
            r: line.r(),
        })
    }

    /// Multiplier α.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Exponent β.
    pub fn beta(&self) -> Real {
        self.beta
    }

    /// Correlation coefficient of the log-log fit.
    pub fn r(&self) -> Real {
        self.r
    }

    /// Predicted response at `x`.
    pub fn predict(&self, x: Real) -> Real {
        self.alpha * x.powf(self.beta)
    }
}

fn check_paired(xs: &[Real], ys: &[Real]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(Error::Precondition(format!(
            "x ({}) and y ({}) must be paired",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 2 {
        return Err(Error::Precondition(
            "regression requires at least two points".into(),
        ));
    }
    Ok(())
}
