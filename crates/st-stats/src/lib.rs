//! # st-stats
//!
//! Descriptive statistics, matrix algebra, hypothesis tests, clustering,
//! and regression models, layered on the distribution engine in
//! `st-distributions`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Descriptive statistics.
pub mod descriptive;

/// Goodness-of-fit hypothesis tests.
pub mod hypothesis;

/// K-means clustering.
pub mod kmeans;

/// Matrix algebra over nalgebra.
pub mod matrix;

/// Regression models.
pub mod regression;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use descriptive::Accumulator;
pub use hypothesis::{chi_square_test, kolmogorov_cdf, kolmogorov_smirnov};
pub use kmeans::KMeans;
pub use matrix::Matrix;
pub use regression::{PowerRegression, SimpleLinearRegression};
