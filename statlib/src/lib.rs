//! # statlib
//!
//! A numeric library of closed-form statistical functions: probability
//! distributions, special mathematical functions, descriptive
//! statistics, matrix algebra, and basic hypothesis tests.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `st-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! statlib = "0.1"
//! ```
//!
//! ```rust
//! use statlib::distributions::{ContinuousDistribution, Moments, Normal};
//!
//! let d = Normal::new(10.0, 25.0).unwrap();
//! assert_eq!(d.cdf(10.0), 0.5);
//!
//! let summary = d.summary(Moments::parse("mv").unwrap());
//! assert_eq!(summary.mean, Some(10.0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use st_core as core;

/// Special mathematical functions and root-finding helpers.
pub use st_special as special;

/// Probability distribution value types.
pub use st_distributions as distributions;

/// Descriptive statistics, matrix algebra, hypothesis tests,
/// clustering, and regression.
pub use st_stats as stats;
