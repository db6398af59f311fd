//! # st-distributions
//!
//! Probability distribution value types: each family is an immutable
//! struct holding its validated parameters and delegating the numerics
//! to the pure special functions in `st-special`.
//!
//! Every family answers the full capability set — pdf/pmf, cdf, sf, ppf,
//! isf, summary moments, and random variates — through the
//! [`ContinuousDistribution`] / [`DiscreteDistribution`] traits.  Random
//! variates draw from an explicitly injected [`UniformSource`]; there is
//! no global RNG state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Beta distribution.
pub mod beta;

/// Cauchy distribution.
pub mod cauchy;

/// Chi-square distribution.
pub mod chi_square;

/// The distribution capability traits.
pub mod distribution;

/// Exponential distribution.
pub mod exponential;

/// F distribution.
pub mod fisher_f;

/// Gamma distribution.
pub mod gamma;

/// Hypergeometric distribution.
pub mod hypergeometric;

/// Kolmogorov distribution.
pub mod kolmogorov;

/// Levy distribution.
pub mod levy;

/// Log-normal distribution.
pub mod log_normal;

/// Moment selection and the summary record.
pub mod moments;

/// Normal distribution.
pub mod normal;

/// Pareto distribution.
pub mod pareto;

/// Poisson distribution.
pub mod poisson;

/// Uniform random sources.
pub mod random;

/// Rayleigh distribution.
pub mod rayleigh;

/// Student's t-distribution.
pub mod students_t;

/// Discrete and continuous uniform distributions.
pub mod uniform;

/// Weibull distribution.
pub mod weibull;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use beta::Beta;
pub use cauchy::Cauchy;
pub use chi_square::ChiSquare;
pub use distribution::{ContinuousDistribution, DiscreteDistribution};
pub use exponential::Exponential;
pub use fisher_f::FisherF;
pub use gamma::Gamma;
pub use hypergeometric::Hypergeometric;
pub use kolmogorov::Kolmogorov;
pub use levy::Levy;
pub use log_normal::LogNormal;
pub use moments::{Moments, Summary};
pub use normal::Normal;
pub use pareto::Pareto;
pub use poisson::Poisson;
pub use random::{MersenneTwister, UniformSource};
pub use rayleigh::Rayleigh;
pub use students_t::StudentsT;
pub use uniform::{ContinuousUniform, DiscreteUniform};
pub use weibull::Weibull;
