//! # st-special
//!
//! Special mathematical functions: gamma and its relatives, the beta
//! family, the error function, Lambert W, and exact combinatorics, plus
//! the 1D root-finding helpers the inverse functions are built on.
//!
//! Every function here is a pure, deterministic function of its numeric
//! arguments.  Domain violations yield NaN rather than panicking; the
//! approximation coefficient tables are reproduced exactly from their
//! published sources and must not be re-derived.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Beta function, regularized incomplete beta, and its inverse.
pub mod beta;

/// Exact factorials, permutations, and combinations.
pub mod combinatorics;

/// Floating-point comparison utilities.
pub mod comparison;

/// Error function and its inverse.
pub mod erf;

/// Gamma function and its relatives.
pub mod gamma;

/// Lambert W function.
pub mod lambert;

/// 1D root-finding helpers.
pub mod solvers;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use beta::{beta, inverse_regularized_incomplete_beta, regularized_incomplete_beta};
pub use combinatorics::{combinations, factorial, permutations};
pub use comparison::{close, close_enough};
pub use erf::{erf, erfc, inverse_erf, inverse_erfc};
pub use gamma::{
    digamma, gamma, inverse_gamma, inverse_lower_gamma, ln_gamma, lower_gamma, upper_gamma,
};
pub use solvers::SolverOutcome;
pub use lambert::{lambert_w, Branch};
