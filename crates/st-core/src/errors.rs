//! Error types for statlib-rs.
//!
//! A single `thiserror`-derived enum covers every failure mode the library
//! can report: invalid construction parameters, precondition violations in
//! the numeric helpers, dimension mismatches in matrix operations, and
//! solver non-convergence in contexts that must report it.  Query methods
//! on distributions never return errors; domain violations there produce
//! NaN or boundary probabilities instead.

use thiserror::Error;

/// The top-level error type used throughout statlib-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A distribution or model was constructed with parameters outside the
    /// family's valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two operands have incompatible dimensions.
    #[error("dimension mismatch: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    DimensionMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// An iterative method exhausted its iteration cap in a context where
    /// a best-effort value is not acceptable.
    #[error("failed to converge: {0}")]
    NonConvergence(String),
}

/// Shorthand `Result` type used throughout statlib-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a precondition, returning `Err(Error::InvalidParameter(...))`
/// if `$cond` is false.
///
/// # Example
/// ```
/// use st_core::{ensure, errors::Error};
/// fn positive(x: f64) -> st_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use st_core::{fail, errors::Error};
/// fn always_err() -> st_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
