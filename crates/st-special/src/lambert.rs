//! Lambert W function, the inverse of `f(w) = w·e^w`.

use st_core::Real;
use std::f64::consts::E;

/// Which branch of a multi-valued inverse function to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// The principal branch (W₀).
    Principal,
    /// The secondary (negative) branch (W₋₁).
    Secondary,
}

/// Iteration cap for the fixed-point refinement.
const MAX_ITERATIONS: u32 = 150;

/// Convergence tolerance between successive iterates.
const TOLERANCE: Real = 1.0e-7;

/// The Lambert W function: solves `w·e^w = x` for `w`.
///
/// The principal branch is defined for `x > −1/e`; the secondary branch
/// only on `[−1/e, 0)`.  Outside the requested branch's domain NaN is
/// returned.  The seed is refined by the Halley-like fixed point
/// `w ← (x·e^−w + w²)/(w + 1)` for up to 150 steps or until successive
/// iterates differ by less than 1e-7.
pub fn lambert_w(x: Real, branch: Branch) -> Real {
    if x.is_nan() {
        return Real::NAN;
    }

    let mut w = match branch {
        Branch::Principal => {
            if x > 10.0 {
                x.ln() - x.ln().ln()
            } else if x > -1.0 / E {
                0.0
            } else {
                return Real::NAN;
            }
        }
        Branch::Secondary => {
            if x >= -1.0 / E && x <= -0.1 {
                -2.0
            } else if x > -0.1 && x < 0.0 {
                (-x).ln() - (-(-x).ln()).ln()
            } else {
                return Real::NAN;
            }
        }
    };

    for _ in 1..MAX_ITERATIONS {
        let old_w = w;
        w = (x * (-w).exp() + w * w) / (w + 1.0);
        if (w - old_w).abs() < TOLERANCE {
            break;
        }
    }

    w
}
