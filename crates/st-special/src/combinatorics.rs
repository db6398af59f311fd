//! Exact factorials, permutations, and combinations.

use st_core::{Natural, Real};

/// The factorial x!.
///
/// Values below 1 return 1; non-integer arguments are evaluated at the
/// integer part (the floor).  The result is accumulated as a `Real` so
/// that arguments beyond 20 do not wrap.
pub fn factorial(x: Real) -> Real {
    if x.is_nan() {
        return Real::NAN;
    }
    let mut product = 1.0;
    let mut i = 1.0;
    while i <= x.floor() {
        product *= i;
        i += 1.0;
    }
    product
}

/// The number of ways of choosing `r` objects from `n` where order
/// matters: n! / (n − r)!.
pub fn permutations(n: Natural, r: Natural) -> Real {
    if r > n {
        return 0.0;
    }
    factorial(n as Real) / factorial((n - r) as Real)
}

/// The number of ways of choosing `r` objects from `n` where order does
/// not matter: n! / (r!·(n − r)!).
pub fn combinations(n: Natural, r: Natural) -> Real {
    if r > n {
        return 0.0;
    }
    permutations(n, r) / factorial(r as Real)
}
