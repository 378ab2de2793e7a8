//! Checked `i32` arithmetic built on [`Result`].

use crate::{failure, propagate, success, Result};

use thiserror::Error;

/// The ways checked arithmetic can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithError {
    #[error("Int overflow")]
    Overflow,
    #[error("Int underflow")]
    Underflow,
}

/// Adds `a` and `b`, failing instead of wrapping around.
pub fn checked_add(a: i32, b: i32) -> Result<i32, ArithError> {
    if a > 0 && b > i32::MAX - a {
        tracing::trace!(a, b, "addition overflows");
        return failure(ArithError::Overflow);
    }
    if a < 0 && b < i32::MIN - a {
        tracing::trace!(a, b, "addition underflows");
        return failure(ArithError::Underflow);
    }
    success(a + b)
}

/// Multiplies `a` by `b` through repeated [`checked_add`], stopping at the
/// first step that overflows or underflows.
///
/// The accumulator starts at `a` and `b - 1` additions follow. For `b <= 0`
/// no addition happens and `a` comes back unchanged, so this is only a real
/// multiplication for positive `b`.
pub fn checked_multiply(a: i32, b: i32) -> Result<i32, ArithError> {
    let mut product = a;
    for _ in 1..b {
        product = propagate!(checked_add(product, a));
    }
    success(product)
}
