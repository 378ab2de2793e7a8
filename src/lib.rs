//! Tagged-union results with fatal unwrapping and traced early-return
//! propagation.
//!
//! This crate provides [`outcome::Result<T, E>`][crate::Result], a two-variant
//! enum holding either a success value or a traced error, along with:
//!
//! - [`success`] and [`failure`] to build one,
//! - [`Result::unwrap`] and [`Result::unwrap_error`], which terminate the
//!   process with a `file:line Error: message` diagnostic when called on the
//!   wrong variant,
//! - [`propagate!`], which returns a failure from the enclosing function as
//!   soon as an inner call fails.
//!
//!
//! # Return Traces
//!
//! A failure records the source location it was created at. Every time it
//! goes through [`propagate!`], the location of that invocation is appended.
//! The result is a "return trace" showing the path the error took through
//! your code, independent of threads or the call stack at the time it is
//! inspected.
//!
//! The trace type is a type parameter (`Result<T, E, S>`), defaulting to
//! [`CodeLocationStack`]. Any `S: Traced + Default` can be plugged in.
//!
//!
//! # Example
//!
//! ```
//! use outcome::{arith::ArithError, propagate, success, Result};
//!
//! fn double(n: i32) -> Result<i32, ArithError> {
//!     outcome::arith::checked_add(n, n)
//! }
//!
//! fn quadruple(n: i32) -> Result<i32, ArithError> {
//!     let twice = propagate!(double(n));
//!     success(propagate!(double(twice)))
//! }
//!
//! match quadruple(1 << 29) {
//!     outcome::Success(n) => println!("{}", n),
//!     outcome::Failure(err) => {
//!         println!("Error: {}", err);
//!         println!("Return trace: {}", err.stack());
//!     }
//! }
//! ```
//!
//! Returning a [`Result`] from `main` reports a failure and its trace on
//! stderr and exits with status 1.

pub mod arith;
pub mod error;
mod macros;
pub mod result;
pub mod trace;

#[doc(inline)]
pub use self::{
    error::TracedError,
    result::{failure, success, FromResidual, Result, Try},
    trace::{CodeLocation, CodeLocationStack, Traced},
};

pub use self::result::Result::{Failure, Success};

pub mod prelude {
    pub use crate::error::TracedError;
    pub use crate::propagate;
    pub use crate::result::Result::{self, Failure, Success};
    pub use crate::result::{failure, success};
}

#[cfg(test)]
mod test;
