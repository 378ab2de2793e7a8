//! Defines the failure payload of [`Result`][crate::Result].

use crate::trace::{CodeLocationStack, Traced};

use std::fmt;
use std::ops::Deref;
use std::panic;

/// A wrapper around a generic error value. Keeps track of a return trace.
///
/// The wrapped value is never touched by propagation: a failure that travels
/// through any number of [`propagate!`][crate::propagate] sites still holds
/// the value it was created with (converted through `From` when the error
/// types differ). Only the trace grows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TracedError<E, S = CodeLocationStack> {
    pub(crate) error: E,
    pub(crate) stack: S,
}

impl<E, S: Traced + Default> TracedError<E, S> {
    /// Constructs a new [`TracedError`] from the given error.
    ///
    /// The trace will contain the source location of the caller of this
    /// function. If that function's caller is also annotated with
    /// `#[track_caller]`, then its location will be used instead, and so on up
    /// the stack to the first call within a non-tracked function.
    #[inline]
    #[track_caller]
    pub fn new(error: E) -> Self {
        let mut stack = S::default();
        stack.trace(panic::Location::caller());
        Self { error, stack }
    }
}

impl<E, S> TracedError<E, S> {
    /// Builds a failure payload from an error value and an existing trace.
    pub fn from_parts(error: E, stack: S) -> Self {
        Self { error, stack }
    }

    /// Returns a reference to the wrapped error.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Returns the trace.
    pub fn stack(&self) -> &S {
        &self.stack
    }

    pub fn into_inner(self) -> E {
        self.error
    }

    pub fn into_parts(self) -> (E, S) {
        (self.error, self.stack)
    }

    /// Maps the wrapped error, keeping the trace.
    pub fn map<F, O: FnOnce(E) -> F>(self, op: O) -> TracedError<F, S> {
        TracedError {
            error: op(self.error),
            stack: self.stack,
        }
    }

    /// Converts the wrapped error from type `E` to type `F`.
    pub(crate) fn convert_inner<F: From<E>>(self) -> TracedError<F, S> {
        // N.B. Not a `From<TracedError<E>> for TracedError<F>` impl, since
        // that conflicts with the blanket `From<T> for T` when `E` == `F`.
        self.map(F::from)
    }
}

impl<E, S: Traced> TracedError<E, S> {
    /// Pushes the source location of the caller of this function onto the
    /// trace.
    ///
    /// If that function's caller is also annotated with `#[track_caller]`,
    /// then its location will be used instead, and so on up the stack to the
    /// first call within a non-tracked function.
    #[inline]
    #[track_caller]
    pub fn push_caller(&mut self) {
        self.stack.trace(panic::Location::caller());
    }
}

impl<E, S> Deref for TracedError<E, S> {
    type Target = E;

    /// Returns a reference to the wrapped error.
    fn deref(&self) -> &Self::Target {
        &self.error
    }
}

impl<E: fmt::Display, S> fmt::Display for TracedError<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

/*  _            _
 * | |_ ___  ___| |_
 * | __/ _ \/ __| __|
 * | ||  __/\__ \ |_
 *  \__\___||___/\__|
 *  FIGLET: test
 */
