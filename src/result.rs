//! Defines a new result type.

use crate::error::TracedError;
use crate::trace::{CodeLocation, CodeLocationStack, Traced};

use std::convert::Infallible;
use std::fmt;
use std::ops::ControlFlow;
use std::process::{self, ExitCode, Termination};

/// Construct a new [`Result`] with the given success value.
#[inline]
pub fn success<T, E, S>(value: T) -> Result<T, E, S> {
    Result::Success(value)
}

/// Construct a new [`Result`] with the given error value.
///
/// The trace starts at the caller's location.
#[inline]
#[track_caller]
pub fn failure<T, E, S: Traced + Default, F: From<E>>(error: E) -> Result<T, F, S> {
    Result::Failure(TracedError::new(F::from(error)))
}

/*  ____                 _ _    _______   _______
 * |  _ \ ___  ___ _   _| | |_ / /_   _| | ____\ \
 * | |_) / _ \/ __| | | | | __/ /  | |   |  _|  \ \
 * |  _ <  __/\__ \ |_| | | |_\ \  | |_  | |___ / /
 * |_| \_\___||___/\__,_|_|\__|\_\ |_( ) |_____/_/
 *                                   |/
 *  FIGLET: Result<T, E>
 */

/// The outcome of a fallible operation: either a success value or a traced
/// error, never both.
///
/// # Propagation
///
/// Inside a function that itself returns a `Result`, use
/// [`propagate!`][crate::propagate] to take the success value out of an inner
/// result or return its failure right away:
///
/// ```
/// use outcome::{failure, propagate, success, Result};
///
/// fn half(n: i32) -> Result<i32, String> {
///     if n % 2 == 0 {
///         success(n / 2)
///     } else {
///         failure(format!("{} is odd", n))
///     }
/// }
///
/// fn quarter(n: i32) -> Result<i32, String> {
///     let h = propagate!(half(n));
///     // Not reached when `half` fails.
///     success(propagate!(half(h)))
/// }
/// ```
///
/// Every `propagate!` a failure passes through appends its location to the
/// failure's trace. The error value itself is passed along unchanged, or
/// converted through [`From`] when the enclosing function's error type is a
/// different one.
///
/// ## Contained Value
///
/// A `Failure` holds a [`TracedError<E, S>`], not a bare `E`. Use
/// [`TracedError::error`] (or dereference it) to get at the error:
///
/// ```
/// # fn function_that_returns_result() -> outcome::Result<(), String> {
/// #     outcome::failure("a")
/// # }
/// match function_that_returns_result() {
///     outcome::Success(_) => {}
///     outcome::Failure(e) => {
///         println!("trace: {}", e.stack());
///         let inner: &String = e.error();
///         println!("inner: {}", inner);
///     }
/// }
/// ```
///
/// ## Unwrapping
///
/// [`Result::unwrap`] and [`Result::unwrap_error`] assert which variant is
/// present. Getting it wrong is a bug in the caller, so both terminate the
/// process with a `file:line Error: message` diagnostic instead of returning.
#[must_use = "this `Result` may be a `Failure` variant, which should be handled"]
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub enum Result<T, E, S = CodeLocationStack> {
    Success(T),
    Failure(TracedError<E, S>),
}

/*  _                 _   _____
 * (_)_ __ ___  _ __ | | |_   _| __ _   _
 * | | '_ ` _ \| '_ \| |   | || '__| | | |
 * | | | | | | | |_) | |   | || |  | |_| |
 * |_|_| |_| |_| .__/|_|   |_||_|   \__, |
 *             |_|                  |___/
 *  FIGLET: impl Try
 */

/// The branching half of [`propagate!`][crate::propagate].
///
/// [`Self::branch()`] returns a [`ControlFlow`] which dictates whether the
/// execution will continue forward, or break out of the enclosing function.
/// The value produced when continuing is the `Output`, and the value produced
/// when breaking early is called the `Residual`.
pub trait Try {
    type Output;
    type Residual;

    fn from_output(output: Self::Output) -> Self;

    fn branch(self) -> ControlFlow<Self::Residual, Self::Output>;
}

/// The returning half of [`propagate!`][crate::propagate]: builds the
/// enclosing function's return value out of a residual.
pub trait FromResidual<R> {
    fn from_residual(residual: R) -> Self;
}

impl<T, E, S> Try for Result<T, E, S> {
    type Output = T;
    type Residual = Result<Infallible, E, S>;

    #[inline]
    fn from_output(output: Self::Output) -> Self {
        Result::Success(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Result::Success(value) => ControlFlow::Continue(value),
            Result::Failure(err) => ControlFlow::Break(Result::Failure(err)),
        }
    }
}

/// Lets [`propagate!`][crate::propagate] take apart a
/// [`std::result::Result`] too.
impl<T, E> Try for std::result::Result<T, E> {
    type Output = T;
    type Residual = std::result::Result<Infallible, E>;

    #[inline]
    fn from_output(output: Self::Output) -> Self {
        Ok(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Ok(value) => ControlFlow::Continue(value),
            Err(err) => ControlFlow::Break(Err(err)),
        }
    }
}

/// Pushes an entry to the trace when one [`Result`] is propagated into another.
impl<T, E, S, F> FromResidual<Result<Infallible, E, S>> for Result<T, F, S>
where
    S: Traced,
    F: From<E>,
{
    #[inline]
    #[track_caller]
    fn from_residual(residual: Result<Infallible, E, S>) -> Self {
        match residual {
            Result::Success(never) => match never {},
            Result::Failure(mut err) => {
                let location = CodeLocation::here();
                err.push_caller();
                tracing::debug!(%location, "propagating failure");
                Result::Failure(err.convert_inner())
            }
        }
    }
}

/// Starts a new trace when a [`std::result::Result`] is propagated into a [`Result`].
impl<T, E, S, F> FromResidual<std::result::Result<Infallible, E>> for Result<T, F, S>
where
    S: Traced + Default,
    F: From<E>,
{
    #[inline]
    #[track_caller]
    fn from_residual(residual: std::result::Result<Infallible, E>) -> Self {
        match residual {
            Ok(never) => match never {},
            Err(err) => Result::Failure(TracedError::new(F::from(err))),
        }
    }
}

/*
  _                 _   _____                   _             _   _
 (_)_ __ ___  _ __ | | |_   _|__ _ __ _ __ ___ (_)_ __   __ _| |_(_) ___  _ __
 | | '_ ` _ \| '_ \| |   | |/ _ \ '__| '_ ` _ \| | '_ \ / _` | __| |/ _ \| '_ \
 | | | | | | | |_) | |   | |  __/ |  | | | | | | | | | | (_| | |_| | (_) | | | |
 |_|_| |_| |_| .__/|_|   |_|\___|_|  |_| |_| |_|_|_| |_|\__,_|\__|_|\___/|_| |_|
             |_|
 FIGLET: impl Termination
*/

/// Lets `main` return a [`Result`]: a failure is reported on stderr along with
/// its return trace, and the process exits with status 1.
impl<T, E: fmt::Display, S: fmt::Display> Termination for Result<T, E, S> {
    fn report(self) -> ExitCode {
        match self {
            Result::Success(_) => ExitCode::SUCCESS,
            Result::Failure(err) => {
                tracing::error!(error = %err.error(), "main returned a failure");
                eprintln!("Error: {}", err.error());
                eprintln!("\nReturn Trace: {}", err.stack());

                ExitCode::FAILURE
            }
        }
    }
}

/// Writes a `file:line Error: message` diagnostic to stderr and terminates the
/// process with status 1.
#[cold]
fn fatal(location: CodeLocation, message: &dyn fmt::Display) -> ! {
    tracing::error!(%location, %message, "fatal unwrap");
    eprintln!("{} Error: {}", location, message);
    process::exit(1)
}

/*  _                 _   ____                 _ _
 * (_)_ __ ___  _ __ | | |  _ \ ___  ___ _   _| | |_
 * | | '_ ` _ \| '_ \| | | |_) / _ \/ __| | | | | __|
 * | | | | | | | |_) | | |  _ <  __/\__ \ |_| | | |_
 * |_|_| |_| |_| .__/|_| |_| \_\___||___/\__,_|_|\__|
 *             |_|
 *  FIGLET: impl Result
 */

impl<T, E, S> Result<T, E, S> {
    pub fn is_success(&self) -> bool {
        matches!(self, Result::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value.
    ///
    /// On a `Failure` this does not return: it prints
    /// `<file>:<line> Error: <message>` for the location of this call and
    /// exits the process with status 1.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Display,
    {
        match self {
            Result::Success(value) => value,
            Result::Failure(err) => fatal(CodeLocation::here(), err.error()),
        }
    }

    /// Returns the error value.
    ///
    /// On a `Success` this does not return: it prints
    /// `<file>:<line> Error: unwrap_error called on a success value` and exits
    /// the process with status 1.
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            Result::Success(_) => fatal(
                CodeLocation::here(),
                &"unwrap_error called on a success value",
            ),
            Result::Failure(err) => err.into_inner(),
        }
    }

    /// Converts from `Result<T, E>` to [`std::result::Result<T, E>`]
    /// and returns the trace if it is a `Failure`.
    pub fn unpack(self) -> (std::result::Result<T, E>, Option<S>) {
        match self {
            Result::Success(value) => (Ok(value), None),
            Result::Failure(err) => {
                let (error, stack) = err.into_parts();
                (Err(error), Some(stack))
            }
        }
    }

    /// Converts to [`std::result::Result<T, E>`], dropping the trace.
    pub fn into_std(self) -> std::result::Result<T, E> {
        self.unpack().0
    }

    pub fn success_value(self) -> Option<T> {
        match self {
            Result::Success(value) => Some(value),
            Result::Failure(_) => None,
        }
    }

    pub fn failure_value(self) -> Option<E> {
        match self {
            Result::Success(_) => None,
            Result::Failure(err) => Some(err.into_inner()),
        }
    }

    pub fn map<U, O: FnOnce(T) -> U>(self, op: O) -> Result<U, E, S> {
        match self {
            Result::Success(value) => Result::Success(op(value)),
            Result::Failure(err) => Result::Failure(err),
        }
    }

    /// Maps the error value, keeping the trace.
    pub fn map_error<F, O: FnOnce(E) -> F>(self, op: O) -> Result<T, F, S> {
        match self {
            Result::Success(value) => Result::Success(value),
            Result::Failure(err) => Result::Failure(err.map(op)),
        }
    }
}

impl<T, E, S: Traced + Default> From<std::result::Result<T, E>> for Result<T, E, S> {
    #[track_caller]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Result::Success(value),
            Err(error) => Result::Failure(TracedError::new(error)),
        }
    }
}

/*  _            _
 * | |_ ___  ___| |_
 * | __/ _ \/ __| __|
 * | ||  __/\__ \ |_
 *  \__\___||___/\__|
 *  FIGLET: test
 */

#[cfg(test)]
mod test {
    use super::*;
    use crate::propagate;
    use crate::test::Fixture;
    use std::cell::Cell;
    use std::num::ParseIntError;

    #[test]
    fn failure_coerces_from_inner() {
        fn func() -> Result<u32, String> {
            failure("string slice")
        }
        let (result, stack) = func().unpack();
        assert_eq!(result, Err(String::from("string slice")));
        assert_eq!(stack.map(|s| s.len()), Some(1));
    }

    #[test]
    fn success_has_no_trace() {
        let result: Result<u32, String> = success(7);
        assert!(result.is_success());
        assert_eq!(result.unpack(), (Ok(7), None));
    }

    #[test]
    fn unwrap_returns_wrapped_value() {
        let result: Result<&str, String> = success("exact");
        assert_eq!(result.unwrap(), "exact");
    }

    #[test]
    fn unwrap_error_returns_wrapped_error() {
        let result: Result<(), String> = failure("boom");
        assert_eq!(result.unwrap_error(), "boom");
    }

    fn maybe_parse(fix: &mut Fixture, input: &str) -> Result<i32, ParseIntError> {
        fix.tag_location("parse", CodeLocation::here().down_by(1));
        let n = propagate!(input.parse::<i32>());
        success(n)
    }

    #[test]
    fn propagate_yields_success_value() {
        let mut fix = Fixture::default();

        let result = maybe_parse(&mut fix, "12");
        assert_eq!(result.into_std(), Ok(12));
    }

    #[test]
    fn propagate_starts_trace_from_std_result() {
        let mut fix = Fixture::default();

        let result = maybe_parse(&mut fix, "twelve");
        fix.assert_result_has_stack(result, &["parse"]);
    }

    #[test]
    fn propagate_appends_to_stack() {
        let mut fix = Fixture::default();

        let mut outer = || -> Result<i32, ParseIntError> {
            fix.tag_location("outer", CodeLocation::here().down_by(1));
            let n = propagate!(maybe_parse(&mut fix, "x"));
            success(n + 1)
        };

        let result = outer();
        fix.assert_result_has_stack(result, &["parse", "outer"]);
    }

    #[test]
    fn returning_without_propagate_does_not_append_to_stack() {
        let mut fix = Fixture::default();

        let mut outer = || -> Result<i32, ParseIntError> { maybe_parse(&mut fix, "x") };

        let result = outer();
        fix.assert_result_has_stack(result, &["parse"]);
    }

    #[test]
    fn propagate_stops_enclosing_function() {
        let reached = Cell::new(false);

        let outer = || -> Result<(), String> {
            propagate!(failure::<(), _, CodeLocationStack, String>("first"));
            reached.set(true);
            success(())
        };

        assert_eq!(outer().into_std(), Err(String::from("first")));
        assert!(!reached.get());
    }

    #[derive(Debug, Clone, PartialEq)]
    enum MyError {
        Parse(ParseIntError),
        Other(String),
    }

    impl From<ParseIntError> for MyError {
        fn from(e: ParseIntError) -> Self {
            Self::Parse(e)
        }
    }

    impl From<String> for MyError {
        fn from(s: String) -> Self {
            Self::Other(s)
        }
    }

    #[test]
    fn propagate_coerces_to_custom_error_type() {
        let mut fix = Fixture::default();

        let mut outer = || -> Result<i32, MyError> {
            fix.tag_location("outer", CodeLocation::here().down_by(1));
            let n = propagate!(maybe_parse(&mut fix, "x"));
            success(n)
        };

        let result = outer();
        let expected = "x".parse::<i32>().map_err(MyError::from);
        assert_eq!(result.clone().into_std(), expected);
        fix.assert_result_has_stack(result, &["parse", "outer"]);
    }

    #[test]
    fn failure_coerces_to_custom_error_type() {
        let mut fix = Fixture::default();

        let mut outer = || -> Result<(), MyError> {
            fix.tag_location("outer", CodeLocation::here().down_by(1));
            failure("oops".to_string())
        };

        let result = outer();
        fix.assert_result_has_stack(result, &["outer"]);
    }

    #[test]
    fn map_error_keeps_trace() {
        let result: Result<(), &str> = failure("oops");
        let before = match &result {
            Result::Failure(err) => err.stack().clone(),
            Result::Success(_) => unreachable!(),
        };

        let (mapped, stack) = result.map_error(str::len).unpack();

        assert_eq!(mapped, Err(4));
        assert_eq!(stack, Some(before));
    }

    #[test]
    fn from_std_result() {
        let ok: Result<i32, &str> = Ok(3).into();
        let err: Result<i32, &str> = Err("nope").into();

        assert_eq!(ok.success_value(), Some(3));
        assert_eq!(err.failure_value(), Some("nope"));
    }

    #[derive(Default, Debug, PartialEq)]
    struct Depth(usize);

    impl Traced for Depth {
        fn trace(&mut self, _location: &'static std::panic::Location<'static>) {
            self.0 += 1;
        }
    }

    #[test]
    fn custom_trace_type() {
        fn inner() -> Result<(), &'static str, Depth> {
            failure("deep")
        }

        fn outer() -> Result<(), &'static str, Depth> {
            propagate!(inner());
            success(())
        }

        let (error, depth) = outer().unpack();
        assert_eq!(error, Err("deep"));
        assert_eq!(depth, Some(Depth(2)));
    }
}
