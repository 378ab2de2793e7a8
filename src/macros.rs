/// Takes the success value out of a result, or returns its failure from the
/// enclosing function.
///
/// The enclosing function must return a [`Result<_, F, S>`][crate::Result]
/// whose error type `F` implements `From<E>` for the inner error type `E`.
/// The operand may be a [`Result`][crate::Result], in which case the location
/// of this invocation is appended to the failure's trace, or a
/// [`std::result::Result`], in which case a new trace starts here.
///
/// Nothing after a failing `propagate!` runs in the enclosing function.
///
/// ```
/// use outcome::{propagate, success, Result};
///
/// fn parse_twice(s: &str) -> Result<i32, std::num::ParseIntError> {
///     let n = propagate!(s.parse::<i32>());
///     success(n * 2)
/// }
/// ```
#[macro_export]
macro_rules! propagate {
    ($expr:expr $(,)?) => {
        match $crate::Try::branch($expr) {
            ::core::ops::ControlFlow::Continue(output) => output,
            ::core::ops::ControlFlow::Break(residual) => {
                return $crate::FromResidual::from_residual(residual);
            }
        }
    };
}
