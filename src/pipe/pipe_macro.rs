//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro, the variadic spelling of
//! [`pipe()`](crate::pipe::pipe()).

/// Pipes a value through a series of unary functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// Every argument after the seed only needs to implement
/// [`Unary`](crate::pipe::Unary), so plain closures and function items mix
/// freely with data-last continuations such as
/// [`either::data_last::map_right`](crate::either::data_last::map_right).
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use typekit::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // pipe!(x, f, g) = g(f(x)) = add_one(double(5)) = add_one(10) = 11
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// ## Type conversion through pipeline
///
/// ```
/// use typekit::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let result = pipe!(12345, to_string, get_length);
/// assert_eq!(result, 5);
/// ```
///
/// ## With data-last operations
///
/// ```
/// use typekit::either::{self, Either, data_last};
/// use typekit::pipe;
///
/// let value: Either<String, i32> = either::right(4);
///
/// let result = pipe!(
///     value,
///     data_last::map_right(|n: i32| n * 10),
///     data_last::unwrap_right_or(0),
/// );
/// assert_eq!(result, 40);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $crate::pipe::Unary::apply_once($function, $value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($crate::pipe::Unary::apply_once($function, $value), $($remaining_functions),+)
    };
}
