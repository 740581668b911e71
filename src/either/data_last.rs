//! Data-last forms of the `Either` operations.
//!
//! Each function here takes the auxiliary arguments of the matching
//! operation in [`either`](super) and returns a
//! [`DataLast`](crate::dual::DataLast) continuation awaiting the `Either`
//! itself. The continuations are built with the
//! [`dual`](crate::dual) dispatcher from the data-first functions, so both
//! forms always agree.
//!
//! A continuation can be applied directly with `apply` (reusable when the
//! bound arguments are [`Clone`]) or handed to any pipe.
//!
//! # Examples
//!
//! ```rust
//! use typekit::either::{self, Either, data_last};
//!
//! let add_one = data_last::map_left(|value: i32| value + 1);
//!
//! let left: Either<i32, &str> = either::left(1);
//! let right: Either<i32, &str> = either::right("value");
//!
//! assert_eq!(add_one.apply(left), either::left(2));
//! assert_eq!(add_one.apply(right), either::right("value"));
//! ```

use super::{Either, Handlers};
use crate::dual::{DataLast2, dual2};

/// Data-last [`unwrap_left_or`](super::unwrap_left_or).
#[inline]
pub fn unwrap_left_or<L, R>(default: L) -> DataLast2<Either<L, R>, L, L> {
    dual2(super::unwrap_left_or as fn(Either<L, R>, L) -> L).into_data_last((default,))
}

/// Data-last [`unwrap_right_or`](super::unwrap_right_or).
#[inline]
pub fn unwrap_right_or<L, R>(default: R) -> DataLast2<Either<L, R>, R, R> {
    dual2(super::unwrap_right_or as fn(Either<L, R>, R) -> R).into_data_last((default,))
}

/// Data-last [`map_left`](super::map_left).
#[inline]
pub fn map_left<L, R, T, F>(function: F) -> DataLast2<Either<L, R>, F, Either<T, R>>
where
    F: FnOnce(L) -> T,
{
    dual2(super::map_left::<L, R, T, F> as fn(Either<L, R>, F) -> Either<T, R>)
        .into_data_last((function,))
}

/// Data-last [`map_right`](super::map_right).
#[inline]
pub fn map_right<L, R, T, F>(function: F) -> DataLast2<Either<L, R>, F, Either<L, T>>
where
    F: FnOnce(R) -> T,
{
    dual2(super::map_right::<L, R, T, F> as fn(Either<L, R>, F) -> Either<L, T>)
        .into_data_last((function,))
}

/// Data-last [`bi_map`](super::bi_map).
#[inline]
pub fn bi_map<L, R, T, U, F, G>(
    handlers: Handlers<F, G>,
) -> DataLast2<Either<L, R>, Handlers<F, G>, Either<T, U>>
where
    F: FnOnce(L) -> T,
    G: FnOnce(R) -> U,
{
    dual2(super::bi_map::<L, R, T, U, F, G> as fn(Either<L, R>, Handlers<F, G>) -> Either<T, U>)
        .into_data_last((handlers,))
}

/// Data-last [`flat_map_left`](super::flat_map_left).
#[inline]
pub fn flat_map_left<L, R, T, F>(function: F) -> DataLast2<Either<L, R>, F, Either<T, R>>
where
    F: FnOnce(L) -> Either<T, R>,
{
    dual2(super::flat_map_left::<L, R, T, F> as fn(Either<L, R>, F) -> Either<T, R>)
        .into_data_last((function,))
}

/// Data-last [`flat_map_right`](super::flat_map_right).
#[inline]
pub fn flat_map_right<L, R, T, F>(function: F) -> DataLast2<Either<L, R>, F, Either<L, T>>
where
    F: FnOnce(R) -> Either<L, T>,
{
    dual2(super::flat_map_right::<L, R, T, F> as fn(Either<L, R>, F) -> Either<L, T>)
        .into_data_last((function,))
}

/// Data-last [`bi_flat_map`](super::bi_flat_map).
#[inline]
pub fn bi_flat_map<L, R, T, U, F, G>(
    handlers: Handlers<F, G>,
) -> DataLast2<Either<L, R>, Handlers<F, G>, Either<T, U>>
where
    F: FnOnce(L) -> Either<T, U>,
    G: FnOnce(R) -> Either<T, U>,
{
    dual2(
        super::bi_flat_map::<L, R, T, U, F, G>
            as fn(Either<L, R>, Handlers<F, G>) -> Either<T, U>,
    )
    .into_data_last((handlers,))
}
