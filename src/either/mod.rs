//! Either type - a value that is exactly one of two variants.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`, together with its full
//! algebra: predicates, extractors, and structure-preserving maps.
//!
//! # Calling Styles
//!
//! Every operation is available three ways:
//!
//! - as a free function taking the `Either` first (data-first):
//!   `either::map_right(value, f)`
//! - as a method: `value.map_right(f)`
//! - for operations with auxiliary arguments, as a data-last continuation
//!   in [`data_last`]: `data_last::map_right(f)`, ready to be piped
//!
//! # Pass-through
//!
//! Single-channel operations (`map_left`, `flat_map_right`, ...) move the
//! payload of the untouched channel into the result. Nothing is cloned or
//! re-allocated, so a boxed payload keeps its address.
//!
//! # Examples
//!
//! ```rust
//! use typekit::either::{self, Either, Handlers, data_last};
//! use typekit::pipe::Pipeable;
//!
//! let parsed: Either<String, i32> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//!
//! let described = parsed.pipe(data_last::bi_map(Handlers {
//!     on_left: |error: String| format!("error: {error}"),
//!     on_right: |value: i32| value * 2,
//! }));
//! assert_eq!(described, either::right(84));
//! ```

pub mod data_last;

use std::fmt;

use crate::error::WrongVariantAccess;
use crate::pipe::Pipeable;

/// A value that is exactly one of two variants.
///
/// `Either<L, R>` is either `Left(L)` or `Right(R)`. By convention:
/// - `Left` represents failure, error, or the first alternative
/// - `Right` represents success or the second alternative
///
/// The variant of a value never changes; every operation returns a new value.
///
/// # Type Parameters
///
/// * `L` - The type of the left payload
/// * `R` - The type of the right payload
///
/// # Examples
///
/// ```rust
/// use typekit::either::{Either, Tag};
///
/// let success: Either<String, i32> = Either::Right(42);
///
/// assert_eq!(success.tag(), Tag::Right);
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the first alternative.
    Left(L),
    /// The right variant, conventionally representing success or the second alternative.
    Right(R),
}

/// The tag of an [`Either`] variant.
///
/// Displays as the tag literals `"left"` and `"right"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tag {
    /// Tag of [`Either::Left`].
    Left,
    /// Tag of [`Either::Right`].
    Right,
}

impl Tag {
    /// Returns the tag literal.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A pair of per-variant functions, the argument of [`bi_map`] and
/// [`bi_flat_map`].
///
/// # Examples
///
/// ```rust
/// use typekit::either::{Either, Handlers};
///
/// let handlers = Handlers {
///     on_left: |code: i32| code + 1,
///     on_right: |text: &str| text.len(),
/// };
///
/// let value: Either<i32, &str> = Either::Left(1);
/// assert_eq!(value.bi_map(handlers), Either::Left(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handlers<F, G> {
    /// Applied when the value is `Left`.
    pub on_left: F,
    /// Applied when the value is `Right`.
    pub on_right: G,
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns the tag of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekit::either::{Either, Tag};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.tag(), Tag::Left);
    /// assert_eq!(left.tag().as_str(), "left");
    /// ```
    #[inline]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Left(_) => Tag::Left,
            Self::Right(_) => Tag::Right,
        }
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left payload, or a [`WrongVariantAccess`] if this is a `Right`.
    ///
    /// # Errors
    ///
    /// Returns `WrongVariantAccess { expected: Tag::Left, found: Tag::Right }`
    /// for a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekit::either::{Either, Tag};
    ///
    /// let right: Either<i32, &str> = Either::Right("value");
    /// let error = right.try_unwrap_left().unwrap_err();
    /// assert_eq!(error.found, Tag::Right);
    /// ```
    #[inline]
    pub fn try_unwrap_left(self) -> Result<L, WrongVariantAccess> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(expected = %Tag::Left, found = %Tag::Right, "wrong variant access");

                Err(WrongVariantAccess::new(Tag::Left, Tag::Right))
            }
        }
    }

    /// Returns the right payload, or a [`WrongVariantAccess`] if this is a `Left`.
    ///
    /// # Errors
    ///
    /// Returns `WrongVariantAccess { expected: Tag::Right, found: Tag::Left }`
    /// for a `Left` value.
    #[inline]
    pub fn try_unwrap_right(self) -> Result<R, WrongVariantAccess> {
        match self {
            Self::Left(_) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(expected = %Tag::Right, found = %Tag::Left, "wrong variant access");

                Err(WrongVariantAccess::new(Tag::Right, Tag::Left))
            }
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the left payload, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with the [`WrongVariantAccess`] message if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekit::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.unwrap_left(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self.try_unwrap_left() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the right payload, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with the [`WrongVariantAccess`] message if this is a `Left` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self.try_unwrap_right() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the left payload, or `default` if this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekit::either::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("value");
    /// assert_eq!(right.unwrap_left_or(2), 2);
    /// ```
    #[inline]
    pub fn unwrap_left_or(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    /// Returns the right payload, or `default` if this is a `Left`.
    #[inline]
    pub fn unwrap_right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left payload if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, moves `r` into the result unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekit::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x: i32| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right payload if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, moves `l` into the result unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekit::either::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_right(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies the handler matching the variant; the result keeps the tag.
    #[inline]
    pub fn bi_map<T, U, F, G>(self, handlers: Handlers<F, G>) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left((handlers.on_left)(value)),
            Self::Right(value) => Either::Right((handlers.on_right)(value)),
        }
    }

    // =========================================================================
    // Flat Mapping Operations
    // =========================================================================

    /// Replaces a `Left` with the `Either` returned by `function`.
    ///
    /// The result may be of either variant. A `Right` is moved through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekit::either::Either;
    ///
    /// let left: Either<i32, &str> = Either::Left(-1);
    /// let recovered = left.flat_map_left(|code| {
    ///     if code < 0 { Either::Right("recovered") } else { Either::Left(code) }
    /// });
    /// assert_eq!(recovered, Either::Right("recovered"));
    /// ```
    #[inline]
    pub fn flat_map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Replaces a `Right` with the `Either` returned by `function`.
    ///
    /// The result may be of either variant. A `Left` is moved through.
    #[inline]
    pub fn flat_map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies the handler matching the variant and returns its result directly.
    #[inline]
    pub fn bi_flat_map<T, U, F, G>(self, handlers: Handlers<F, G>) -> Either<T, U>
    where
        F: FnOnce(L) -> Either<T, U>,
        G: FnOnce(R) -> Either<T, U>,
    {
        match self {
            Self::Left(value) => (handlers.on_left)(value),
            Self::Right(value) => (handlers.on_right)(value),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting from the right channel.
    ///
    /// A `Left` is moved through; a `Right` yields the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekit::either::Either;
    ///
    /// let nested: Either<i32, Either<i32, &str>> = Either::Right(Either::Left(1));
    /// assert_eq!(nested.flatten(), Either::Left(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(inner) => inner,
        }
    }
}

impl<L, R> Either<Either<L, R>, Either<L, R>> {
    /// Removes one level of nesting when both channels carry an `Either`.
    ///
    /// A `Left` yields its inner value, of whichever variant it is. A `Right`
    /// yields its inner value unchanged. Exactly one level is removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typekit::either::Either;
    ///
    /// let nested: Either<Either<i32, &str>, Either<i32, &str>> =
    ///     Either::Left(Either::Right("value"));
    /// assert_eq!(nested.flatten2(), Either::Right("value"));
    /// ```
    #[inline]
    pub fn flatten2(self) -> Either<L, R> {
        match self {
            Self::Left(inner) | Self::Right(inner) => inner,
        }
    }
}

impl<L, R> Pipeable for Either<L, R> {}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Data-first Functions
// =============================================================================

/// Constructs a `Left`.
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Constructs a `Right`.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Returns `true` if `either` is a `Left`.
#[inline]
pub const fn is_left<L, R>(either: &Either<L, R>) -> bool {
    either.is_left()
}

/// Returns `true` if `either` is a `Right`.
#[inline]
pub const fn is_right<L, R>(either: &Either<L, R>) -> bool {
    either.is_right()
}

/// Returns the left payload.
///
/// # Panics
///
/// Panics if `either` is a `Right`. See [`try_unwrap_left`].
#[inline]
#[track_caller]
pub fn unwrap_left<L, R>(either: Either<L, R>) -> L {
    either.unwrap_left()
}

/// Returns the right payload.
///
/// # Panics
///
/// Panics if `either` is a `Left`. See [`try_unwrap_right`].
#[inline]
#[track_caller]
pub fn unwrap_right<L, R>(either: Either<L, R>) -> R {
    either.unwrap_right()
}

/// Returns the left payload or a [`WrongVariantAccess`].
///
/// # Errors
///
/// Fails when `either` is a `Right`.
#[inline]
pub fn try_unwrap_left<L, R>(either: Either<L, R>) -> Result<L, WrongVariantAccess> {
    either.try_unwrap_left()
}

/// Returns the right payload or a [`WrongVariantAccess`].
///
/// # Errors
///
/// Fails when `either` is a `Left`.
#[inline]
pub fn try_unwrap_right<L, R>(either: Either<L, R>) -> Result<R, WrongVariantAccess> {
    either.try_unwrap_right()
}

/// Returns the left payload, or `default` for a `Right`.
#[inline]
pub fn unwrap_left_or<L, R>(either: Either<L, R>, default: L) -> L {
    either.unwrap_left_or(default)
}

/// Returns the right payload, or `default` for a `Left`.
#[inline]
pub fn unwrap_right_or<L, R>(either: Either<L, R>, default: R) -> R {
    either.unwrap_right_or(default)
}

/// Removes one level of nesting from the right channel. See [`Either::flatten`].
#[inline]
pub fn flatten<L, R>(either: Either<L, Either<L, R>>) -> Either<L, R> {
    either.flatten()
}

/// Removes one level of nesting when both channels carry an `Either`.
/// See [`Either::flatten2`].
#[inline]
pub fn flatten2<L, R>(either: Either<Either<L, R>, Either<L, R>>) -> Either<L, R> {
    either.flatten2()
}

/// Maps the left payload. See [`Either::map_left`].
#[inline]
pub fn map_left<L, R, T, F>(either: Either<L, R>, function: F) -> Either<T, R>
where
    F: FnOnce(L) -> T,
{
    either.map_left(function)
}

/// Maps the right payload. See [`Either::map_right`].
#[inline]
pub fn map_right<L, R, T, F>(either: Either<L, R>, function: F) -> Either<L, T>
where
    F: FnOnce(R) -> T,
{
    either.map_right(function)
}

/// Maps whichever payload is present. See [`Either::bi_map`].
#[inline]
pub fn bi_map<L, R, T, U, F, G>(either: Either<L, R>, handlers: Handlers<F, G>) -> Either<T, U>
where
    F: FnOnce(L) -> T,
    G: FnOnce(R) -> U,
{
    either.bi_map(handlers)
}

/// Flat-maps the left payload. See [`Either::flat_map_left`].
#[inline]
pub fn flat_map_left<L, R, T, F>(either: Either<L, R>, function: F) -> Either<T, R>
where
    F: FnOnce(L) -> Either<T, R>,
{
    either.flat_map_left(function)
}

/// Flat-maps the right payload. See [`Either::flat_map_right`].
#[inline]
pub fn flat_map_right<L, R, T, F>(either: Either<L, R>, function: F) -> Either<L, T>
where
    F: FnOnce(R) -> Either<L, T>,
{
    either.flat_map_right(function)
}

/// Flat-maps whichever payload is present. See [`Either::bi_flat_map`].
#[inline]
pub fn bi_flat_map<L, R, T, U, F, G>(
    either: Either<L, R>,
    handlers: Handlers<F, G>,
) -> Either<T, U>
where
    F: FnOnce(L) -> Either<T, U>,
    G: FnOnce(R) -> Either<T, U>,
{
    either.bi_flat_map(handlers)
}
