//! Error types.
//!
//! The only failure this crate produces itself is reading the payload of
//! the wrong [`Either`](crate::either::Either) variant. Errors raised by
//! caller-supplied functions are never caught or wrapped.

use crate::either::Tag;

/// Represents an attempt to read the payload of the variant a value is not.
///
/// Returned by `try_unwrap_left`/`try_unwrap_right`; its message is the
/// panic message of `unwrap_left`/`unwrap_right`.
///
/// # Examples
///
/// ```rust
/// use typekit::either::{self, Either, Tag};
/// use typekit::error::WrongVariantAccess;
///
/// let value: Either<i32, &str> = either::right("value");
/// let error = either::try_unwrap_left(value).unwrap_err();
///
/// assert_eq!(error, WrongVariantAccess::new(Tag::Left, Tag::Right));
/// assert_eq!(error.to_string(), "called `unwrap_left` on a `right` value");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("called `unwrap_{expected}` on a `{found}` value")]
pub struct WrongVariantAccess {
    /// The variant the caller asked for.
    pub expected: Tag,
    /// The variant the value actually is.
    pub found: Tag,
}

impl WrongVariantAccess {
    /// Creates the error for a failed access.
    #[inline]
    pub const fn new(expected: Tag, found: Tag) -> Self {
        Self { expected, found }
    }
}
