//! The `Pipeable` capability and the [`Piped`] wrapper.

use std::ops::{Deref, DerefMut};

use super::{Pipeline, Unary};

/// A type whose values can start their own composition chain.
///
/// `value.pipe(f)` is `f(value)`, and `value.pipe_all((f, g, h))` is
/// equivalent to [`pipe(value, (f, g, h))`](super::pipe()). Because every
/// call returns a plain value, chains compose associatively:
/// `value.pipe(f).pipe(g) == value.pipe_all((f, g))`.
///
/// Both methods are provided; opting in only requires an empty impl.
/// Use [`pipeable`] to give the capability to a value of a type that does
/// not implement the trait.
///
/// # Examples
///
/// ```
/// use typekit::pipe::Pipeable;
///
/// #[derive(Debug, PartialEq)]
/// struct Counter(u32);
///
/// impl Pipeable for Counter {}
///
/// let bump = |counter: Counter| Counter(counter.0 + 1);
///
/// assert_eq!(Counter(1).pipe(bump), Counter(2));
/// assert_eq!(Counter(1).pipe_all((bump, bump, bump)), Counter(4));
/// ```
pub trait Pipeable: Sized {
    /// Applies a single unary function to `self`.
    #[inline]
    fn pipe<F>(self, function: F) -> F::Output
    where
        F: Unary<Self>,
    {
        function.apply_once(self)
    }

    /// Runs a whole pipeline with `self` as the seed.
    #[inline]
    fn pipe_all<P>(self, pipeline: P) -> P::Output
    where
        P: Pipeline<Self>,
    {
        pipeline.run(self)
    }
}

/// A value augmented with the [`Pipeable`] capability.
///
/// Created by [`pipeable`]. Dereferences to the wrapped value, so its fields
/// and methods stay reachable.
///
/// # Examples
///
/// ```
/// use typekit::pipe::{Pipeable, Piped, pipeable};
///
/// struct Point { x: i32 }
///
/// fn create_point(x: i32) -> Piped<Point> {
///     pipeable(Point { x })
/// }
///
/// let shift = |point: Piped<Point>| create_point(point.x + 10);
///
/// assert_eq!(create_point(1).pipe(shift).x, 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Piped<T>(T);

impl<T> Piped<T> {
    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Pipeable for Piped<T> {}

impl<T> Deref for Piped<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Piped<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> AsRef<T> for Piped<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Piped<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

/// Wraps `value` so it gains a `.pipe(...)` method.
///
/// The augmentation applies to the returned wrapper only; other values of
/// the same type are not affected.
#[inline]
pub const fn pipeable<T>(value: T) -> Piped<T> {
    Piped(value)
}
