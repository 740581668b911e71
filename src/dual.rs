//! Dual data-first / data-last dispatch.
//!
//! This module turns a fixed-arity function into one usable in two calling
//! conventions:
//!
//! - **Data-first**: every argument is supplied at once, primary value
//!   leading, and the body runs immediately.
//! - **Data-last**: the auxiliary arguments are supplied first, producing a
//!   [`DataLast`] continuation that awaits the primary value. This is the
//!   shape pipelines want.
//!
//! The primary value is always the *first* parameter of the body. The
//! auxiliary arguments are carried as a tuple (`(A1,)`, `(A1, A2)`, ...),
//! which fixes the arity of a [`Dual`] at `aux.len() + 1`.
//!
//! # Calling Conventions
//!
//! Two named entry points always exist: [`Dual::data_first`] and
//! [`Dual::data_last`]. [`Invoke`] additionally dispatches purely on how many
//! arguments are supplied: a tuple of `arity` elements evaluates eagerly, a
//! tuple of `arity - 1` elements curries. Supplying more arguments than the
//! arity is rejected at compile time.
//!
//! # Examples
//!
//! ```
//! use typekit::dual::{dual2, Invoke};
//!
//! let subtract = dual2(|minuend: i32, subtrahend: i32| minuend - subtrahend);
//!
//! // data-first
//! assert_eq!(subtract.invoke((10, 3)), 7);
//!
//! // data-last: the auxiliary argument is bound, the primary comes later
//! let minus_three = subtract.invoke((3,));
//! assert_eq!(minus_three.apply(10), 7);
//! ```
//!
//! # Laws
//!
//! - **Convention agreement**: `op.data_first(a, aux) == op.data_last(aux).apply(a)`
//! - **Reuse**: a `DataLast` may be applied any number of times when its
//!   auxiliary tuple is [`Clone`]

use std::fmt;
use std::marker::PhantomData;

use crate::pipe::Unary;

/// A function whose first parameter is the primary value `P` and whose
/// remaining parameters are packed in the tuple `Aux`.
///
/// Implemented for every `Fn(P, A1, ..., An) -> R` with `n` from 1 to 5.
pub trait Body<P, Aux> {
    /// The body's return type.
    type Output;

    /// Number of auxiliary arguments.
    const AUXILIARY: usize;

    /// Calls the body with the primary value and the unpacked auxiliary tuple.
    fn call_with(&self, primary: P, aux: Aux) -> Self::Output;
}

macro_rules! impl_body {
    ($count:expr; $($aux:ident $binding:ident),+) => {
        impl<Function, P, $($aux,)+ R> Body<P, ($($aux,)+)> for Function
        where
            Function: Fn(P, $($aux),+) -> R,
        {
            type Output = R;

            const AUXILIARY: usize = $count;

            #[inline]
            fn call_with(&self, primary: P, ($($binding,)+): ($($aux,)+)) -> R {
                self(primary, $($binding),+)
            }
        }
    };
}

impl_body!(1; A1 a1);
impl_body!(2; A1 a1, A2 a2);
impl_body!(3; A1 a1, A2 a2, A3 a3);
impl_body!(4; A1 a1, A2 a2, A3 a3, A4 a4);
impl_body!(5; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);

/// A function usable both data-first and data-last.
///
/// Created with [`dual`] or one of the arity-specific constructors
/// ([`dual2`] through [`dual6`]), which let the compiler infer `P` and `Aux`
/// from the body's signature.
pub struct Dual<F, P, Aux> {
    body: F,
    marker: PhantomData<fn(P, Aux)>,
}

impl<F, P, Aux> Dual<F, P, Aux> {
    /// Wraps `body` without checking its signature.
    ///
    /// Prefer [`dual`], which requires `F: Body<P, Aux>` up front.
    #[inline]
    pub const fn new(body: F) -> Self {
        Self {
            body,
            marker: PhantomData,
        }
    }
}

impl<F, P, Aux> Dual<F, P, Aux>
where
    F: Body<P, Aux>,
{
    /// Total number of parameters of the body, primary value included.
    pub const ARITY: usize = F::AUXILIARY + 1;

    /// Evaluates the body immediately.
    #[inline]
    pub fn data_first(&self, primary: P, aux: Aux) -> F::Output {
        self.body.call_with(primary, aux)
    }

    /// Binds the auxiliary arguments, returning a continuation that awaits
    /// the primary value.
    #[inline]
    pub fn data_last(&self, aux: Aux) -> DataLast<F, P, Aux>
    where
        F: Clone,
    {
        DataLast::new(self.body.clone(), aux)
    }

    /// Consuming form of [`Dual::data_last`]; does not require `F: Clone`.
    #[inline]
    pub fn into_data_last(self, aux: Aux) -> DataLast<F, P, Aux> {
        DataLast::new(self.body, aux)
    }
}

impl<F: Clone, P, Aux> Clone for Dual<F, P, Aux> {
    fn clone(&self) -> Self {
        Self::new(self.body.clone())
    }
}

impl<F: Copy, P, Aux> Copy for Dual<F, P, Aux> {}

impl<F, P, Aux> fmt::Debug for Dual<F, P, Aux> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Dual").finish_non_exhaustive()
    }
}

/// A data-last continuation: a body with its auxiliary arguments bound,
/// awaiting the primary value.
///
/// Implements [`Unary<P>`], so it can be handed to
/// [`pipe`](crate::pipe::pipe()), [`pipe!`](crate::pipe!) or
/// [`Pipeable::pipe`](crate::pipe::Pipeable::pipe) directly. A shared
/// reference is also a `Unary<P>` when `Aux: Clone`, which keeps the
/// continuation available for reuse.
pub struct DataLast<F, P, Aux> {
    body: F,
    aux: Aux,
    marker: PhantomData<fn(P)>,
}

impl<F, P, Aux> DataLast<F, P, Aux> {
    #[inline]
    const fn new(body: F, aux: Aux) -> Self {
        Self {
            body,
            aux,
            marker: PhantomData,
        }
    }

    /// Returns the bound auxiliary arguments.
    #[inline]
    pub const fn aux(&self) -> &Aux {
        &self.aux
    }
}

impl<F, P, Aux> DataLast<F, P, Aux>
where
    F: Body<P, Aux>,
{
    /// Total number of parameters of the body, primary value included.
    pub const ARITY: usize = F::AUXILIARY + 1;

    /// Supplies the primary value, consuming the continuation.
    #[inline]
    pub fn apply_once(self, primary: P) -> F::Output {
        self.body.call_with(primary, self.aux)
    }

    /// Supplies the primary value, cloning the bound auxiliary arguments.
    #[inline]
    pub fn apply(&self, primary: P) -> F::Output
    where
        Aux: Clone,
    {
        self.body.call_with(primary, self.aux.clone())
    }

    /// Converts the continuation into a plain closure.
    #[inline]
    pub fn into_fn(self) -> impl Fn(P) -> F::Output
    where
        Aux: Clone,
    {
        move |primary| self.apply(primary)
    }
}

impl<F, P, Aux> Unary<P> for DataLast<F, P, Aux>
where
    F: Body<P, Aux>,
{
    type Output = F::Output;

    #[inline]
    fn apply_once(self, input: P) -> F::Output {
        Self::apply_once(self, input)
    }
}

impl<F, P, Aux> Unary<P> for &DataLast<F, P, Aux>
where
    F: Body<P, Aux>,
    Aux: Clone,
{
    type Output = F::Output;

    #[inline]
    fn apply_once(self, input: P) -> F::Output {
        self.apply(input)
    }
}

impl<F: Clone, P, Aux: Clone> Clone for DataLast<F, P, Aux> {
    fn clone(&self) -> Self {
        Self::new(self.body.clone(), self.aux.clone())
    }
}

impl<F, P, Aux: fmt::Debug> fmt::Debug for DataLast<F, P, Aux> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DataLast")
            .field("aux", &self.aux)
            .finish_non_exhaustive()
    }
}

/// A [`DataLast`] built from a function pointer of arity 2.
pub type DataLast2<P, A1, Output> = DataLast<fn(P, A1) -> Output, P, (A1,)>;

/// Dispatch on the number of supplied arguments.
///
/// For a `Dual<F, P, (A1, ..., An)>`:
///
/// - `invoke((p, a1, ..., an))` runs the body and returns its output
/// - `invoke((a1, ..., an))` returns a [`DataLast`] awaiting `p`
///
/// Only the tuple length selects the branch; the element types are never
/// inspected.
///
/// # Examples
///
/// ```
/// use typekit::dual::{dual3, Invoke};
///
/// let clamp = dual3(|value: i32, low: i32, high: i32| value.max(low).min(high));
///
/// assert_eq!(clamp.invoke((15, 0, 10)), 10);
/// assert_eq!(clamp.invoke((0, 10)).apply(-4), 0);
/// ```
pub trait Invoke<Args> {
    /// What the call produces: the body's output or a continuation.
    type Output;

    /// Calls with the supplied argument tuple.
    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
    ($($aux:ident $binding:ident),+) => {
        impl<F, P, $($aux,)+> Invoke<(P, $($aux,)+)> for Dual<F, P, ($($aux,)+)>
        where
            F: Body<P, ($($aux,)+)>,
        {
            type Output = F::Output;

            #[inline]
            fn invoke(&self, (primary, $($binding,)+): (P, $($aux,)+)) -> F::Output {
                self.data_first(primary, ($($binding,)+))
            }
        }

        impl<F, P, $($aux,)+> Invoke<($($aux,)+)> for Dual<F, P, ($($aux,)+)>
        where
            F: Body<P, ($($aux,)+)> + Clone,
        {
            type Output = DataLast<F, P, ($($aux,)+)>;

            #[inline]
            fn invoke(&self, aux: ($($aux,)+)) -> Self::Output {
                self.data_last(aux)
            }
        }
    };
}

impl_invoke!(A1 a1);
impl_invoke!(A1 a1, A2 a2);
impl_invoke!(A1 a1, A2 a2, A3 a3);
impl_invoke!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_invoke!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);

/// Wraps a body of any supported arity.
///
/// The arity is fixed by the `Aux` tuple. When the compiler cannot pick it
/// from the body alone, name it explicitly or use [`dual2`] through
/// [`dual6`].
///
/// # Examples
///
/// ```
/// use typekit::dual::dual;
///
/// fn between(value: i32, low: i32, high: i32, inclusive: bool) -> bool {
///     if inclusive { low <= value && value <= high } else { low < value && value < high }
/// }
///
/// let op = dual::<i32, (i32, i32, bool), _>(between);
/// assert!(op.data_first(10, (0, 10, true)));
/// assert!(!op.data_last((0, 10, false)).apply(10));
/// ```
#[inline]
pub fn dual<P, Aux, F>(body: F) -> Dual<F, P, Aux>
where
    F: Body<P, Aux>,
{
    Dual::new(body)
}

macro_rules! define_dual_constructor {
    ($(#[$attribute:meta])* $name:ident; $($aux:ident),+) => {
        $(#[$attribute])*
        #[inline]
        pub fn $name<P, $($aux,)+ Output, F>(body: F) -> Dual<F, P, ($($aux,)+)>
        where
            F: Fn(P, $($aux),+) -> Output,
        {
            Dual::new(body)
        }
    };
}

define_dual_constructor!(
    /// Wraps a body of arity 2: one primary value, one auxiliary argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use typekit::dual::dual2;
    ///
    /// let repeat = dual2(|text: String, times: usize| text.repeat(times));
    ///
    /// assert_eq!(repeat.data_first("ab".to_string(), (3,)), "ababab");
    /// assert_eq!(repeat.data_last((2,)).apply("ab".to_string()), "abab");
    /// ```
    dual2; A1
);
define_dual_constructor!(
    /// Wraps a body of arity 3: one primary value, two auxiliary arguments.
    dual3; A1, A2
);
define_dual_constructor!(
    /// Wraps a body of arity 4.
    dual4; A1, A2, A3
);
define_dual_constructor!(
    /// Wraps a body of arity 5.
    dual5; A1, A2, A3, A4
);
define_dual_constructor!(
    /// Wraps a body of arity 6.
    dual6; A1, A2, A3, A4, A5
);
