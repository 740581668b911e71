//! Unary functions and tuple pipelines.

/// A function of one argument that is applied at most once.
///
/// This is the seam between the pipe protocol and the things that can be
/// piped into. Every `FnOnce(T) -> U` implements it, as do the data-last
/// continuations produced by the [`dual`](crate::dual) dispatcher.
///
/// Closures passed where a `Unary` is expected need their parameter type
/// written out (`|value: i32| value + 1`), since the compiler does not
/// infer closure signatures through this trait.
///
/// # Examples
///
/// ```
/// use typekit::pipe::Unary;
///
/// let length = |text: String| text.len();
/// assert_eq!(length.apply_once("hello".to_string()), 5);
/// ```
pub trait Unary<T> {
    /// The type produced by applying the function.
    type Output;

    /// Applies the function to `input`, consuming it.
    fn apply_once(self, input: T) -> Self::Output;
}

impl<T, U, F> Unary<T> for F
where
    F: FnOnce(T) -> U,
{
    type Output = U;

    #[inline]
    fn apply_once(self, input: T) -> U {
        self(input)
    }
}

/// A sequence of unary functions applied from left to right.
///
/// Implemented for `()` (the empty pipeline) and for tuples of up to twelve
/// [`Unary`] functions where the output of each element is the input of the
/// next.
///
/// # Examples
///
/// ```
/// use typekit::pipe::Pipeline;
///
/// let pipeline = (|value: i32| value * 10, |value: i32| value.to_string());
/// assert_eq!(pipeline.run(4), "40");
/// ```
pub trait Pipeline<Seed> {
    /// The type produced by the last function of the pipeline.
    type Output;

    /// Runs every function in order, starting from `seed`.
    fn run(self, seed: Seed) -> Self::Output;
}

impl<Seed> Pipeline<Seed> for () {
    type Output = Seed;

    #[inline]
    fn run(self, seed: Seed) -> Seed {
        seed
    }
}

// Each tuple delegates to its tail once the head has been applied.
macro_rules! impl_pipeline {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<Seed, $head, $($tail,)*> Pipeline<Seed> for ($head, $($tail,)*)
        where
            $head: Unary<Seed>,
            ($($tail,)*): Pipeline<<$head as Unary<Seed>>::Output>,
        {
            type Output = <($($tail,)*) as Pipeline<<$head as Unary<Seed>>::Output>>::Output;

            #[inline]
            #[allow(non_snake_case)]
            fn run(self, seed: Seed) -> Self::Output {
                let ($head, $($tail,)*) = self;
                ($($tail,)*).run($head.apply_once(seed))
            }
        }

        impl_pipeline!($($tail),*);
    };
}

impl_pipeline!(F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12);

/// Applies `pipeline` to `seed`, left to right.
///
/// `pipe(x, ())` returns `x`; `pipe(x, (f, g, h))` returns `h(g(f(x)))`.
/// See [`pipe!`](crate::pipe!) for the variadic form.
///
/// # Examples
///
/// ```
/// use typekit::pipe::pipe;
///
/// fn to_string(value: i32) -> String { value.to_string() }
/// fn length(text: String) -> usize { text.len() }
///
/// assert_eq!(pipe(12345, (to_string, length)), 5);
/// ```
#[inline]
pub fn pipe<Seed, P>(seed: Seed, pipeline: P) -> P::Output
where
    P: Pipeline<Seed>,
{
    pipeline.run(seed)
}
