//! Left-to-right composition of unary functions.
//!
//! This module provides the composition primitive the rest of the crate
//! builds on. A value (the *seed*) is threaded through a sequence of unary
//! functions, each receiving the previous result.
//!
//! # Overview
//!
//! - [`Unary`]: anything that can be applied once to a single argument.
//!   Every `FnOnce(T) -> U` closure is a `Unary<T>`, and so is a
//!   [`DataLast`](crate::dual::DataLast) continuation.
//! - [`Pipeline`]: a tuple of unary functions applied left to right.
//!   `()` is the empty pipeline.
//! - [`pipe()`]: applies a [`Pipeline`] to a seed.
//! - [`pipe!`](crate::pipe!): the same thing with variadic syntax.
//! - [`Pipeable`]: a capability trait adding `.pipe(...)` and
//!   `.pipe_all(...)` methods to a type.
//! - [`pipeable`]: wraps a plain value in [`Piped`] so it gains the
//!   capability.
//!
//! # Examples
//!
//! ```
//! use typekit::pipe::pipe;
//!
//! let add_one = |value: i32| value + 1;
//! let double = |value: i32| value * 2;
//!
//! // pipe(x, (f, g)) = g(f(x))
//! assert_eq!(pipe(5, (add_one, double)), 12);
//!
//! // the empty pipeline returns the seed unchanged
//! assert_eq!(pipe(5, ()), 5);
//! ```
//!
//! # Laws
//!
//! - **Identity**: `pipe(x, ()) == x`
//! - **Sequencing**: `pipe(x, (f, g)) == g(f(x))`
//! - **Associativity**: `pipe(pipe(x, (f,)), (g,)) == pipe(x, (f, g))`

mod pipe_macro;
mod pipeable;
mod pipeline;

pub use pipeable::{Pipeable, Piped, pipeable};
pub use pipeline::{Pipeline, Unary, pipe};

pub use crate::pipe;
