//! # typekit
//!
//! A small generic-combinator toolkit for Rust.
//!
//! ## Overview
//!
//! - **Pipe**: thread a value through a left-to-right chain of unary
//!   functions with [`pipe!`], [`pipe::pipe`] or the [`pipe::Pipeable`] trait
//! - **Dual**: wrap a fixed-arity function so it can be called data-first
//!   (all arguments at once) or data-last (auxiliary arguments first,
//!   returning a continuation that awaits the data value)
//! - **Either**: a two-variant sum type with predicates, extractors, and
//!   structure-preserving maps, each available in both calling styles
//! - **Result**: the same algebra under `ok`/`err` names
//!
//! ## Feature Flags
//!
//! - `pipe`: `pipe!`, `Pipeable`, `Pipeline`
//! - `dual`: the dual dispatcher (`Dual`, `DataLast`)
//! - `either`: `Either`, `Tag` and the `error` module
//! - `result`: `Result` alias and renamed operations
//! - `tracing`: trace events on wrong-variant access
//! - `serde`: `Serialize`/`Deserialize` for `Either` and `Tag`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use typekit::either::{self, data_last};
//! use typekit::prelude::*;
//!
//! let value: Either<String, i32> = either::right(20);
//!
//! let doubled = value.pipe_all((
//!     data_last::map_right(|n: i32| n * 2),
//!     data_last::unwrap_right_or(0),
//! ));
//! assert_eq!(doubled, 40);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the types and traits of every enabled module. Free functions
/// stay in their modules since `either` and `result` share several names.
///
/// # Usage
///
/// ```rust
/// use typekit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "pipe")]
    pub use crate::pipe::{Pipeable, Pipeline, Piped, Unary, pipeable};

    #[cfg(feature = "dual")]
    pub use crate::dual::{Body, DataLast, Dual, Invoke, dual, dual2, dual3, dual4, dual5, dual6};

    #[cfg(feature = "either")]
    pub use crate::either::{Either, Handlers, Tag};

    #[cfg(feature = "either")]
    pub use crate::error::WrongVariantAccess;
}

#[cfg(feature = "pipe")]
pub mod pipe;

#[cfg(feature = "dual")]
pub mod dual;

#[cfg(feature = "either")]
pub mod either;

#[cfg(feature = "either")]
pub mod error;

#[cfg(feature = "result")]
pub mod result;
