//! Result - the [`Either`] algebra under success/failure names.
//!
//! `Result<T, E>` is `Either<E, T>`: `ok` is `right`, `err` is `left`. Every
//! function here is a renamed re-export of the matching function in
//! [`either`](crate::either), so the two behave identically.
//!
//! | `result` | `either` |
//! |---|---|
//! | `ok` / `err` | `right` / `left` |
//! | `is_ok` / `is_err` | `is_right` / `is_left` |
//! | `unwrap` / `unwrap_or` | `unwrap_right` / `unwrap_right_or` |
//! | `unwrap_err` / `unwrap_err_or` | `unwrap_left` / `unwrap_left_or` |
//! | `map` / `map_err` | `map_right` / `map_left` |
//! | `flat_map` / `flat_map_err` | `flat_map_right` / `flat_map_left` |
//! | `flatten`, `bi_map`, `bi_flat_map` | same names |
//!
//! This `Result` is unrelated to [`std::result::Result`]; the two convert
//! into each other through `From`.
//!
//! # Examples
//!
//! ```rust
//! use typekit::result::{self, Result, data_last};
//! use typekit::pipe::Pipeable;
//!
//! fn parse(text: &str) -> Result<i32, String> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total = parse("20").pipe_all((
//!     data_last::map(|value: i32| value + 1),
//!     data_last::unwrap_or(0),
//! ));
//! assert_eq!(total, 21);
//! assert!(result::is_err(&parse("twenty")));
//! ```

use crate::either::Either;

pub use crate::either::{
    Handlers, bi_flat_map, bi_map, flat_map_left as flat_map_err, flat_map_right as flat_map,
    flatten, is_left as is_err, is_right as is_ok, left as err, map_left as map_err,
    map_right as map, right as ok, try_unwrap_left as try_unwrap_err,
    try_unwrap_right as try_unwrap, unwrap_left as unwrap_err, unwrap_left_or as unwrap_err_or,
    unwrap_right as unwrap, unwrap_right_or as unwrap_or,
};

/// A success value `T` or a failure `E`; the same type as `Either<E, T>`.
pub type Result<T, E> = Either<E, T>;

/// Data-last forms of the `Result` operations.
pub mod data_last {
    pub use crate::either::data_last::{
        bi_flat_map, bi_map, flat_map_left as flat_map_err, flat_map_right as flat_map,
        map_left as map_err, map_right as map, unwrap_left_or as unwrap_err_or,
        unwrap_right_or as unwrap_or,
    };
}
