//! Test that supplying more arguments than the arity produces a compile error.

use typekit::dual::{Invoke, dual2};

fn main() {
    // dual2 accepts two arguments eagerly or one curried, never three
    let _ = dual2(|a: i32, b: i32| a + b).invoke((1, 2, 3));
}
