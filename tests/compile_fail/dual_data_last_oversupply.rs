//! Test that a continuation does not accept auxiliary arguments again.

use typekit::dual::{Invoke, dual3};

fn main() {
    let clamp = dual3(|value: i32, low: i32, high: i32| value.max(low).min(high));
    // the curried form binds exactly the two auxiliaries
    let _ = clamp.invoke((0, 10, 20, 30));
}
