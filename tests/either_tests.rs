//! Unit tests for the Either<L, R> algebra.
//!
//! Each transformation is exercised in both calling styles:
//! - data-first: `either::map_left(value, f)`
//! - data-last: `data_last::map_left(f).apply(value)`

#![cfg(feature = "either")]

use typekit::either::{self, Either, Handlers, Tag, data_last};
use typekit::error::WrongVariantAccess;
use rstest::{fixture, rstest};

#[fixture]
fn left_value() -> Either<i32, String> {
    either::left(1)
}

#[fixture]
fn right_value() -> Either<i32, String> {
    either::right("value".to_string())
}

fn add_one(value: i32) -> i32 {
    value + 1
}

fn add_bang(value: String) -> String {
    format!("{value}!")
}

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn left_has_left_tag(left_value: Either<i32, String>) {
    assert_eq!(left_value.tag(), Tag::Left);
    assert_eq!(left_value.tag().as_str(), "left");
}

#[rstest]
fn right_has_right_tag(right_value: Either<i32, String>) {
    assert_eq!(right_value.tag(), Tag::Right);
    assert_eq!(right_value.tag().as_str(), "right");
}

#[rstest]
fn is_left_predicate(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    assert!(either::is_left(&left_value));
    assert!(!either::is_left(&right_value));
}

#[rstest]
fn is_right_predicate(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    assert!(!either::is_right(&left_value));
    assert!(either::is_right(&right_value));
}

// =============================================================================
// Unwrap
// =============================================================================

#[rstest]
fn unwrap_left_returns_payload(left_value: Either<i32, String>) {
    assert_eq!(either::unwrap_left(left_value), 1);
}

#[rstest]
#[should_panic(expected = "called `unwrap_left` on a `right` value")]
fn unwrap_left_panics_on_right(right_value: Either<i32, String>) {
    let _ = either::unwrap_left(right_value);
}

#[rstest]
fn unwrap_right_returns_payload(right_value: Either<i32, String>) {
    assert_eq!(either::unwrap_right(right_value), "value");
}

#[rstest]
#[should_panic(expected = "called `unwrap_right` on a `left` value")]
fn unwrap_right_panics_on_left(left_value: Either<i32, String>) {
    let _ = either::unwrap_right(left_value);
}

#[rstest]
fn try_unwrap_reports_wrong_variant(
    left_value: Either<i32, String>,
    right_value: Either<i32, String>,
) {
    assert_eq!(
        either::try_unwrap_left(right_value),
        Err(WrongVariantAccess::new(Tag::Left, Tag::Right))
    );
    assert_eq!(
        either::try_unwrap_right(left_value),
        Err(WrongVariantAccess::new(Tag::Right, Tag::Left))
    );
}

#[rstest]
fn try_unwrap_propagates_with_question_mark() {
    fn total(
        first: Either<i32, String>,
        second: Either<i32, String>,
    ) -> Result<i32, WrongVariantAccess> {
        Ok(first.try_unwrap_left()? + second.try_unwrap_left()?)
    }

    assert_eq!(total(either::left(1), either::left(2)), Ok(3));
    assert!(total(either::left(1), either::right("no".to_string())).is_err());
}

#[rstest]
fn unwrap_left_or_data_first(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    assert_eq!(either::unwrap_left_or(left_value, 2), 1);
    assert_eq!(either::unwrap_left_or(right_value, 2), 2);
}

#[rstest]
fn unwrap_left_or_data_last(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    let or_two = data_last::unwrap_left_or(2);
    assert_eq!(or_two.apply(left_value), 1);
    assert_eq!(or_two.apply(right_value), 2);
}

#[rstest]
fn unwrap_right_or_data_first(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    assert_eq!(either::unwrap_right_or(left_value, "default".to_string()), "default");
    assert_eq!(either::unwrap_right_or(right_value, "default".to_string()), "value");
}

#[rstest]
fn unwrap_right_or_data_last(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    let or_default = data_last::unwrap_right_or("default".to_string());
    assert_eq!(or_default.apply(left_value), "default");
    assert_eq!(or_default.apply(right_value), "value");
}

// =============================================================================
// Flatten
// =============================================================================

#[rstest]
fn flatten_left_is_unchanged() {
    let value: Either<i32, Either<i32, String>> = either::left(1);
    assert_eq!(either::flatten(value), either::left(1));
}

#[rstest]
fn flatten_right_yields_inner_right() {
    let value: Either<i32, Either<i32, String>> = either::right(either::right("value".to_string()));
    assert_eq!(either::flatten(value), either::right("value".to_string()));
}

#[rstest]
fn flatten_right_yields_inner_left() {
    let value: Either<i32, Either<i32, String>> = either::right(either::left(1));
    assert_eq!(either::flatten(value), either::left(1));
}

type Nested = Either<Either<i32, String>, Either<i32, String>>;

#[rstest]
#[case(either::left(either::left(1)), either::left(1))]
#[case(either::left(either::right("value".to_string())), either::right("value".to_string()))]
#[case(either::right(either::right("value".to_string())), either::right("value".to_string()))]
fn flatten2_removes_one_level(#[case] nested: Nested, #[case] expected: Either<i32, String>) {
    assert_eq!(either::flatten2(nested), expected);
}

#[rstest]
fn flatten2_removes_only_one_level() {
    let inner: Either<i32, Either<i32, String>> = either::right(either::left(7));
    let nested: Either<
        Either<i32, Either<i32, String>>,
        Either<i32, Either<i32, String>>,
    > = either::left(inner.clone());
    assert_eq!(either::flatten2(nested), inner);
}

// =============================================================================
// Map
// =============================================================================

#[rstest]
fn map_left_data_first(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    assert_eq!(either::map_left(left_value, add_one), either::left(2));
    assert_eq!(either::map_left(right_value.clone(), add_one), right_value);
}

#[rstest]
fn map_left_data_last(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    let mapper = data_last::map_left(add_one);
    assert_eq!(mapper.apply(left_value), either::left(2));
    assert_eq!(mapper.apply(right_value.clone()), right_value);
}

#[rstest]
fn map_right_data_first(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    assert_eq!(either::map_right(left_value.clone(), add_bang), left_value);
    assert_eq!(either::map_right(right_value, add_bang), either::right("value!".to_string()));
}

#[rstest]
fn map_right_data_last(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    let mapper = data_last::map_right(add_bang);
    assert_eq!(mapper.apply(left_value.clone()), left_value);
    assert_eq!(mapper.apply(right_value), either::right("value!".to_string()));
}

#[rstest]
fn map_right_moves_left_payload_without_copying() {
    let payload = Box::new(1);
    let address: *const i32 = &*payload;

    let value: Either<Box<i32>, String> = either::left(payload);
    let mapped = either::map_right(value, add_bang);

    let returned = mapped.unwrap_left();
    assert!(std::ptr::eq(&*returned, address));
}

#[rstest]
fn map_left_moves_right_payload_without_copying() {
    let payload = "value".to_string();
    let address = payload.as_ptr();

    let value: Either<i32, String> = either::right(payload);
    let mapped = data_last::map_left(add_one).apply_once(value);

    let returned = mapped.unwrap_right();
    assert_eq!(returned.as_ptr(), address);
}

#[rstest]
fn map_left_does_not_call_function_on_right(right_value: Either<i32, String>) {
    let mapped = either::map_left(right_value, |_: i32| -> i32 { unreachable!() });
    assert!(mapped.is_right());
}

// =============================================================================
// BiMap
// =============================================================================

#[rstest]
fn bi_map_data_first(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    let handlers = Handlers {
        on_left: add_one,
        on_right: add_bang,
    };

    assert_eq!(either::bi_map(left_value, handlers), either::left(2));
    assert_eq!(either::bi_map(right_value, handlers), either::right("value!".to_string()));
}

#[rstest]
fn bi_map_data_last(left_value: Either<i32, String>, right_value: Either<i32, String>) {
    let mapper = data_last::bi_map(Handlers {
        on_left: |value: i32| value + 1,
        on_right: |value: String| format!("{value}!"),
    });

    assert_eq!(mapper.apply(left_value), either::left(2));
    assert_eq!(mapper.apply(right_value), either::right("value!".to_string()));
}

#[rstest]
fn bi_map_can_change_both_payload_types(left_value: Either<i32, String>) {
    let mapped: Either<String, usize> = left_value.bi_map(Handlers {
        on_left: |value: i32| value.to_string(),
        on_right: |value: String| value.len(),
    });
    assert_eq!(mapped, either::left("1".to_string()));
}

// =============================================================================
// FlatMap
// =============================================================================

fn double_left(value: i32) -> Either<i32, String> {
    either::left(value * 2)
}

fn bang_right(value: String) -> Either<i32, String> {
    either::right(format!("{value}!"))
}

#[rstest]
fn flat_map_left_data_first(right_value: Either<i32, String>) {
    let left_value: Either<i32, String> = either::left(2);

    assert_eq!(either::flat_map_left(left_value, double_left), either::left(4));
    assert_eq!(either::flat_map_left(right_value.clone(), double_left), right_value);
}

#[rstest]
fn flat_map_left_data_last(right_value: Either<i32, String>) {
    let left_value: Either<i32, String> = either::left(2);
    let mapper = data_last::flat_map_left(double_left);

    assert_eq!(mapper.apply(left_value), either::left(4));
    assert_eq!(mapper.apply(right_value.clone()), right_value);
}

#[rstest]
fn flat_map_left_moves_right_payload_without_copying() {
    let payload = "value".to_string();
    let address = payload.as_ptr();

    let value: Either<i32, String> = either::right(payload);
    let mapped = data_last::flat_map_left(double_left).apply_once(value);

    let returned = mapped.unwrap_right();
    assert_eq!(returned.as_ptr(), address);
}

#[rstest]
fn flat_map_left_may_switch_variant() {
    let value: Either<i32, String> = either::left(-1);
    let recovered = either::flat_map_left(value, |_: i32| bang_right("recovered".to_string()));
    assert_eq!(recovered, either::right("recovered!".to_string()));
}

#[rstest]
fn flat_map_right_data_first(right_value: Either<i32, String>) {
    let left_value: Either<i32, String> = either::left(2);

    assert_eq!(either::flat_map_right(left_value.clone(), bang_right), left_value);
    assert_eq!(either::flat_map_right(right_value, bang_right), either::right("value!".to_string()));
}

#[rstest]
fn flat_map_right_data_last(right_value: Either<i32, String>) {
    let left_value: Either<i32, String> = either::left(2);
    let mapper = data_last::flat_map_right(bang_right);

    assert_eq!(mapper.apply(left_value.clone()), left_value);
    assert_eq!(mapper.apply(right_value), either::right("value!".to_string()));
}

#[rstest]
fn flat_map_right_moves_left_payload_without_copying() {
    let payload = Box::new(5);
    let address: *const i32 = &*payload;

    let value: Either<Box<i32>, String> = either::left(payload);
    let mapped = value.flat_map_right(|text: String| either::right(text.len()));

    assert!(std::ptr::eq(&*mapped.unwrap_left(), address));
}

// =============================================================================
// BiFlatMap
// =============================================================================

#[rstest]
fn bi_flat_map_data_first(right_value: Either<i32, String>) {
    let left_value: Either<i32, String> = either::left(2);
    let handlers = Handlers {
        on_left: double_left,
        on_right: bang_right,
    };

    assert_eq!(either::bi_flat_map(left_value, handlers), either::left(4));
    assert_eq!(either::bi_flat_map(right_value, handlers), either::right("value!".to_string()));
}

#[rstest]
fn bi_flat_map_data_last(right_value: Either<i32, String>) {
    let left_value: Either<i32, String> = either::left(2);
    let mapper = data_last::bi_flat_map(Handlers {
        on_left: double_left,
        on_right: bang_right,
    });

    assert_eq!(mapper.apply(left_value), either::left(4));
    assert_eq!(mapper.apply(right_value), either::right("value!".to_string()));
}

#[rstest]
fn bi_flat_map_result_tag_may_differ(left_value: Either<i32, String>) {
    let swapped: Either<String, i32> = either::bi_flat_map(
        left_value,
        Handlers {
            on_left: |value: i32| either::right(value),
            on_right: |value: String| either::left(value),
        },
    );
    assert_eq!(swapped, either::right(1));
}
