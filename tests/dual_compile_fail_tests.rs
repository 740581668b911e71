//! Compile-fail tests for the dual dispatcher.
//!
//! These tests verify that supplying more arguments than a dual
//! function's arity is rejected at compile time.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#![cfg(feature = "dual")]

#[test]
fn dual_compile_fail_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.compile_fail("tests/compile_fail/dual_*.rs");
}
