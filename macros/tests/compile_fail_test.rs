//! Compile-fail tests for #[derive(Action)] diagnostics

#[test]
fn test_derive_action_errors() {
    let cases = trybuild::TestCases::new();
    cases.compile_fail("tests/ui/*.rs");
}
