#[test]
fn public_initialiser_ui() {
    let t = trybuild::TestCases::new();

    // Marked public structs gain a working `new()`
    t.pass("tests/ui/pass/*.rs");

    // Ineligible or non-public declarations are rejected at the attribute
    t.compile_fail("tests/ui/fail/*.rs");
}
