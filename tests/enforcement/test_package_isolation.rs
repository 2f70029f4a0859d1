// Tests that helpers are only checked against their own package

use super::common::{analyze_text, create_project};

#[test]
/// Calls from a sibling package do not count.
fn test_sibling_package_calls_are_ignored() {
    let (_dir, root) = create_project(&[
        ("a/a.go", "package a\n\nfunc _h() {}\n\nfunc A() { _h() }\n"),
        ("b/b.go", "package b\n\nfunc B() { _h(); _h(); _h() }\n"),
    ]);
    assert_eq!(analyze_text(&root), "package: a\nOK\n");
}

#[test]
/// Subdirectories are packages of their own.
fn test_nested_directory_is_separate_package() {
    let (_dir, root) = create_project(&[
        ("a/a.go", "package a\n\nfunc _h() {}\n"),
        ("a/inner/i.go", "package inner\n\nfunc I() { _h() }\n"),
    ]);
    assert_eq!(
        analyze_text(&root),
        "package: a\n_h(...)            actual calls:   0 expected calls:   1\n"
    );
}

#[test]
/// A hidden package never appears, whatever it contains.
fn test_hidden_package_with_mismatches_is_skipped() {
    let (_dir, root) = create_project(&[
        (".cache/c.go", "package cache\n\nfunc _c_9() {}\n"),
        ("v/.old/o.go", "package old\n\nfunc _o_9() {}\n"),
    ]);
    assert_eq!(analyze_text(&root), "");
}
