// Tests for `glint helpers` / `glint hp`

use super::common::{copy_fixture, create_project, run_glint};

const DEMO_REPORT: &str = "\
package: app
_retry_3(...)      actual calls:   2 expected calls:   3
package: clean
OK
package: strings
_describe(...)     actual calls:   3 expected calls:   1
";

#[test]
/// The fixture tree produces the expected text report on stdout.
fn test_helpers_reports_fixture_tree() {
    let (_dir, root) = copy_fixture("helpers_demo");
    let output = run_glint(&root, &["helpers"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), DEMO_REPORT);
}

#[test]
/// `hp` is an alias for `helpers`.
fn test_hp_alias_matches_helpers() {
    let (_dir, root) = copy_fixture("helpers_demo");
    let full = run_glint(&root, &["helpers"]);
    let alias = run_glint(&root, &["hp"]);
    assert_eq!(full.stdout, alias.stdout);
}

#[test]
/// Running twice over the same tree gives byte-identical output.
fn test_helpers_output_is_deterministic() {
    let (_dir, root) = copy_fixture("helpers_demo");
    let first = run_glint(&root, &["helpers"]);
    let second = run_glint(&root, &["helpers"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
/// Hidden directories never show up in the report.
fn test_helpers_skips_hidden_directories() {
    let (_dir, root) = copy_fixture("helpers_demo");
    let output = run_glint(&root, &["helpers"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("dep"));
    assert!(!stdout.contains("_never_5"));
}

#[test]
/// `--json` emits a parseable document with every analysed package.
fn test_helpers_json_output() {
    let (_dir, root) = copy_fixture("helpers_demo");
    let output = run_glint(&root, &["helpers", "--json"]);
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["command"], "helpers");
    let packages: Vec<_> = v["packages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["package"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(packages, vec!["app", "clean", "strings"]);
    assert_eq!(v["packages"][1]["ok"], true);
}

#[test]
/// A tree without helpers prints nothing.
fn test_helpers_without_helpers_prints_nothing() {
    let (_dir, root) = create_project(&[("p/a.go", "package p\n\nfunc A() {}\n")]);
    let output = run_glint(&root, &["helpers"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
/// Diagnostics stay on stderr; stdout carries only the report.
fn test_verbose_logs_to_stderr() {
    let (_dir, root) = create_project(&[(
        "p/a.go",
        "package p\n\nfunc _a() {}\n\nfunc A() { _a() }\n",
    )]);
    let output = run_glint(&root, &["helpers", "--verbose"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "package: p\nOK\n");
    assert!(!output.stderr.is_empty());
}
