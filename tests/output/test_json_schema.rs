// Tests for the JSON shape of `glint --json helpers`

use glint_core::config::GlintConfig;
use glint_enforce::engine::HelperEngine;
use glint_enforce::types::HelpersResult;
use glint_output::json::JsonFormatter;
use glint_output::OutputFormatter;
use serde_json::Value;

use super::common::{copy_fixture, create_project};

fn json_for(root: &std::path::Path) -> Value {
    let result = HelperEngine::new(GlintConfig::for_root(root))
        .unwrap()
        .analyze(root)
        .unwrap();
    serde_json::from_str(&JsonFormatter.format_helpers(&result)).unwrap()
}

#[test]
/// Top-level fields are always present.
fn test_top_level_fields() {
    let (_dir, root) = create_project(&[]);
    let json = json_for(&root);
    assert_eq!(json["command"], "helpers");
    assert!(json["version"].is_string());
    assert!(json["root"].is_string());
    assert_eq!(json["packages"], Value::Array(vec![]));
}

#[test]
/// Each package lists every helper, not only mismatches.
fn test_package_entries_carry_all_helpers() {
    let (_dir, root) = copy_fixture("helpers_demo");
    let json = json_for(&root);
    let packages = json["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 3);

    let clean = &packages[1];
    assert_eq!(clean["package"], "clean");
    assert_eq!(clean["ok"], true);
    assert_eq!(clean["mismatches"], 0);
    assert!(!clean["helpers"].as_array().unwrap().is_empty());
}

#[test]
/// Helper entries expose location and both counts.
fn test_helper_entry_fields() {
    let (_dir, root) = create_project(&[(
        "svc/s.go",
        "package svc\n\ntype S struct{}\n\nfunc (S) _close_2() {}\n\nfunc (s S) Run() { s._close_2() }\n",
    )]);
    let json = json_for(&root);
    let helper = &json["packages"][0]["helpers"][0];
    assert_eq!(helper["name"], "_close_2");
    assert_eq!(helper["kind"], "method");
    assert_eq!(helper["file"], "svc/s.go");
    assert_eq!(helper["line"], 5);
    assert_eq!(helper["expected"], 2);
    assert_eq!(helper["actual"], 1);
    assert_eq!(json["packages"][0]["ok"], false);
}

#[test]
/// The JSON form deserializes back into the result type.
fn test_json_reads_back() {
    let (_dir, root) = copy_fixture("helpers_demo");
    let text = serde_json::to_string(&json_for(&root)).unwrap();
    let result: HelpersResult = serde_json::from_str(&text).unwrap();
    assert_eq!(result.mismatch_count(), 2);
}
