use tree_sitter::{Language, Query};

pub const GO_QUERIES: &str = include_str!("go.scm");

/// Compiles the declaration query for the given language name.
pub fn query_for_language(lang: &Language, lang_name: &str) -> Result<Query, String> {
    let source = match lang_name {
        "go" => GO_QUERIES,
        other => return Err(format!("unsupported language: {other}")),
    };
    Query::new(lang, source).map_err(|e| format!("query compilation error for {lang_name}: {e}"))
}
