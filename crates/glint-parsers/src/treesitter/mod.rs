use std::path::Path;

use glint_core::types::DeclKind;
use glint_core::GlintError;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, Tree};

use crate::resolver::FunctionDecl;

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Parse `source` and reject any tree that contains error or missing nodes.
    pub fn parse(&mut self, lang_name: &str, source: &[u8]) -> Result<Tree, ParseError> {
        let lang = language_for_name(lang_name)?;
        self.parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let tree = self
            .parser
            .parse(source, None)
            .ok_or(ParseError::ParseFailed)?;

        let root = tree.root_node();
        if root.has_error() {
            let bad = first_error(root).unwrap_or(root);
            let pos = bad.start_position();
            let snippet = node_text(bad, source)
                .lines()
                .next()
                .unwrap_or("")
                .chars()
                .take(40)
                .collect();
            return Err(ParseError::Syntax {
                line: pos.row as u32 + 1,
                column: pos.column as u32 + 1,
                snippet,
            });
        }
        Ok(tree)
    }

    /// Parse a file and return its top-level function and method declarations
    /// in source order.
    pub fn function_declarations(
        &mut self,
        lang_name: &str,
        query: &Query,
        source: &str,
    ) -> Result<Vec<FunctionDecl>, ParseError> {
        let bytes = source.as_bytes();
        let tree = self.parse(lang_name, bytes)?;
        Ok(extract_functions(query, tree.root_node(), bytes))
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("language error: {0}")]
    Language(String),
    #[error("query error: {0}")]
    Query(String),
    #[error("parse failed")]
    ParseFailed,
    #[error("syntax error at {line}:{column} near `{snippet}`")]
    Syntax {
        line: u32,
        column: u32,
        snippet: String,
    },
}

impl ParseError {
    /// Attach the offending file and lift into the run-level error.
    pub fn at(self, path: &Path) -> GlintError {
        GlintError::Parse {
            path: path.to_path_buf(),
            message: self.to_string(),
        }
    }
}

pub(crate) fn language_for_name(name: &str) -> Result<Language, ParseError> {
    match name {
        "go" => Ok(tree_sitter_go::LANGUAGE.into()),
        other => Err(ParseError::UnsupportedLanguage(other.to_string())),
    }
}

fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            if let Some(found) = first_error(child) {
                return Some(found);
            }
        }
    }
    None
}

fn extract_functions(query: &Query, root: Node<'_>, source: &[u8]) -> Vec<FunctionDecl> {
    let mut cursor = QueryCursor::new();
    let mut decls = Vec::new();
    let capture_names = query.capture_names();
    let mut matches = cursor.matches(query, root, source);

    while let Some(m) = matches.next() {
        let mut name = None;
        let mut kind = None;
        let mut line = 0u32;

        for cap in m.captures {
            match capture_names[cap.index as usize] {
                "def.func.name" => {
                    name = Some(node_text(cap.node, source).to_string());
                    kind = Some(DeclKind::Function);
                }
                "def.method.name" => {
                    name = Some(node_text(cap.node, source).to_string());
                    kind = Some(DeclKind::Method);
                }
                "def.func" | "def.method" => {
                    line = cap.node.start_position().row as u32 + 1;
                }
                _ => {}
            }
        }

        if let (Some(name), Some(kind)) = (name, kind) {
            decls.push(FunctionDecl { name, kind, line });
        }
    }

    // Source order, independent of which pattern matched.
    decls.sort_by_key(|d| d.line);
    decls
}
