use std::path::Path;

use glint_core::types::DeclKind;

use crate::treesitter::ParseError;

/// The capability every language backend provides: list the top-level
/// function declarations of one file.
///
/// Implementors must be `Send + Sync` so they can be shared across rayon
/// parallel iterators.
pub trait DeclarationParser: Send + Sync {
    /// Returns the canonical language name (e.g. "go").
    fn language(&self) -> &str;

    /// Parse a single file and return its top-level function declarations in
    /// source order. Malformed source is an error, never an empty result.
    fn parse_top_level_functions(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<Vec<FunctionDecl>, ParseError>;
}

/// A top-level function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Declared name (for methods, the method name without receiver).
    pub name: String,
    pub kind: DeclKind,
    /// First line of the declaration (1-based).
    pub line: u32,
}
