use std::path::Path;

use tree_sitter::Query;

use crate::queries;
use crate::resolver::{DeclarationParser, FunctionDecl};
use crate::treesitter::{language_for_name, ParseError, TreeSitterParser};

/// Go declarations via tree-sitter-go.
///
/// The compiled query is shared; each call gets its own parser so files can
/// be parsed concurrently.
pub struct GoDeclarations {
    query: Query,
}

impl GoDeclarations {
    pub fn new() -> Result<Self, ParseError> {
        let lang = language_for_name("go")?;
        let query = queries::query_for_language(&lang, "go").map_err(ParseError::Query)?;
        Ok(GoDeclarations { query })
    }
}

impl DeclarationParser for GoDeclarations {
    fn language(&self) -> &str {
        "go"
    }

    fn parse_top_level_functions(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<Vec<FunctionDecl>, ParseError> {
        let mut parser = TreeSitterParser::new();
        let decls = parser.function_declarations("go", &self.query, content)?;
        tracing::trace!(file = %path.display(), count = decls.len(), "parsed declarations");
        Ok(decls)
    }
}
