use glint_core::types::{HelperDeclaration, SourceFile};
use glint_core::Result;

use crate::resolver::DeclarationParser;

/// Top-level declarations of `file` whose names start with `marker`, in
/// source order. Other declarations are dropped silently.
pub fn extract_helpers(
    parser: &dyn DeclarationParser,
    file: &SourceFile,
    marker: &str,
) -> Result<Vec<HelperDeclaration>> {
    let decls = parser
        .parse_top_level_functions(&file.path, &file.content)
        .map_err(|e| e.at(&file.path))?;

    Ok(decls
        .into_iter()
        .filter(|d| d.name.starts_with(marker))
        .map(|d| HelperDeclaration {
            name: d.name,
            kind: d.kind,
            file: file.rel_path.clone(),
            line: d.line,
        })
        .collect())
}
