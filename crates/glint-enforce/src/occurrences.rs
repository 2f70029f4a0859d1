use regex::Regex;

use glint_core::types::SourceFile;
use glint_core::{GlintError, Result};

/// Counts word-bounded textual occurrences of one helper name.
///
/// Matching is purely textual: mentions inside comments and string literals
/// count the same as calls.
#[derive(Debug, Clone)]
pub struct OccurrenceScanner {
    name: String,
    pattern: Regex,
}

impl OccurrenceScanner {
    pub fn new(name: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(name)))
            .map_err(|e| GlintError::Pattern(e.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }

    /// Occurrences in one piece of text.
    pub fn count_in(&self, content: &str) -> usize {
        self.pattern.find_iter(content).count()
    }

    /// Call sites across a package: every occurrence in every file, minus the
    /// one occurrence that is the declaration.
    ///
    /// A name that never appears cannot have been declared in this package;
    /// that is reported instead of being clamped to zero.
    pub fn call_sites(&self, package: &str, files: &[SourceFile]) -> Result<u32> {
        let total: usize = files.iter().map(|f| self.count_in(&f.content)).sum();
        match total.checked_sub(1) {
            Some(calls) => Ok(u32::try_from(calls).unwrap_or(u32::MAX)),
            None => Err(GlintError::MissingDeclaration {
                package: package.to_string(),
                name: self.name.clone(),
            }),
        }
    }
}
