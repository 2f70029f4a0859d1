use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Declaration flavours that can carry a helper name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Function,
    Method,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Function => "function",
            DeclKind::Method => "method",
        }
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single source file and its raw text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the analysis root, `/`-separated.
    pub rel_path: String,
    pub content: String,
}

/// A directory of source files analysed as one unit.
#[derive(Debug, Clone)]
pub struct Package {
    /// Root-relative directory path used as the report header (`.` for the root).
    pub rel_path: String,
    /// Member files, sorted by file name.
    pub files: Vec<SourceFile>,
}

impl Package {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// A function or method whose name starts with the helper marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperDeclaration {
    pub name: String,
    pub kind: DeclKind,
    /// Root-relative path of the declaring file.
    pub file: String,
    /// 1-based line of the declaration.
    pub line: u32,
}
