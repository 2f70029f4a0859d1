//! Fatal errors. Any of these aborts the run; no partial report is produced.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GlintError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("helper `{name}` encodes an invalid call count `{digits}`")]
    Convention { name: String, digits: String },

    #[error("helper `{name}` in package `{package}` has no occurrences, not even its declaration")]
    MissingDeclaration { package: String, name: String },

    #[error("invalid pattern: {0}")]
    Pattern(String),
}

pub type Result<T> = std::result::Result<T, GlintError>;

impl GlintError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GlintError::Io {
            path: path.into(),
            source,
        }
    }
}
