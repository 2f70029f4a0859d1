use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use glint_core::types::{Package, SourceFile};
use glint_core::{GlintError, Result};
use walkdir::{DirEntry, WalkDir};

/// A discovered package directory whose files have not been read yet.
#[derive(Debug, Clone)]
pub struct PackageDir {
    pub rel_path: String,
    /// Source files, sorted by file name.
    pub files: Vec<PathBuf>,
}

impl PackageDir {
    /// Read every member file. Any unreadable file aborts the load.
    pub fn load(&self, root: &Path) -> Result<Package> {
        let mut files = Vec::with_capacity(self.files.len());
        for path in &self.files {
            let content =
                std::fs::read_to_string(path).map_err(|e| GlintError::io(path.clone(), e))?;
            files.push(SourceFile {
                path: path.clone(),
                rel_path: relative_path(root, path),
                content,
            });
        }
        Ok(Package {
            rel_path: self.rel_path.clone(),
            files,
        })
    }
}

/// Groups source files into packages, one per directory under the root.
pub struct PackageWalker {
    root: PathBuf,
    extension: String,
}

impl PackageWalker {
    pub fn new(root: &Path, extension: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            extension: extension.to_string(),
        }
    }

    /// Walk the tree depth-first in lexicographic order.
    ///
    /// Directories whose name starts with `.` are pruned with everything below
    /// them. Directories without a matching file produce no package. The first
    /// unreadable directory fails the whole walk.
    pub fn walk(&self) -> Result<Vec<PackageDir>> {
        let mut order: Vec<PathBuf> = Vec::new();
        let mut members: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden_dir(e));

        for result in walker {
            let entry = result.map_err(|e| GlintError::Walk {
                path: e.path().unwrap_or(self.root.as_path()).to_path_buf(),
                message: e.to_string(),
            })?;

            if entry.file_type().is_dir() {
                order.push(entry.into_path());
                continue;
            }
            if !entry.file_type().is_file() || !self.has_extension(entry.path()) {
                continue;
            }

            let path = entry.into_path();
            if let Some(parent) = path.parent() {
                members.entry(parent.to_path_buf()).or_default().push(path);
            }
        }

        let packages: Vec<PackageDir> = order
            .into_iter()
            .filter_map(|dir| {
                let files = members.remove(&dir)?;
                Some(PackageDir {
                    rel_path: relative_path(&self.root, &dir),
                    files,
                })
            })
            .collect();

        tracing::debug!(
            root = %self.root.display(),
            packages = packages.len(),
            "walk complete"
        );
        Ok(packages)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension() == Some(OsStr::new(&self.extension))
    }
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_string_lossy().starts_with('.')
}

/// `/`-separated path of `path` below `root`; `.` for the root itself.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
