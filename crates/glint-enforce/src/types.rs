use serde::{Deserialize, Serialize};

use glint_core::types::{DeclKind, HelperDeclaration};

/// Expected vs. actual call sites of one helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallCount {
    pub name: String,
    pub kind: DeclKind,
    pub file: String,
    pub line: u32,
    pub expected: u32,
    /// Word-bounded occurrences in the package minus the declaration.
    pub actual: u32,
}

impl CallCount {
    pub fn new(decl: HelperDeclaration, expected: u32, actual: u32) -> Self {
        Self {
            name: decl.name,
            kind: decl.kind,
            file: decl.file,
            line: decl.line,
            expected,
            actual,
        }
    }

    pub fn is_mismatch(&self) -> bool {
        self.expected != self.actual
    }
}

/// Result block for a single package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReport {
    pub package: String,
    pub ok: bool,
    pub mismatches: usize,
    pub helpers: Vec<CallCount>,
}

impl PackageReport {
    pub fn new(package: String, helpers: Vec<CallCount>) -> Self {
        let mismatches = helpers.iter().filter(|c| c.is_mismatch()).count();
        Self {
            package,
            ok: mismatches == 0,
            mismatches,
            helpers,
        }
    }

    pub fn mismatched(&self) -> impl Iterator<Item = &CallCount> {
        self.helpers.iter().filter(|c| c.is_mismatch())
    }
}

/// Result of `glint helpers` over one root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpersResult {
    pub version: String,
    pub command: String,
    pub root: String,
    /// Package blocks in walk order. Packages without helpers are omitted.
    pub packages: Vec<PackageReport>,
}

impl HelpersResult {
    pub fn mismatch_count(&self) -> usize {
        self.packages.iter().map(|p| p.mismatches).sum()
    }

    pub fn helper_count(&self) -> usize {
        self.packages.iter().map(|p| p.helpers.len()).sum()
    }
}
