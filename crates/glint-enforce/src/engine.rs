use std::collections::HashSet;
use std::path::Path;

use rayon::prelude::*;

use glint_core::config::GlintConfig;
use glint_core::types::{HelperDeclaration, Package};
use glint_core::{GlintError, Result};
use glint_parsers::go::GoDeclarations;
use glint_parsers::helpers::extract_helpers;
use glint_parsers::resolver::DeclarationParser;
use glint_parsers::walker::{PackageDir, PackageWalker};

use crate::convention::NameConvention;
use crate::occurrences::OccurrenceScanner;
use crate::types::{CallCount, HelpersResult, PackageReport};

/// Checks the helper call-count convention over a directory tree.
///
/// Every package is analysed on its own: helpers declared in a package are
/// only counted against that package's files.
pub struct HelperEngine {
    config: GlintConfig,
    parser: Box<dyn DeclarationParser>,
    convention: NameConvention,
}

impl HelperEngine {
    /// Engine backed by the Go parser.
    pub fn new(config: GlintConfig) -> Result<Self> {
        let go = GoDeclarations::new().map_err(|e| GlintError::Pattern(e.to_string()))?;
        Self::with_parser(config, Box::new(go))
    }

    pub fn with_parser(config: GlintConfig, parser: Box<dyn DeclarationParser>) -> Result<Self> {
        let convention = NameConvention::new(&config.helpers.marker)?;
        Ok(Self {
            config,
            parser,
            convention,
        })
    }

    /// Analyse every package under `root`.
    ///
    /// Any I/O, parse, or convention failure aborts the whole run. Package
    /// blocks come back in walk order whether or not they were analysed in
    /// parallel.
    pub fn analyze(&self, root: &Path) -> Result<HelpersResult> {
        let dirs = PackageWalker::new(root, &self.config.helpers.extension).walk()?;

        let reports: Vec<Option<PackageReport>> = if self.config.analysis.parallel {
            dirs.par_iter()
                .map(|dir| self.analyze_dir(root, dir))
                .collect::<Result<_>>()?
        } else {
            dirs.iter()
                .map(|dir| self.analyze_dir(root, dir))
                .collect::<Result<_>>()?
        };

        let packages: Vec<PackageReport> = reports.into_iter().flatten().collect();
        let result = HelpersResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "helpers".to_string(),
            root: root.display().to_string(),
            packages,
        };

        tracing::info!(
            language = self.parser.language(),
            packages = result.packages.len(),
            helpers = result.helper_count(),
            mismatches = result.mismatch_count(),
            "helpers analysis complete"
        );
        Ok(result)
    }

    fn analyze_dir(&self, root: &Path, dir: &PackageDir) -> Result<Option<PackageReport>> {
        let package = dir.load(root)?;
        self.analyze_package(&package)
    }

    /// Analyse one loaded package. Returns `None` when it declares no helpers.
    pub fn analyze_package(&self, package: &Package) -> Result<Option<PackageReport>> {
        let helpers = self.declared_helpers(package)?;
        if helpers.is_empty() {
            tracing::debug!(package = %package.rel_path, "no helpers");
            return Ok(None);
        }

        let counts = helpers
            .into_iter()
            .map(|decl| {
                let expected = self.convention.expected_calls(&decl.name)?;
                let actual = OccurrenceScanner::new(&decl.name)?
                    .call_sites(&package.rel_path, &package.files)?;
                Ok(CallCount::new(decl, expected, actual))
            })
            .collect::<Result<Vec<_>>>()?;

        let report = PackageReport::new(package.rel_path.clone(), counts);
        tracing::debug!(
            package = %report.package,
            files = package.file_count(),
            helpers = report.helpers.len(),
            mismatches = report.mismatches,
            "package analysed"
        );
        Ok(Some(report))
    }

    /// Helpers declared anywhere in the package, in file then line order.
    /// A name declared twice (e.g. the same method name on two receivers) is
    /// checked once.
    fn declared_helpers(&self, package: &Package) -> Result<Vec<HelperDeclaration>> {
        let mut seen = HashSet::new();
        let mut helpers = Vec::new();
        for file in &package.files {
            for decl in extract_helpers(&*self.parser, file, self.convention.marker())? {
                if seen.insert(decl.name.clone()) {
                    helpers.push(decl);
                } else {
                    tracing::debug!(
                        package = %package.rel_path,
                        helper = %decl.name,
                        file = %decl.file,
                        "duplicate helper declaration"
                    );
                }
            }
        }
        Ok(helpers)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
