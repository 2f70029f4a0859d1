//! Output formatters for glint command results.
//!
//! Provides two output modes:
//! - **Human** (default): the plain-text per-package report
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub mod json;

use glint_enforce::types::HelpersResult;

pub trait OutputFormatter {
    fn format_helpers(&self, result: &HelpersResult) -> String;
}
