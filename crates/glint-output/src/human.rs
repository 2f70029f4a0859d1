use crate::OutputFormatter;
use glint_enforce::types::{CallCount, HelpersResult, PackageReport};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_helpers(&self, result: &HelpersResult) -> String {
        let mut out = String::new();
        for pkg in &result.packages {
            out.push_str(&format_package(pkg));
        }
        out
    }
}

/// One package block: a header, then either `OK` or one line per mismatch.
pub fn format_package(pkg: &PackageReport) -> String {
    let mut out = format!("package: {}\n", pkg.package);
    if pkg.ok {
        out.push_str("OK\n");
        return out;
    }
    for count in pkg.mismatched() {
        out.push_str(&format_mismatch(count));
        out.push('\n');
    }
    out
}

pub fn format_mismatch(count: &CallCount) -> String {
    let signature = format!("{}(...)", count.name);
    format!(
        "{signature:<18} actual calls: {:>3} expected calls: {:>3}",
        count.actual, count.expected
    )
}
