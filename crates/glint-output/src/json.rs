use crate::OutputFormatter;
use glint_enforce::types::HelpersResult;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_helpers(&self, result: &HelpersResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
