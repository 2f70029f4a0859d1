use regex::Regex;

use glint_core::{GlintError, Result};

/// Expected call count when a helper name carries no number.
pub const DEFAULT_EXPECTED_CALLS: u32 = 1;

/// Separator that introduces the encoded call count, independent of the
/// helper marker.
pub const COUNT_SEPARATOR: char = '_';

/// Decodes the expected call count encoded in helper names.
///
/// The count is the first `_ + digits` run in the name, wherever it
/// appears: `_3load` and `_load_3` both expect 3. Later runs are ignored,
/// so `_2x_7` expects 2. The marker only decides which names are helpers,
/// so with marker `hlp_` the name `hlp_load_2` still expects 2.
#[derive(Debug, Clone)]
pub struct NameConvention {
    marker: String,
    count_pattern: Regex,
}

impl NameConvention {
    pub fn new(marker: &str) -> Result<Self> {
        let separator = regex::escape(&COUNT_SEPARATOR.to_string());
        let count_pattern = Regex::new(&format!("{separator}([0-9]+)"))
            .map_err(|e| GlintError::Pattern(e.to_string()))?;
        Ok(Self {
            marker: marker.to_string(),
            count_pattern,
        })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn expected_calls(&self, name: &str) -> Result<u32> {
        let Some(caps) = self.count_pattern.captures(name) else {
            return Ok(DEFAULT_EXPECTED_CALLS);
        };
        let digits = &caps[1];
        digits.parse::<u32>().map_err(|_| GlintError::Convention {
            name: name.to_string(),
            digits: digits.to_string(),
        })
    }
}
