//! Configuration file loading for glint.
//!
//! Reads `.glint/glint.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Directory (relative to the analysis root) holding glint's own files.
pub const CONFIG_DIR: &str = ".glint";

/// Top-level glint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlintConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub helpers: HelperConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Helper naming convention settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperConfig {
    /// Leading marker of helper names; also prefixes the encoded call count.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Source file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Analysis scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_marker() -> String {
    "_".to_string()
}
fn default_extension() -> String {
    "go".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            extension: default_extension(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parallel: default_true(),
        }
    }
}

impl Default for GlintConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            helpers: HelperConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl GlintConfig {
    /// Load configuration from `glint.json` inside the given glint directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(glint_dir: &Path) -> Self {
        let config_path = glint_dir.join("glint.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        let mut cfg: Self = match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                return Self::default();
            }
        };
        cfg.sanitize();
        cfg
    }

    /// Load the configuration that applies to an analysis root.
    pub fn for_root(root: &Path) -> Self {
        Self::load(&root.join(CONFIG_DIR))
    }

    fn sanitize(&mut self) {
        if self.helpers.marker.is_empty() {
            tracing::warn!("helpers.marker is empty, using `{}`", default_marker());
            self.helpers.marker = default_marker();
        }
        let ext = self.helpers.extension.trim_start_matches('.');
        if ext.is_empty() {
            tracing::warn!("helpers.extension is empty, using `{}`", default_extension());
            self.helpers.extension = default_extension();
        } else if ext.len() != self.helpers.extension.len() {
            self.helpers.extension = ext.to_string();
        }
    }
}
