use std::path::Path;

use glint_core::config::GlintConfig;
use glint_core::GlintError;
use glint_enforce::engine::HelperEngine;
use glint_output::OutputFormatter;

/// Run `glint helpers` over the current directory.
///
/// Mismatches are ordinary output and exit 0; only fatal errors exit 2.
pub fn run(formatter: &dyn OutputFormatter) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("glint helpers: failed to get current directory: {}", e);
            return 2;
        }
    };

    match report(&cwd, formatter) {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else if !output.is_empty() {
                println!("{}", output);
            }
            0
        }
        Err(e) => {
            eprintln!("glint helpers: {}", e);
            2
        }
    }
}

/// Analyse `root` with the configuration found there and render the report.
pub fn report(root: &Path, formatter: &dyn OutputFormatter) -> Result<String, GlintError> {
    let config = GlintConfig::for_root(root);
    let engine = HelperEngine::new(config)?;
    let result = engine.analyze(root)?;
    Ok(formatter.format_helpers(&result))
}
