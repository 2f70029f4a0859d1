//! Bakes build metadata into the binary for `glint --version`.
//!
//! Release pipelines export `GLINT_COMMIT_HASH`, `GLINT_GIT_TAG`, and
//! `GLINT_BUILD_TIME`; local builds report `unknown`.

const BUILD_VARS: [&str; 3] = ["GLINT_COMMIT_HASH", "GLINT_GIT_TAG", "GLINT_BUILD_TIME"];

fn main() {
    for key in BUILD_VARS {
        let value = std::env::var(key)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env={key}={value}");
        println!("cargo:rerun-if-env-changed={key}");
    }
}
