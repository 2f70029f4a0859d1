//! Enforcement of the helper call-count convention.
//!
//! A helper is a top-level function whose name starts with the marker (`_`).
//! Its name may encode how many call sites it should have in its package
//! (`_load_3` expects three); without a number it expects exactly one.
//!
//! - [`convention`]: decodes the expected count from a helper name
//! - [`occurrences`]: counts word-bounded occurrences across a package
//! - [`engine`]: walks a root and analyses each package
//! - [`types`]: per-helper and per-package results

pub mod convention;
pub mod engine;
pub mod occurrences;
pub mod types;
