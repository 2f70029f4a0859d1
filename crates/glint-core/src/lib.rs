//! Core types, configuration, and errors for glint.
//!
//! This crate provides the foundational data structures used across all glint crates:
//! - [`types`]: Packages, source files, and helper declarations
//! - [`config`]: Configuration loading from `.glint/glint.json`
//! - [`error`]: The fatal error taxonomy shared by every stage of a run

pub mod config;
pub mod error;
pub mod types;

pub use error::{GlintError, Result};
