//! Source discovery and declaration parsing for glint.
//!
//! - [`walker`]: groups source files into packages, one per directory
//! - [`treesitter`]: tree-sitter wrapper with fail-fast syntax checking
//! - [`resolver`]: the [`DeclarationParser`](resolver::DeclarationParser) capability
//! - [`go`]: Go implementation of that capability
//! - [`helpers`]: filters declarations down to marker-prefixed helpers

pub mod queries;
pub mod resolver;
pub mod treesitter;
pub mod walker;

pub mod go;
pub mod helpers;
