//! AST-backed source analysis.
//!
//! This module owns everything that looks at tree-sitter nodes directly:
//!
//! - `language`: grammar selection and parsing into a [`SourceFile`]
//! - `statements`: the statement-counting traversal engine and its
//!   function/class aggregators
//! - `exports`: export classification and multiplicity analysis
//!
//! Rules in `crate::rules` consume these building blocks and never touch
//! tree-sitter themselves beyond locating candidate nodes.

mod language;
mod source;

pub mod exports;
pub mod statements;

pub use language::Language;
pub use source::{SourceFile, Span};
