//! Bloatcheck lints TypeScript and JavaScript sources for oversized
//! functions and classes, and for files that export more than one
//! top-level symbol.
//!
//! Statement counting walks each function or class body once, counting
//! executable statements without descending into nested function or
//! class scopes; counts are compared against configurable warn/error
//! thresholds. Export analysis classifies every top-level export and
//! reports a grouped summary when a file exports multiple symbols,
//! exempting barrel files (`index.ts` / `index.js`) when configured.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod report;
pub mod rules;

pub use analysis::{Language, SourceFile, Span};
pub use config::{Config, Preset};
pub use rules::{Diagnostic, LintResult, RuleId, Runner, Severity};
