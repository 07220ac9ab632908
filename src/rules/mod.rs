//! Lint rules and the runner that drives them.

pub mod multiple_exports;
pub mod statement_count;

mod runner;
mod types;

pub use runner::Runner;
pub use types::{Diagnostic, LintResult, RuleId, Severity};
