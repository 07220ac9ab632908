//! Output formatting for lint results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::rules::{Diagnostic, LintResult, Severity};

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub config: String,
    pub files_scanned: usize,
    pub errors: usize,
    pub warnings: usize,
    pub passed: bool,
    pub diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonDiagnostic {
    pub rule: String,
    pub severity: String,
    pub file: String,
    pub line: usize,
    pub message: String,
}

fn diagnostic_to_json(d: &Diagnostic) -> JsonDiagnostic {
    JsonDiagnostic {
        rule: d.rule.as_str().to_string(),
        severity: d.severity.to_string(),
        file: d.file.clone(),
        line: d.line,
        message: d.message.clone(),
    }
}

/// Build the JSON report structure for a result.
pub fn build_json(path: &str, config_path: &str, result: &LintResult) -> JsonReport {
    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        config: config_path.to_string(),
        files_scanned: result.scanned,
        errors: result.error_count(),
        warnings: result.warning_count(),
        passed: !result.has_errors(),
        diagnostics: result.diagnostics.iter().map(diagnostic_to_json).collect(),
    }
}

/// Write results in JSON format to stdout.
pub fn write_json(path: &str, config_path: &str, result: &LintResult) -> anyhow::Result<()> {
    let report = build_json(path, config_path, result);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

/// Write results in colored, human-readable format to stdout.
pub fn write_pretty(path: &str, config_path: &str, result: &LintResult) {
    println!("{}", "bloatcheck".bold());
    println!("  path:   {}", path);
    println!("  config: {}", config_path);
    println!();

    if result.diagnostics.is_empty() {
        println!(
            "{} {} file(s) scanned, no bloat found",
            "OK".green().bold(),
            result.scanned
        );
        return;
    }

    for diag in &result.diagnostics {
        let severity = match diag.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        println!(
            "{}:{} {} [{}] {}",
            diag.file.cyan(),
            diag.line,
            severity,
            diag.rule.as_str().dimmed(),
            diag.message
        );
    }

    println!();
    let summary = format!(
        "{} error(s), {} warning(s) in {} file(s)",
        result.error_count(),
        result.warning_count(),
        result.scanned
    );
    if result.has_errors() {
        println!("{} {}", "FAIL".red().bold(), summary);
    } else {
        println!("{} {}", "WARN".yellow().bold(), summary);
    }
}
