//! Rule flagging files with more than one top-level export.

use crate::analysis::exports::{analyze_file_exports, detect_exports, export_summary, ExportInfo};
use crate::analysis::SourceFile;
use crate::config::ExportsConfig;

use super::{Diagnostic, LintResult, RuleId};

/// Run the multiple-exports rule over one parsed file.
///
/// `filename` is the path used for barrel-file detection and diagnostics,
/// with forward-slash separators.
pub fn check_file(source: &SourceFile, filename: &str, config: &ExportsConfig) -> LintResult {
    let mut result = LintResult::new();

    let checks = config.checks();
    let root = source.tree.root_node();
    let mut exports: Vec<ExportInfo> = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() == "export_statement" {
            exports.extend(detect_exports(source, child, &checks));
        }
    }

    let analysis = analyze_file_exports(exports, filename, config.ignore_barrel_files);
    if !analysis.has_multiple_exports {
        return result;
    }

    // Second filtering pass at the rule layer: only enabled categories
    // count toward the violation. Default and specifier exports always do.
    let relevant: Vec<&ExportInfo> = analysis
        .exports
        .iter()
        .filter(|e| config.is_kind_enabled(e.kind))
        .collect();

    if relevant.len() <= 1 {
        return result;
    }

    let summary = export_summary(relevant.iter().copied());
    result.add(Diagnostic {
        rule: RuleId::MultipleExports,
        severity: config.severity,
        file: filename.to_string(),
        line: relevant[0].span.start_line,
        message: format!(
            "Multiple exports found: {}. Consider splitting into separate files, each exporting a single item, or create a barrel file (index.ts) if these are related exports.",
            summary
        ),
    });

    result
}
