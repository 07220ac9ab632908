//! Statement-count rules for functions and classes.
//!
//! Every function-like and class node in a file triggers its own full
//! traversal of its body; nested scopes are found independently as the walk
//! reaches them, so each is measured exactly once against the thresholds.

use tree_sitter::Node;

use crate::analysis::statements::{
    class_name, count_statements_in_class, count_statements_in_function, function_name,
};
use crate::analysis::SourceFile;
use crate::config::{StatementCountConfig, ThresholdDecision};

use super::{Diagnostic, LintResult, RuleId};

const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "generator_function",
    "arrow_function",
    "method_definition",
];

const CLASS_KINDS: &[&str] = &["class_declaration", "abstract_class_declaration", "class"];

/// Run the statement-count rules over one parsed file.
pub fn check_file(source: &SourceFile, config: &StatementCountConfig) -> LintResult {
    let mut result = LintResult::new();

    let mut functions = Vec::new();
    let mut classes = Vec::new();
    collect_candidates(source.tree.root_node(), &mut functions, &mut classes);

    for func in functions {
        check_function(source, func, config, &mut result);
    }
    for class in classes {
        check_class(source, class, config, &mut result);
    }

    result
}

/// Find every function-like and class node, including nested ones.
fn collect_candidates<'t>(node: Node<'t>, functions: &mut Vec<Node<'t>>, classes: &mut Vec<Node<'t>>) {
    let kind = node.kind();
    if FUNCTION_KINDS.contains(&kind) {
        functions.push(node);
    } else if CLASS_KINDS.contains(&kind) {
        classes.push(node);
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    for child in children {
        collect_candidates(child, functions, classes);
    }
}

fn check_function(
    source: &SourceFile,
    node: Node,
    config: &StatementCountConfig,
    result: &mut LintResult,
) {
    // Concise arrow bodies have nothing to count.
    match node.child_by_field_name("body") {
        Some(body) if body.kind() == "statement_block" => {}
        _ => return,
    }

    let name = function_name(source, node);
    let count = count_statements_in_function(node, name.as_deref()).count;

    if let Some(decision) = config.functions.evaluate(count) {
        result.add(Diagnostic {
            rule: RuleId::FunctionStatementCount,
            severity: decision.severity,
            file: source.path.clone(),
            line: node.start_position().row + 1,
            message: function_message(name.as_deref(), count, decision),
        });
    }
}

fn check_class(
    source: &SourceFile,
    node: Node,
    config: &StatementCountConfig,
    result: &mut LintResult,
) {
    let name = class_name(source, node);
    let count = count_statements_in_class(source, node, name.as_deref()).count;

    if let Some(decision) = config.classes.evaluate(count) {
        result.add(Diagnostic {
            rule: RuleId::ClassStatementCount,
            severity: decision.severity,
            file: source.path.clone(),
            line: node.start_position().row + 1,
            message: class_message(name.as_deref(), count, decision),
        });
    }
}

fn function_message(name: Option<&str>, count: usize, decision: ThresholdDecision) -> String {
    match name {
        Some(name) => format!(
            "Function \"{}\" has {} statements ({} {}). Consider breaking it down into smaller functions.",
            name, count, decision.threshold, decision.level
        ),
        None => format!(
            "Anonymous function has {} statements ({} {}). Consider breaking it down into smaller functions.",
            count, decision.threshold, decision.level
        ),
    }
}

fn class_message(name: Option<&str>, count: usize, decision: ThresholdDecision) -> String {
    match name {
        Some(name) => format!(
            "Class \"{}\" has {} statements ({} {}). Consider breaking it down into smaller classes or extracting methods.",
            name, count, decision.threshold, decision.level
        ),
        None => format!(
            "Anonymous class has {} statements ({} {}). Consider breaking it down into smaller classes or extracting methods.",
            count, decision.threshold, decision.level
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Language;
    use crate::config::ThresholdConfig;
    use crate::rules::Severity;
    use std::fmt::Write;
    use std::path::Path;

    fn parse_ts(source: &str) -> SourceFile {
        Language::TypeScript
            .parse(Path::new("test.ts"), source.as_bytes())
            .unwrap()
    }

    /// A named function whose body holds exactly `n` expression statements.
    fn function_with_statements(name: &str, n: usize) -> String {
        let mut src = format!("function {}() {{\n", name);
        for i in 0..n {
            writeln!(src, "    step{}();", i).unwrap();
        }
        src.push_str("}\n");
        src
    }

    fn defaults() -> StatementCountConfig {
        StatementCountConfig::default()
    }

    #[test]
    fn test_below_warn_threshold_silent() {
        let source = parse_ts(&function_with_statements("fine", 24));
        let result = check_file(&source, &defaults());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_exactly_warn_threshold_warns() {
        let source = parse_ts(&function_with_statements("chunky", 25));
        let result = check_file(&source, &defaults());
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.rule, RuleId::FunctionStatementCount);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(
            diag.message,
            "Function \"chunky\" has 25 statements (25 recommended max). Consider breaking it down into smaller functions."
        );
    }

    #[test]
    fn test_exactly_error_threshold_errors() {
        let source = parse_ts(&function_with_statements("huge", 50));
        let result = check_file(&source, &defaults());
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.severity, Severity::Error);
        assert!(diag.message.contains("has 50 statements (50 max)"));
    }

    #[test]
    fn test_anonymous_function_message() {
        let mut body = String::new();
        for i in 0..25 {
            writeln!(body, "    step{}();", i).unwrap();
        }
        let src = format!("run(function () {{\n{}}});\n", body);
        let source = parse_ts(&src);
        let result = check_file(&source, &defaults());
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0]
            .message
            .starts_with("Anonymous function has 25 statements"));
    }

    #[test]
    fn test_named_arrow_reported_with_name() {
        let mut body = String::new();
        for i in 0..25 {
            writeln!(body, "    step{}();", i).unwrap();
        }
        let src = format!("const handler = () => {{\n{}}};\n", body);
        let source = parse_ts(&src);
        let result = check_file(&source, &defaults());
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0]
            .message
            .starts_with("Function \"handler\" has 25 statements"));
    }

    #[test]
    fn test_nested_function_measured_independently() {
        // Outer holds 2 own statements plus a nested function with 25;
        // only the nested one violates.
        let mut nested_body = String::new();
        for i in 0..25 {
            writeln!(nested_body, "        inner{}();", i).unwrap();
        }
        let src = format!(
            "function outer() {{\n    const x = 1;\n    function nested() {{\n{}    }}\n    return x;\n}}\n",
            nested_body
        );
        let source = parse_ts(&src);
        let result = check_file(&source, &defaults());
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("\"nested\""));
    }

    #[test]
    fn test_class_rule_single_threshold() {
        let config = StatementCountConfig {
            functions: ThresholdConfig::dual(100, 200),
            classes: ThresholdConfig::Single {
                threshold: 3,
                severity: Severity::Error,
            },
        };
        let source = parse_ts(
            r#"
class Busy {
    a() {
        one();
        two();
    }
    b() {
        three();
    }
}
"#,
        );
        let result = check_file(&source, &config);
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.rule, RuleId::ClassStatementCount);
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(
            diag.message,
            "Class \"Busy\" has 3 statements (3 max). Consider breaking it down into smaller classes or extracting methods."
        );
    }

    #[test]
    fn test_anonymous_class_message() {
        let config = StatementCountConfig {
            functions: ThresholdConfig::dual(100, 200),
            classes: ThresholdConfig::Single {
                threshold: 1,
                severity: Severity::Warning,
            },
        };
        // Object-embedded class expressions never take the property key.
        let source = parse_ts("const reg = { W: class { m() { go(); } } };");
        let result = check_file(&source, &config);
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0]
            .message
            .starts_with("Anonymous class has 1 statements (1 recommended max)"));
    }

    #[test]
    fn test_concise_arrow_not_reported() {
        let config = StatementCountConfig {
            functions: ThresholdConfig::Single {
                threshold: 1,
                severity: Severity::Error,
            },
            classes: ThresholdConfig::dual(200, 300),
        };
        let source = parse_ts("const double = (x) => x * 2;");
        let result = check_file(&source, &config);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_diagnostic_line_points_at_function() {
        let source = parse_ts(&format!("// header\n{}", function_with_statements("f", 25)));
        let result = check_file(&source, &defaults());
        assert_eq!(result.diagnostics[0].line, 2);
    }
}
