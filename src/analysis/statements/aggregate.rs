//! Function and class aggregators over the statement counter, plus name
//! resolution for the diagnostic labels.

use tree_sitter::Node;

use crate::analysis::SourceFile;

use super::{StatementCount, StatementCounter};

/// Count the statements in a function-like node's block body.
///
/// Functions without a block body (concise arrow bodies) yield a zero count
/// without traversing anything.
pub fn count_statements_in_function(func: Node, name: Option<&str>) -> StatementCount {
    let label = name.unwrap_or("anonymous");
    match func.child_by_field_name("body") {
        Some(body) if body.kind() == "statement_block" => {
            StatementCounter::new().count_statements(body, Some(label))
        }
        _ => StatementCount::empty(label),
    }
}

/// Count the statements across every method body of a class.
///
/// Each method is counted with a `"Class.method"` label and merged into a
/// combined total and histogram. Non-method members (field declarations,
/// abstract signatures) are skipped; an empty class yields count 0.
pub fn count_statements_in_class(
    source: &SourceFile,
    class_node: Node,
    name: Option<&str>,
) -> StatementCount {
    let class_label = name.unwrap_or("Class");
    let mut combined = StatementCount::empty(class_label);
    let mut counter = StatementCounter::new();

    let body = match class_node.child_by_field_name("body") {
        Some(b) => b,
        None => return combined,
    };

    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        if member.kind() != "method_definition" {
            continue;
        }
        let method_block = match member.child_by_field_name("body") {
            Some(b) if b.kind() == "statement_block" => b,
            _ => continue,
        };

        let method_name = member
            .child_by_field_name("name")
            .map(|n| source.node_text(n).to_string())
            .unwrap_or_else(|| "method".to_string());
        let label = format!("{}.{}", class_label, method_name);

        let result = counter.count_statements(method_block, Some(&label));
        combined.count += result.count;
        for (kind, n) in result.statement_kinds {
            *combined.statement_kinds.entry(kind).or_insert(0) += n;
        }
    }

    combined
}

/// Resolve the display name of a function-like node.
///
/// Declarations use their identifier. Expressions inherit a name from a
/// variable declarator, an assignment target, or an object-literal property
/// key. Object method shorthand takes the method name (it is a property);
/// a method inside a class body resolves nothing and stays anonymous.
pub fn function_name(source: &SourceFile, node: Node) -> Option<String> {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" => node
            .child_by_field_name("name")
            .map(|n| source.node_text(n).to_string()),
        "function_expression" | "generator_function" | "arrow_function" => {
            name_from_parent(source, node, true)
        }
        "method_definition" => {
            let parent = node.parent()?;
            if parent.kind() == "object" {
                node.child_by_field_name("name")
                    .filter(|n| n.kind() == "property_identifier")
                    .map(|n| source.node_text(n).to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Resolve the display name of a class node.
///
/// Class expressions inherit names from variable declarators and assignment
/// targets only. A class expression appearing as an object-literal property
/// value is always anonymous, even though function expressions in the same
/// position take the property key. That asymmetry is deliberate and pinned
/// by tests.
pub fn class_name(source: &SourceFile, node: Node) -> Option<String> {
    match node.kind() {
        "class_declaration" | "abstract_class_declaration" => node
            .child_by_field_name("name")
            .map(|n| source.node_text(n).to_string()),
        "class" => name_from_parent(source, node, false),
        _ => None,
    }
}

/// Look at the parent node for an inherited name.
fn name_from_parent(source: &SourceFile, node: Node, allow_property_key: bool) -> Option<String> {
    let parent = node.parent()?;
    match parent.kind() {
        "variable_declarator" => parent
            .child_by_field_name("name")
            .filter(|n| n.kind() == "identifier")
            .map(|n| source.node_text(n).to_string()),
        "assignment_expression" => parent
            .child_by_field_name("left")
            .filter(|n| n.kind() == "identifier")
            .map(|n| source.node_text(n).to_string()),
        "pair" if allow_property_key => parent
            .child_by_field_name("key")
            .filter(|n| n.kind() == "property_identifier")
            .map(|n| source.node_text(n).to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Language;
    use std::path::Path;

    fn parse_ts(source: &str) -> SourceFile {
        Language::TypeScript
            .parse(Path::new("test.ts"), source.as_bytes())
            .unwrap()
    }

    /// Find the first node of any of the given kinds, depth-first.
    fn find_node<'t>(node: Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
        if kinds.contains(&node.kind()) {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        children.into_iter().find_map(|c| find_node(c, kinds))
    }

    const FUNCTION_KINDS: &[&str] = &[
        "function_declaration",
        "function_expression",
        "arrow_function",
        "method_definition",
    ];

    const CLASS_KINDS: &[&str] = &["class_declaration", "class"];

    #[test]
    fn test_function_declaration_name() {
        let parsed = parse_ts("function greet() {}");
        let node = find_node(parsed.tree.root_node(), FUNCTION_KINDS).unwrap();
        assert_eq!(function_name(&parsed, node).as_deref(), Some("greet"));
    }

    #[test]
    fn test_arrow_inherits_declarator_name() {
        let parsed = parse_ts("const handler = () => { run(); };");
        let node = find_node(parsed.tree.root_node(), &["arrow_function"]).unwrap();
        assert_eq!(function_name(&parsed, node).as_deref(), Some("handler"));
    }

    #[test]
    fn test_function_expression_assignment_target() {
        let parsed = parse_ts("callback = function () { run(); };");
        let node = find_node(parsed.tree.root_node(), &["function_expression"]).unwrap();
        assert_eq!(function_name(&parsed, node).as_deref(), Some("callback"));
    }

    #[test]
    fn test_function_takes_object_property_key() {
        let parsed = parse_ts("const obj = { handler: function () { run(); } };");
        let node = find_node(parsed.tree.root_node(), &["function_expression"]).unwrap();
        assert_eq!(function_name(&parsed, node).as_deref(), Some("handler"));
    }

    #[test]
    fn test_object_method_shorthand_named() {
        let parsed = parse_ts("const obj = { handler() { run(); } };");
        let node = find_node(parsed.tree.root_node(), &["method_definition"]).unwrap();
        assert_eq!(function_name(&parsed, node).as_deref(), Some("handler"));
    }

    #[test]
    fn test_class_method_is_anonymous_function() {
        let parsed = parse_ts("class A { handler() { run(); } }");
        let node = find_node(parsed.tree.root_node(), &["method_definition"]).unwrap();
        assert_eq!(function_name(&parsed, node), None);
    }

    #[test]
    fn test_class_declaration_name() {
        let parsed = parse_ts("class Widget {}");
        let node = find_node(parsed.tree.root_node(), CLASS_KINDS).unwrap();
        assert_eq!(class_name(&parsed, node).as_deref(), Some("Widget"));
    }

    #[test]
    fn test_class_expression_declarator_name() {
        let parsed = parse_ts("const Widget = class {};");
        let node = find_node(parsed.tree.root_node(), &["class"]).unwrap();
        assert_eq!(class_name(&parsed, node).as_deref(), Some("Widget"));
    }

    #[test]
    fn test_class_in_object_property_stays_anonymous() {
        // Asymmetry with functions: a class expression as an object property
        // value never takes the property key.
        let parsed = parse_ts("const registry = { Widget: class {} };");
        let node = find_node(parsed.tree.root_node(), &["class"]).unwrap();
        assert_eq!(class_name(&parsed, node), None);

        let parsed = parse_ts("const registry = { widget: function () {} };");
        let node = find_node(parsed.tree.root_node(), &["function_expression"]).unwrap();
        assert_eq!(function_name(&parsed, node).as_deref(), Some("widget"));
    }

    #[test]
    fn test_concise_arrow_body_counts_zero() {
        let parsed = parse_ts("const double = (x) => x * 2;");
        let node = find_node(parsed.tree.root_node(), &["arrow_function"]).unwrap();
        let result = count_statements_in_function(node, Some("double"));
        assert_eq!(result.count, 0);
        assert_eq!(result.location, "double");
    }

    #[test]
    fn test_class_aggregation() {
        let parsed = parse_ts(
            r#"
class Service {
    start() {
        this.init();
        this.listen();
    }
    stop() {
        this.close();
    }
    ready = true;
}
"#,
        );
        let node = find_node(parsed.tree.root_node(), CLASS_KINDS).unwrap();
        let result = count_statements_in_class(&parsed, node, Some("Service"));
        assert_eq!(result.count, 3);
        assert_eq!(result.location, "Service");
        assert_eq!(result.statement_kinds["expression_statement"], 3);
        assert_eq!(result.count, result.histogram_total());
    }

    #[test]
    fn test_empty_class_counts_zero() {
        let parsed = parse_ts("class Empty {}");
        let node = find_node(parsed.tree.root_node(), CLASS_KINDS).unwrap();
        let result = count_statements_in_class(&parsed, node, None);
        assert_eq!(result.count, 0);
        assert_eq!(result.location, "Class");
    }

    #[test]
    fn test_class_methods_do_not_leak_nested_scopes() {
        let parsed = parse_ts(
            r#"
class Worker {
    run() {
        const job = () => {
            stepOne();
            stepTwo();
        };
        job();
    }
}
"#,
        );
        let node = find_node(parsed.tree.root_node(), CLASS_KINDS).unwrap();
        let result = count_statements_in_class(&parsed, node, Some("Worker"));
        // the const and the call; the arrow body is its own scope
        assert_eq!(result.count, 2);
    }
}
