//! Node classification for the statement counter.
//!
//! Two pure predicates: is a node a countable statement, and does a node
//! open a nested scope that traversal must not descend into.

use tree_sitter::Node;

/// Returns the histogram key for a countable statement, or `None` when the
/// node does not count toward a body's total.
///
/// The countable set is fixed: the executable statement kinds plus variable
/// declarations that initialize at least one binding. `let y;` does not
/// count; `let y = 1;` does. Function and class declarations are never
/// countable themselves, and unrecognized kinds default to not countable.
pub fn countable_kind(node: Node) -> Option<&'static str> {
    match node.kind() {
        "expression_statement" => Some("expression_statement"),
        "return_statement" => Some("return_statement"),
        "break_statement" => Some("break_statement"),
        "continue_statement" => Some("continue_statement"),
        "throw_statement" => Some("throw_statement"),
        "if_statement" => Some("if_statement"),
        "for_statement" => Some("for_statement"),
        // The grammar folds for-in and for-of into one kind; keep them
        // distinct in the histogram by looking at the operator.
        "for_in_statement" => {
            let op = node.child_by_field_name("operator").map(|n| n.kind());
            if op == Some("of") {
                Some("for_of_statement")
            } else {
                Some("for_in_statement")
            }
        }
        "while_statement" => Some("while_statement"),
        "do_statement" => Some("do_statement"),
        "switch_statement" => Some("switch_statement"),
        "try_statement" => Some("try_statement"),
        "with_statement" => Some("with_statement"),
        "labeled_statement" => Some("labeled_statement"),
        "empty_statement" => Some("empty_statement"),
        "debugger_statement" => Some("debugger_statement"),
        "lexical_declaration" if has_initialized_declarator(node) => Some("lexical_declaration"),
        "variable_declaration" if has_initialized_declarator(node) => Some("variable_declaration"),
        _ => None,
    }
}

/// Whether any declarator in a variable declaration has an initializer.
fn has_initialized_declarator(node: Node) -> bool {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "variable_declarator" && child.child_by_field_name("value").is_some() {
            return true;
        }
    }
    false
}

/// Whether traversal must stop at this node instead of visiting children.
///
/// A nested function or class introduces an independently measured scope;
/// its statements belong to its own count, never the enclosing one.
/// `method_definition` is the tree-sitter spelling of a method's function
/// expression and blocks for the same reason. All other kinds are
/// transparent: loop bodies, case blocks, catch handlers, and arbitrary
/// nesting are visited.
pub fn is_scope_boundary(kind: &str) -> bool {
    matches!(
        kind,
        "function_declaration"
            | "generator_function_declaration"
            | "function_expression"
            | "generator_function"
            | "arrow_function"
            | "class_declaration"
            | "abstract_class_declaration"
            | "class"
            | "method_definition"
    )
}
