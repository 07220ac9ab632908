//! Export classification for top-level export statements.

use tree_sitter::Node;

use crate::analysis::{SourceFile, Span};

/// Classification bucket for one exported symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    Class,
    Function,
    Interface,
    Type,
    Variable,
    Default,
    Specifier,
}

impl ExportKind {
    /// All kinds in the fixed summary order.
    pub const ORDERED: [ExportKind; 7] = [
        ExportKind::Class,
        ExportKind::Function,
        ExportKind::Interface,
        ExportKind::Type,
        ExportKind::Variable,
        ExportKind::Default,
        ExportKind::Specifier,
    ];

    /// Singular category label used in summaries.
    pub fn singular(&self) -> &'static str {
        match self {
            ExportKind::Class => "class",
            ExportKind::Function => "function",
            ExportKind::Interface => "interface",
            ExportKind::Type => "type",
            ExportKind::Variable => "variable",
            ExportKind::Default => "default export",
            ExportKind::Specifier => "export specifier",
        }
    }

    /// Plural category label used in summaries.
    pub fn plural(&self) -> &'static str {
        match self {
            ExportKind::Class => "classes",
            ExportKind::Function => "functions",
            ExportKind::Interface => "interfaces",
            ExportKind::Type => "types",
            ExportKind::Variable => "variables",
            ExportKind::Default => "default exports",
            ExportKind::Specifier => "export specifiers",
        }
    }
}

/// One classified export within a file.
#[derive(Debug, Clone)]
pub struct ExportInfo {
    pub kind: ExportKind,
    /// Symbol name, or a synthetic placeholder when unresolvable.
    pub name: String,
    /// Span of the originating export statement, for diagnostics.
    pub span: Span,
}

/// Which export categories the classifier detects.
///
/// Default and specifier exports are handled separately: specifiers are
/// always detected (their original declaration kind cannot be determined
/// without cross-file resolution), and defaults are gated by the toggle of
/// the wrapped declaration kind.
#[derive(Debug, Clone, Copy)]
pub struct ExportChecks {
    pub classes: bool,
    pub functions: bool,
    pub interfaces: bool,
    pub types: bool,
    pub variables: bool,
}

impl Default for ExportChecks {
    fn default() -> Self {
        Self {
            classes: true,
            functions: true,
            interfaces: true,
            types: true,
            variables: true,
        }
    }
}

/// Classify a top-level `export_statement` node.
///
/// Returns one entry per exported symbol: at most one for declaration and
/// default exports, one per specifier for `export { a, b }` lists. A
/// multi-binding declaration (`export const a = 1, b = 2;`) classifies as a
/// single Variable named after the first declarator. Shapes that match
/// nothing (including `export * from`) produce an empty list.
pub fn detect_exports(source: &SourceFile, node: Node, checks: &ExportChecks) -> Vec<ExportInfo> {
    if node.kind() != "export_statement" {
        return Vec::new();
    }
    let span = Span::from_node(node);

    if has_default_keyword(node) {
        return detect_default_export(source, node, checks, span)
            .into_iter()
            .collect();
    }

    if let Some(decl) = node.child_by_field_name("declaration") {
        return detect_declaration_export(source, decl, checks, span)
            .into_iter()
            .collect();
    }

    detect_specifier_exports(source, node, span)
}

fn has_default_keyword(node: Node) -> bool {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "default" {
            return true;
        }
    }
    false
}

fn detect_default_export(
    source: &SourceFile,
    node: Node,
    checks: &ExportChecks,
    span: Span,
) -> Option<ExportInfo> {
    // `export default class X {}` parses as a declaration; anonymous forms
    // land in the value field as plain expressions.
    if let Some(decl) = node.child_by_field_name("declaration") {
        let name_of = |n: Node| {
            n.child_by_field_name("name")
                .map(|id| source.node_text(id).to_string())
        };
        return match decl.kind() {
            "class_declaration" if checks.classes => Some(ExportInfo {
                kind: ExportKind::Default,
                name: name_of(decl).unwrap_or_else(|| "default class".to_string()),
                span,
            }),
            "function_declaration" | "generator_function_declaration" if checks.functions => {
                Some(ExportInfo {
                    kind: ExportKind::Default,
                    name: name_of(decl).unwrap_or_else(|| "default function".to_string()),
                    span,
                })
            }
            _ => None,
        };
    }

    let value = node.child_by_field_name("value")?;
    let name = match value.kind() {
        "identifier" if checks.variables => source.node_text(value).to_string(),
        "arrow_function" if checks.functions => "default arrow function".to_string(),
        "function_expression" if checks.functions => value
            .child_by_field_name("name")
            .map(|id| source.node_text(id).to_string())
            .unwrap_or_else(|| "default function expression".to_string()),
        "class" if checks.classes => value
            .child_by_field_name("name")
            .map(|id| source.node_text(id).to_string())
            .unwrap_or_else(|| "default class".to_string()),
        _ => return None,
    };

    Some(ExportInfo {
        kind: ExportKind::Default,
        name,
        span,
    })
}

fn detect_declaration_export(
    source: &SourceFile,
    decl: Node,
    checks: &ExportChecks,
    span: Span,
) -> Option<ExportInfo> {
    let named = |kind: ExportKind| {
        Some(ExportInfo {
            kind,
            name: decl
                .child_by_field_name("name")
                .map(|id| source.node_text(id).to_string())
                .unwrap_or_else(|| "anonymous".to_string()),
            span,
        })
    };

    match decl.kind() {
        "class_declaration" | "abstract_class_declaration" if checks.classes => {
            named(ExportKind::Class)
        }
        "function_declaration" | "generator_function_declaration" if checks.functions => {
            named(ExportKind::Function)
        }
        "interface_declaration" if checks.interfaces => named(ExportKind::Interface),
        // Enums fold into the type category.
        "type_alias_declaration" | "enum_declaration" if checks.types => named(ExportKind::Type),
        "lexical_declaration" | "variable_declaration" if checks.variables => {
            // Only the first declarator names the export, even when one
            // statement declares several bindings.
            let mut cursor = decl.walk();
            let first = decl
                .named_children(&mut cursor)
                .find(|c| c.kind() == "variable_declarator")?;
            let name_node = first
                .child_by_field_name("name")
                .filter(|n| n.kind() == "identifier")?;
            Some(ExportInfo {
                kind: ExportKind::Variable,
                name: source.node_text(name_node).to_string(),
                span,
            })
        }
        _ => None,
    }
}

fn detect_specifier_exports(source: &SourceFile, node: Node, span: Span) -> Vec<ExportInfo> {
    let mut out = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() != "export_clause" {
            continue;
        }
        let mut clause_cursor = child.walk();
        for spec in child.named_children(&mut clause_cursor) {
            if spec.kind() != "export_specifier" {
                continue;
            }
            // The exported binding is the alias when renamed.
            let exported = spec
                .child_by_field_name("alias")
                .or_else(|| spec.child_by_field_name("name"));
            let name = exported
                .filter(|n| matches!(n.kind(), "identifier" | "type_identifier"))
                .map(|n| source.node_text(n).to_string())
                .unwrap_or_else(|| "unknown".to_string());
            out.push(ExportInfo {
                kind: ExportKind::Specifier,
                name,
                span,
            });
        }
    }
    out
}
