//! The statement-counting traversal engine.
//!
//! A depth-first, pre-order walk: every visited node is classified, counted
//! when countable, and recursed into unless it opens a nested scope. The
//! counter holds no state between calls; accumulators reset on every
//! invocation so repeated counts over the same tree are identical.

use std::collections::BTreeMap;

use tree_sitter::Node;

use super::classify;

/// Result of counting one function body or class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementCount {
    /// Total countable statements found.
    pub count: usize,
    /// Human-readable owner of the count, `"anonymous"` when unnamed.
    pub location: String,
    /// Per-kind histogram; keys appear only with a non-zero count.
    pub statement_kinds: BTreeMap<String, usize>,
}

impl StatementCount {
    /// A zero count for a body that was never traversed.
    pub fn empty(location: &str) -> Self {
        Self {
            count: 0,
            location: location.to_string(),
            statement_kinds: BTreeMap::new(),
        }
    }

    /// Sum of the histogram values; always equals `count`.
    pub fn histogram_total(&self) -> usize {
        self.statement_kinds.values().sum()
    }
}

/// Reusable statement counter.
#[derive(Debug, Default)]
pub struct StatementCounter {
    count: usize,
    statement_kinds: BTreeMap<String, usize>,
}

impl StatementCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count statements in the subtree rooted at `node`.
    ///
    /// The root is evaluated uniformly with every other visited node. An
    /// empty body yields count 0 with an empty histogram.
    pub fn count_statements(&mut self, node: Node, location: Option<&str>) -> StatementCount {
        self.count = 0;
        self.statement_kinds.clear();

        self.visit(node);

        StatementCount {
            count: self.count,
            location: location.unwrap_or("anonymous").to_string(),
            statement_kinds: self.statement_kinds.clone(),
        }
    }

    fn visit(&mut self, node: Node) {
        if let Some(kind) = classify::countable_kind(node) {
            self.count += 1;
            *self.statement_kinds.entry(kind.to_string()).or_insert(0) += 1;
        }

        if classify::is_scope_boundary(node.kind()) {
            return;
        }

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child);
        }
    }
}
