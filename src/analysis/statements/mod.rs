//! Statement counting: classification, traversal, and aggregation.

mod aggregate;
mod classify;
mod counter;

pub use aggregate::{
    class_name, count_statements_in_class, count_statements_in_function, function_name,
};
pub use classify::{countable_kind, is_scope_boundary};
pub use counter::{StatementCount, StatementCounter};
