//! Error types for tree construction

use thiserror::Error;

use crate::tree::{Pattern, ValueKind};

/// Errors raised while building a markup tree
///
/// Both kinds are contract violations raised at the point where the bad
/// name or value is handed to the tree. Nothing is retried or recovered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkupError {
    /// A value had a runtime type its consumer does not accept
    #[error("{value:?} has type {found}, expected one of: {}", format_kinds(.allowed))]
    Type {
        value: String,
        found: ValueKind,
        allowed: Vec<ValueKind>,
    },

    /// A textual value does not satisfy the grammar of its position
    #[error("{value:?} is not a valid {pattern}")]
    Value { value: String, pattern: Pattern },
}

impl MarkupError {
    pub fn is_type_error(&self) -> bool {
        matches!(self, MarkupError::Type { .. })
    }

    pub fn is_value_error(&self) -> bool {
        matches!(self, MarkupError::Value { .. })
    }
}

fn format_kinds(kinds: &[ValueKind]) -> String {
    kinds
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
