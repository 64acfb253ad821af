//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

use serde::{Deserialize, Serialize};

/// Predicate shape applied by a filter triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterAction {
    /// Exact match, `column = value`
    Equals,
    /// Case-insensitive substring match, `lower(column) LIKE '%value%'`
    Contains,
    /// Set membership, `column IN (...)` over a comma-joined value list
    In,
}

/// Single (column, action, query) filter triple in a WHERE clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub action: FilterAction,
    pub query: String,
}

impl Filter {
    /// Create a filter condition
    pub fn new(column: &str, action: FilterAction, query: &str) -> Self {
        Self {
            column: column.to_string(),
            action,
            query: query.to_string(),
        }
    }

    /// Exact-match condition
    pub fn equals(column: &str, query: &str) -> Self {
        Self::new(column, FilterAction::Equals, query)
    }

    /// Case-insensitive substring condition
    pub fn contains(column: &str, query: &str) -> Self {
        Self::new(column, FilterAction::Contains, query)
    }

    /// Set-membership condition over a comma-joined value list
    pub fn in_list(column: &str, query: &str) -> Self {
        Self::new(column, FilterAction::In, query)
    }

    /// Whether this filter belongs to the equality group of the WHERE clause.
    ///
    /// `Equals` and `In` conditions are rendered together as one AND-joined
    /// group; `Contains` conditions form a second group ANDed after it.
    pub fn is_equality(&self) -> bool {
        matches!(self.action, FilterAction::Equals | FilterAction::In)
    }
}
