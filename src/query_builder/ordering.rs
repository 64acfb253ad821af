//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

use crate::errors::PagestoreError;
use crate::validation::ValidatedColumnName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Ordering specification for a paginated query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(column: &str, order: SortOrder) -> Self {
        Self {
            column: column.to_string(),
            order,
        }
    }

    /// Parse a caller-supplied ordering expression of the form
    /// `column [asc|desc]` (direction optional, case-insensitive).
    ///
    /// The column name must be a valid SQL identifier; anything else is
    /// rejected rather than passed through to the query text.
    pub fn parse(expr: &str) -> Result<Self, PagestoreError> {
        let mut parts = expr.split_whitespace();

        let column = parts
            .next()
            .ok_or_else(|| PagestoreError::InvalidSort(expr.to_string()))?;
        let column = ValidatedColumnName::new(column)?;

        let order = match parts.next() {
            None => SortOrder::Asc,
            Some(dir) if dir.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            Some(dir) if dir.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            Some(_) => return Err(PagestoreError::InvalidSort(expr.to_string())),
        };

        // Trailing tokens mean the expression is not a plain column/direction pair
        if parts.next().is_some() {
            return Err(PagestoreError::InvalidSort(expr.to_string()));
        }

        Ok(Self {
            column: column.into_string(),
            order,
        })
    }
}
