//! Convenience re-exports for common pagestore usage

// Core traits
pub use crate::traits::{QueryExecutor, RecordCollection};

// Error types
pub use crate::errors::PagestoreError;

// Store functionality
pub use crate::store::RecordStore;

// Pagination pipeline
pub use crate::paginate::paginate;

// Query building
pub use crate::query_builder::{
    Filter, FilterAction, PageBounds, PageRequest, PageResult, SortOrder, SortSpec, SqlGenerator,
    WhereClause,
};

// Validation
pub use crate::validation::{ValidatedColumnName, ValidationError};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool};
