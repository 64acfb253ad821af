//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

pub mod filter;
pub mod ordering;
pub mod pagination;
pub mod sql_generation;


// Re-export main types
pub use filter::{Filter, FilterAction};
pub use ordering::{SortOrder, SortSpec};
pub use pagination::{PageBounds, PageRequest, PageResult};
pub use sql_generation::{SqlGenerator, WhereClause};
