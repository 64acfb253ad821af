//! Trait definitions
//!
//! This module defines core traits for paginated database access.

pub mod collection;
pub mod executor;

pub use collection::RecordCollection;
pub use executor::QueryExecutor;
