//! Generic store implementations
//!
//! This module provides the sqlx-backed store for paginated queries.

pub mod core;
pub mod executor;

pub use core::RecordStore;
