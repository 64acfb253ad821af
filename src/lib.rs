//! Pagestore - generic pagination and filtering for PostgreSQL record collections
//!
//! This crate provides a single paginated-query pipeline: a caller-supplied
//! [`PageRequest`] (page number, page size, sort, filter triples) is turned
//! into a parameterized WHERE/ORDER/LIMIT query, executed through a
//! [`QueryExecutor`] collaborator as one count query plus one data query,
//! and returned as a [`PageResult`] carrying the page rows and its metadata
//! (total rows, total pages, 1-based from/to row bounds).
//!
//! # Quick Start
//!
//! ```no_run
//! use pagestore::prelude::*;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
//! struct Todo {
//!     id: i64,
//!     name: String,
//!     status: String,
//! }
//!
//! impl RecordCollection for Todo {
//!     fn table_name() -> &'static str {
//!         "todos"
//!     }
//!
//!     fn columns() -> &'static [&'static str] {
//!         &["id", "name", "status"]
//!     }
//! }
//!
//! # async fn run(pool: PgPool) -> Result<(), PagestoreError> {
//! let store = RecordStore::<Todo>::new(pool);
//!
//! let request = PageRequest::new(1, 20)
//!     .with_sort(SortSpec::parse("name asc")?)
//!     .with_filter(Filter::equals("status", "active"))
//!     .with_filter(Filter::contains("name", "an"));
//!
//! let page = store.paginate(&request).await?;
//! println!("rows {}-{} of {}", page.from_row, page.to_row, page.total_rows);
//! # Ok(())
//! # }
//! ```
//!
//! Filter values are always bound as query parameters and column names are
//! checked against the collection's column whitelist, so caller-supplied
//! filter and sort input cannot alter the SQL text.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod paginate;
pub mod prelude;
pub mod query_builder;
pub mod store;
pub mod traits;
pub mod validation;

pub use errors::PagestoreError;
pub use paginate::paginate;
pub use query_builder::{
    Filter, FilterAction, PageBounds, PageRequest, PageResult, SortOrder, SortSpec, WhereClause,
};
pub use store::RecordStore;
pub use traits::{QueryExecutor, RecordCollection};
pub use validation::{ValidatedColumnName, ValidationError};

use sqlx::PgPool;

pub type DbPool = PgPool;
