//! Trait definitions
//!
//! This module defines core traits for paginated database access.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Metadata about a database-backed record collection.
///
/// One implementation per record type replaces the per-entity repository
/// pattern: the same generic pagination pipeline serves every collection.
///
/// ```
/// use pagestore::RecordCollection;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Todo {
///     pub id: i64,
///     pub name: String,
///     pub status: String,
/// }
///
/// impl RecordCollection for Todo {
///     fn table_name() -> &'static str {
///         "todos"
///     }
///
///     fn columns() -> &'static [&'static str] {
///         &["id", "name", "status"]
///     }
/// }
/// ```
pub trait RecordCollection:
    Clone + Send + Sync + Debug + Serialize + for<'de> Deserialize<'de>
{
    /// Table this collection maps to
    fn table_name() -> &'static str;

    /// Columns that filters and sort expressions may reference.
    ///
    /// Requests naming any other column are rejected before a query is
    /// issued; this whitelist is what keeps caller-supplied column and
    /// sort input out of the SQL text.
    fn columns() -> &'static [&'static str];
}
