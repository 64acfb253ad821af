//! Trait definitions
//!
//! This module defines core traits for paginated database access.

use crate::errors::PagestoreError;
use crate::query_builder::{SortSpec, WhereClause};
use async_trait::async_trait;

/// Data-access collaborator that runs the count and find queries for one
/// record collection.
///
/// [`paginate`](crate::paginate) drives this trait: one `count_matching`
/// call over the full matching set, then one `find_matching` call for the
/// requested page. Implementations execute the queries; they do not compute
/// pagination metadata.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Row type returned by the data query
    type Record: Send;

    /// Columns that filters and sort expressions may reference
    fn columns(&self) -> &'static [&'static str];

    /// Count rows matching the predicate, ignoring limit and offset
    async fn count_matching(&self, clause: &WhereClause) -> Result<i64, PagestoreError>;

    /// Fetch one page of rows matching the predicate
    async fn find_matching(
        &self,
        clause: &WhereClause,
        sort: Option<&SortSpec>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Self::Record>, PagestoreError>;
}
