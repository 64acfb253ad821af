//! Pagination pipeline
//!
//! Validates a page request, builds the parameterized WHERE clause, runs the
//! count and data queries through a [`QueryExecutor`], and computes the page
//! metadata.

use crate::errors::PagestoreError;
use crate::query_builder::{PageBounds, PageRequest, PageResult, SqlGenerator};
use crate::traits::QueryExecutor;

/// Run the paginated query described by `request` through `executor`.
///
/// Issues exactly two read-only queries: a count over the full matching set
/// (independent of limit/offset) followed by the data query for the
/// requested page. If either query fails, the underlying error is returned
/// unmodified and no partial result is produced.
///
/// A zero `limit` is rejected up front with [`PagestoreError::InvalidLimit`]
/// before any query is issued. A page past the last one is not an error: it
/// returns whatever (possibly empty) row set the store produced, with the
/// degenerate `(0, 0)` row bounds.
pub async fn paginate<E: QueryExecutor>(
    executor: &E,
    request: &PageRequest,
) -> Result<PageResult<E::Record>, PagestoreError> {
    if request.limit == 0 {
        return Err(PagestoreError::InvalidLimit(request.limit));
    }
    validate_columns(request, executor.columns())?;

    let clause = SqlGenerator::build_where_clause(&request.filters);

    let total_rows = executor.count_matching(&clause).await?;

    let rows = executor
        .find_matching(
            &clause,
            request.sort.as_ref(),
            i64::from(request.limit),
            request.offset(),
        )
        .await?;

    let bounds = PageBounds::compute(request.page, request.limit, total_rows);

    Ok(PageResult {
        rows,
        total_rows,
        total_pages: bounds.total_pages,
        from_row: bounds.from_row,
        to_row: bounds.to_row,
    })
}

/// Reject filter and sort columns outside the collection's whitelist.
fn validate_columns(request: &PageRequest, allowed: &[&str]) -> Result<(), PagestoreError> {
    for filter in &request.filters {
        if !allowed.contains(&filter.column.as_str()) {
            return Err(PagestoreError::UnknownColumn(filter.column.clone()));
        }
    }

    if let Some(sort) = &request.sort {
        if !allowed.contains(&sort.column.as_str()) {
            return Err(PagestoreError::UnknownColumn(sort.column.clone()));
        }
    }

    Ok(())
}
