//! Integration tests for the pagination pipeline
//!
//! Drives `paginate` end to end against an in-memory executor, covering the
//! count/find sequencing, page-boundary metadata, and error short-circuits
//! without needing a database.

use async_trait::async_trait;
use pagestore::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Todo {
    id: i64,
    name: String,
    status: String,
}

fn todo(id: i64, name: &str, status: &str) -> Todo {
    Todo {
        id,
        name: name.to_string(),
        status: status.to_string(),
    }
}

/// In-memory stand-in for the sqlx-backed store. Holds the full matching
/// set and slices it by limit/offset, mimicking what the database returns.
struct FixtureExecutor {
    rows: Vec<Todo>,
    count_calls: AtomicUsize,
    find_calls: AtomicUsize,
    seen_clauses: Mutex<Vec<String>>,
    fail_count: bool,
    fail_find: bool,
}

impl FixtureExecutor {
    fn new(rows: Vec<Todo>) -> Self {
        Self {
            rows,
            count_calls: AtomicUsize::new(0),
            find_calls: AtomicUsize::new(0),
            seen_clauses: Mutex::new(Vec::new()),
            fail_count: false,
            fail_find: false,
        }
    }

    fn with_rows(n: i64) -> Self {
        let rows = (1..=n)
            .map(|i| todo(i, &format!("task {}", i), "active"))
            .collect();
        Self::new(rows)
    }

    fn calls(&self) -> (usize, usize) {
        (
            self.count_calls.load(Ordering::SeqCst),
            self.find_calls.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl QueryExecutor for FixtureExecutor {
    type Record = Todo;

    fn columns(&self) -> &'static [&'static str] {
        &["id", "name", "status"]
    }

    async fn count_matching(&self, clause: &WhereClause) -> Result<i64, PagestoreError> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_clauses.lock().unwrap().push(clause.sql.clone());

        if self.fail_count {
            return Err(PagestoreError::Database(sqlx::Error::RowNotFound));
        }
        Ok(self.rows.len() as i64)
    }

    async fn find_matching(
        &self,
        clause: &WhereClause,
        _sort: Option<&SortSpec>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Todo>, PagestoreError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_clauses.lock().unwrap().push(clause.sql.clone());

        if self.fail_find {
            return Err(PagestoreError::Database(sqlx::Error::PoolClosed));
        }

        let page = self
            .rows
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(page)
    }
}

#[tokio::test]
async fn paginates_a_full_interior_page() {
    let executor = FixtureExecutor::with_rows(25);
    let request = PageRequest::new(2, 10);

    let page = paginate(&executor, &request).await.unwrap();

    assert_eq!(page.total_rows, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.from_row, 11);
    assert_eq!(page.to_row, 20);
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.rows[0].id, 11);
    assert_eq!(executor.calls(), (1, 1));
}

#[tokio::test]
async fn clips_the_last_partial_page() {
    // totalRows=25, limit=10, page=3: to_row clipped from 30 down to 25
    let executor = FixtureExecutor::with_rows(25);
    let request = PageRequest::new(3, 10);

    let page = paginate(&executor, &request).await.unwrap();

    assert_eq!(page.total_pages, 3);
    assert_eq!(page.from_row, 21);
    assert_eq!(page.to_row, 25);
    assert_eq!(page.rows.len(), 5);
}

#[tokio::test]
async fn page_zero_and_page_one_return_the_same_page() {
    let executor = FixtureExecutor::with_rows(25);

    let zero = paginate(&executor, &PageRequest::new(0, 10)).await.unwrap();
    let one = paginate(&executor, &PageRequest::new(1, 10)).await.unwrap();

    assert_eq!(zero, one);
    assert_eq!(one.from_row, 1);
    assert_eq!(one.to_row, 10);
    assert_eq!(one.rows[0].id, 1);
}

#[tokio::test]
async fn empty_result_set_keeps_from_row_at_one() {
    let executor = FixtureExecutor::with_rows(0);
    let request = PageRequest::new(1, 10);

    let page = paginate(&executor, &request).await.unwrap();

    assert_eq!(page.total_rows, 0);
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.from_row, 1);
    assert_eq!(page.to_row, 0);
    assert!(page.rows.is_empty());
}

#[tokio::test]
async fn out_of_range_page_returns_empty_bounds_not_an_error() {
    let executor = FixtureExecutor::with_rows(25);
    let request = PageRequest::new(9, 10);

    let page = paginate(&executor, &request).await.unwrap();

    assert_eq!(page.total_pages, 3);
    assert_eq!((page.from_row, page.to_row), (0, 0));
    assert!(page.rows.is_empty());
}

#[tokio::test]
async fn zero_limit_is_rejected_before_any_query() {
    let executor = FixtureExecutor::with_rows(25);
    let request = PageRequest::new(1, 0);

    let err = paginate(&executor, &request).await.unwrap_err();

    assert!(matches!(err, PagestoreError::InvalidLimit(0)));
    assert_eq!(executor.calls(), (0, 0));
}

#[tokio::test]
async fn unknown_filter_column_is_rejected_before_any_query() {
    let executor = FixtureExecutor::with_rows(25);
    let request = PageRequest::new(1, 10).with_filter(Filter::equals("password", "x"));

    let err = paginate(&executor, &request).await.unwrap_err();

    assert!(matches!(err, PagestoreError::UnknownColumn(col) if col == "password"));
    assert_eq!(executor.calls(), (0, 0));
}

#[tokio::test]
async fn unknown_sort_column_is_rejected_before_any_query() {
    let executor = FixtureExecutor::with_rows(25);
    let request = PageRequest::new(1, 10).with_sort(SortSpec::new("secret", SortOrder::Asc));

    let err = paginate(&executor, &request).await.unwrap_err();

    assert!(matches!(err, PagestoreError::UnknownColumn(col) if col == "secret"));
    assert_eq!(executor.calls(), (0, 0));
}

#[tokio::test]
async fn count_and_find_receive_the_same_where_clause() {
    let executor = FixtureExecutor::with_rows(25);
    let request = PageRequest::new(1, 10)
        .with_filter(Filter::equals("status", "active"))
        .with_filter(Filter::contains("name", "an"));

    paginate(&executor, &request).await.unwrap();

    let clauses = executor.seen_clauses.lock().unwrap();
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0], "WHERE status = $1 AND lower(name) LIKE $2");
    assert_eq!(clauses[0], clauses[1]);
}

#[tokio::test]
async fn count_failure_short_circuits_without_a_data_query() {
    let mut executor = FixtureExecutor::with_rows(25);
    executor.fail_count = true;
    let request = PageRequest::new(1, 10);

    let err = paginate(&executor, &request).await.unwrap_err();

    assert!(matches!(err, PagestoreError::Database(_)));
    assert_eq!(executor.calls(), (1, 0));
}

#[tokio::test]
async fn find_failure_surfaces_the_database_error() {
    let mut executor = FixtureExecutor::with_rows(25);
    executor.fail_find = true;
    let request = PageRequest::new(1, 10);

    let err = paginate(&executor, &request).await.unwrap_err();

    assert!(matches!(err, PagestoreError::Database(_)));
    assert_eq!(executor.calls(), (1, 1));
}

#[tokio::test]
async fn repeated_identical_requests_are_idempotent() {
    let executor = FixtureExecutor::with_rows(42);
    let request = PageRequest::new(3, 10)
        .with_sort(SortSpec::new("name", SortOrder::Asc))
        .with_filter(Filter::in_list("status", "active,stale"));

    let first = paginate(&executor, &request).await.unwrap();
    let second = paginate(&executor, &request).await.unwrap();

    assert_eq!(first, second);
    // Re-derive the bounds from the returned total; they must agree
    let bounds = PageBounds::compute(request.page, request.limit, first.total_rows);
    assert_eq!(bounds.from_row, first.from_row);
    assert_eq!(bounds.to_row, first.to_row);
    assert_eq!(bounds.total_pages, first.total_pages);
}
