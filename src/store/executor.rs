//! Generic store implementations
//!
//! This module provides the sqlx-backed store for paginated queries.

use super::core::RecordStore;
use crate::errors::PagestoreError;
use crate::query_builder::{PageRequest, PageResult, SortSpec, SqlGenerator, WhereClause};
use crate::traits::{QueryExecutor, RecordCollection};
use async_trait::async_trait;

#[async_trait]
impl<T> QueryExecutor for RecordStore<T>
where
    T: RecordCollection + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Unpin,
{
    type Record = T;

    fn columns(&self) -> &'static [&'static str] {
        T::columns()
    }

    async fn count_matching(&self, clause: &WhereClause) -> Result<i64, PagestoreError> {
        let table_name = T::table_name();

        // Pre-allocate capacity to avoid reallocations
        let mut query = String::with_capacity(24 + table_name.len() + clause.sql.len());
        query.push_str("SELECT COUNT(*) FROM ");
        query.push_str(table_name);
        if !clause.is_empty() {
            query.push(' ');
            query.push_str(&clause.sql);
        }

        crate::debug_log!("[COUNT] {}", query);

        let mut count_query = sqlx::query_scalar::<_, i64>(&query);
        for value in &clause.params {
            count_query = count_query.bind(value.as_str());
        }

        let count = count_query.fetch_one(&self.db_pool).await?;
        Ok(count)
    }

    async fn find_matching(
        &self,
        clause: &WhereClause,
        sort: Option<&SortSpec>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<T>, PagestoreError> {
        let table_name = T::table_name();
        let order_clause = SqlGenerator::build_order_clause(sort);
        let limit_clause = SqlGenerator::build_limit_clause(limit, offset);

        let mut query = String::with_capacity(
            32 + table_name.len() + clause.sql.len() + order_clause.len() + limit_clause.len(),
        );
        query.push_str("SELECT * FROM ");
        query.push_str(table_name);
        if !clause.is_empty() {
            query.push(' ');
            query.push_str(&clause.sql);
        }
        if !order_clause.is_empty() {
            query.push(' ');
            query.push_str(&order_clause);
        }
        query.push(' ');
        query.push_str(&limit_clause);

        crate::debug_log!("[FIND] {}", query);

        let mut find_query = sqlx::query_as::<_, T>(&query);
        for value in &clause.params {
            find_query = find_query.bind(value.as_str());
        }

        let records = find_query.fetch_all(&self.db_pool).await?;
        Ok(records)
    }
}

impl<T> RecordStore<T>
where
    T: RecordCollection + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Unpin,
{
    /// Run a paginated query for this collection. See [`paginate`](crate::paginate).
    pub async fn paginate(&self, request: &PageRequest) -> Result<PageResult<T>, PagestoreError> {
        crate::paginate::paginate(self, request).await
    }
}
