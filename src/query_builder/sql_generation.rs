//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

use crate::query_builder::filter::{Filter, FilterAction};
use crate::query_builder::ordering::SortSpec;

/// Rendered WHERE predicate with its positional parameters.
///
/// `sql` uses `$1..$n` placeholders; `params` holds the bound values in
/// placeholder order. Filter values never appear in the SQL text itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    pub sql: String,
    pub params: Vec<String>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build WHERE clause from filter triples.
    ///
    /// `Equals` and `In` filters form one AND-joined group, `Contains`
    /// filters a second; the two non-empty groups are ANDed together.
    /// Filters only ever combine with AND.
    pub fn build_where_clause(filters: &[Filter]) -> WhereClause {
        if filters.is_empty() {
            return WhereClause::default();
        }

        let mut params = Vec::new();
        let mut param_counter = 1;

        let mut equality_conditions = Vec::new();
        for filter in filters.iter().filter(|f| f.is_equality()) {
            equality_conditions.push(Self::build_equality_condition(
                filter,
                &mut params,
                &mut param_counter,
            ));
        }

        let mut substring_conditions = Vec::new();
        for filter in filters.iter().filter(|f| !f.is_equality()) {
            params.push(format!("%{}%", filter.query.to_lowercase()));
            substring_conditions.push(format!("lower({}) LIKE ${}", filter.column, param_counter));
            param_counter += 1;
        }

        let mut groups = Vec::new();
        if !equality_conditions.is_empty() {
            groups.push(equality_conditions.join(" AND "));
        }
        if !substring_conditions.is_empty() {
            groups.push(substring_conditions.join(" AND "));
        }

        WhereClause {
            sql: format!("WHERE {}", groups.join(" AND ")),
            params,
        }
    }

    fn build_equality_condition(
        filter: &Filter,
        params: &mut Vec<String>,
        param_counter: &mut i32,
    ) -> String {
        match filter.action {
            FilterAction::Equals => {
                params.push(filter.query.clone());
                let param = format!("${}", param_counter);
                *param_counter += 1;
                format!("{} = {}", filter.column, param)
            }
            FilterAction::In => {
                let values: Vec<&str> = filter
                    .query
                    .split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .collect();

                if values.is_empty() {
                    return "1=0".to_string(); // Empty IN clause
                }

                let placeholders: Vec<String> = values
                    .iter()
                    .map(|value| {
                        params.push((*value).to_string());
                        let param = format!("${}", param_counter);
                        *param_counter += 1;
                        param
                    })
                    .collect();

                format!("{} IN ({})", filter.column, placeholders.join(", "))
            }
            // Contains filters are rendered in the substring group
            FilterAction::Contains => unreachable!("contains is not an equality condition"),
        }
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(sort: Option<&SortSpec>) -> String {
        match sort {
            Some(spec) => format!("ORDER BY {} {}", spec.column, spec.order.to_sql()),
            None => "".to_string(),
        }
    }

    /// Build LIMIT/OFFSET clause
    pub fn build_limit_clause(limit: i64, offset: i64) -> String {
        format!("LIMIT {} OFFSET {}", limit, offset)
    }
}
