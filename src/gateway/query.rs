//! # Select Queries
//!
//! The single read query a gateway operation issues. Identifiers are all
//! `&'static str` taken from resource descriptors; request data only ever
//! reaches the query as bound parameters.

use super::filter::{FilterExpr, OrderBy};

/// A `SELECT *` over one table with conjunctive equality filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    table: &'static str,
    filters: Vec<FilterExpr>,
    order: Option<OrderBy>,
}

impl SelectQuery {
    /// Select every row of `table` in storage order
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: None,
        }
    }

    /// Add an equality filter, ANDed with the others
    pub fn filter(mut self, filter: FilterExpr) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the ordering
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order = Some(order);
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Render the query text with `?` placeholders
    pub fn to_sql(&self) -> String {
        let mut sql = format!("SELECT * FROM {}", self.table);

        if !self.filters.is_empty() {
            let predicates: Vec<String> = self.filters.iter().map(FilterExpr::to_sql).collect();
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }

        if let Some(order) = &self.order {
            sql.push(' ');
            sql.push_str(&order.to_sql());
        }

        sql
    }

    /// Parameters in placeholder order
    pub fn params(&self) -> Vec<Option<&str>> {
        self.filters.iter().map(|f| f.value.as_deref()).collect()
    }
}
