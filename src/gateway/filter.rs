//! # Filter Expressions
//!
//! Equality predicates over a single column.

/// An equality filter: `column = ?`
///
/// The column always comes from a static resource descriptor. The value is
/// whatever the caller supplied, bound as-is; `None` binds SQL NULL, which
/// equals nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    /// Column to filter on
    pub column: &'static str,

    /// Value bound for the comparison
    pub value: Option<String>,
}

impl FilterExpr {
    /// Create an equality filter
    pub fn eq(column: &'static str, value: Option<String>) -> Self {
        Self { column, value }
    }

    /// SQL fragment with a positional placeholder
    pub fn to_sql(&self) -> String {
        format!("{} = ?", self.column)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Ordering on a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn asc(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }

    pub fn to_sql(&self) -> String {
        format!("ORDER BY {} {}", self.column, self.direction.as_str())
    }
}
