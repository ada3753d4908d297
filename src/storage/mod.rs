//! Storage seam for the gateway
//!
//! The gateway never owns data. It hands a [`SelectQuery`] to a
//! [`RecordSource`] and gets back rows as JSON objects, one per row, with
//! every column passed through under its own name.
//!
//! [`SqliteStore`] is the production source: one shared connection opened
//! once at startup and injected into request handlers.

mod errors;
mod sqlite;

pub use errors::{StorageError, StorageResult};
pub use sqlite::SqliteStore;

use serde_json::Value;

use crate::gateway::SelectQuery;

/// A read-only source of rows.
///
/// Implementations must issue exactly one query per call and bind every
/// parameter rather than splicing it into the query text.
pub trait RecordSource: Send + Sync {
    /// Run `query` and return the matching rows in result order
    fn fetch(&self, query: &SelectQuery) -> StorageResult<Vec<Value>>;
}
