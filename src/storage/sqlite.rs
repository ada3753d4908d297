//! SQLite-backed record source.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection, OpenFlags, Row};
use serde_json::{Map, Number, Value};

use super::errors::{StorageError, StorageResult};
use super::RecordSource;
use crate::gateway::SelectQuery;

/// Shared SQLite connection.
///
/// Cloning is cheap and every clone talks to the same connection.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens an existing database file.
    ///
    /// The file is not created if missing: the schema is owned elsewhere,
    /// and an empty database would only turn every request into a 500.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        Ok(Self::from_connection(conn))
    }

    /// Opens an empty in-memory database (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::from_connection(Connection::open_in_memory()?))
    }

    /// Wraps an already-open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs a batch of statements, used to load fixtures.
    pub fn execute_batch(&self, sql: &str) -> StorageResult<()> {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        conn.execute_batch(sql)?;
        Ok(())
    }
}

impl RecordSource for SqliteStore {
    fn fetch(&self, query: &SelectQuery) -> StorageResult<Vec<Value>> {
        let sql = query.to_sql();
        tracing::debug!(sql = %sql, params = query.params().len(), "executing query");

        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut stmt = conn.prepare(&sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let rows = stmt
            .query_map(params_from_iter(query.params()), |row| {
                row_to_json(row, &columns)
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}

/// Converts a row into a JSON object keyed by column name, in column order.
fn row_to_json(row: &Row<'_>, columns: &[String]) -> rusqlite::Result<Value> {
    let mut object = Map::with_capacity(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        object.insert(name.clone(), column_to_json(row.get_ref(idx)?));
    }
    Ok(Value::Object(object))
}

fn column_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => real_to_json(f),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::from(bytes.to_vec()),
    }
}

/// Whole-number reals serialize as integers (`300.0` becomes `300`), the
/// shortest JSON form of the number. JSON has no NaN or infinity.
fn real_to_json(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        return Value::from(f as i64);
    }
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}
