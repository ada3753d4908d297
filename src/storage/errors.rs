//! Storage error types
//!
//! Every storage error collapses to a single failure path at the gateway, so
//! the message is the only thing that matters here. It is surfaced verbatim.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Error raised by the SQLite engine (missing table, bad file, ...)
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// The shared connection mutex was poisoned by a panicking holder
    #[error("storage connection lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_message_is_verbatim() {
        let err = StorageError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(err.to_string(), rusqlite::Error::InvalidQuery.to_string());
    }

    #[test]
    fn test_lock_poisoned_message() {
        assert_eq!(
            StorageError::LockPoisoned.to_string(),
            "storage connection lock poisoned"
        );
    }
}
