//! Error types for the persistence layer.

use thiserror::Error;

/// Errors that can occur while selecting or driving a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The caller claimed the database is available but supplied no
    /// connection string. This fails fast at selection time; it is never
    /// treated as a fallback trigger.
    #[error("connection string cannot be empty when the database is available")]
    MissingConnectionString,

    /// The SQLite connection could not be parsed or opened.
    #[error("database connection failed: {0}")]
    Connection(String),

    /// A statement failed inside the write transaction.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The order could not be encoded as a JSON document.
    #[error("order serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The order document could not be written to disk.
    #[error("file write failed: {0}")]
    Io(#[from] std::io::Error),
}
