//! Availability-based selection of the storage backend.

use crate::model::Order;
use crate::store::{JsonFileStore, OrderStore, SqliteStore, StoreConfig, StoreError};
use async_trait::async_trait;
use tracing::debug;

/// The closed set of backends [`create_store`] can hand out.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Sqlite(SqliteStore),
    Json(JsonFileStore),
}

#[async_trait]
impl OrderStore for StoreBackend {
    async fn write(&self, order: &Order) -> Result<(), StoreError> {
        match self {
            StoreBackend::Sqlite(store) => store.write(order).await,
            StoreBackend::Json(store) => store.write(order).await,
        }
    }

    async fn is_available(&self) -> bool {
        match self {
            StoreBackend::Sqlite(store) => store.is_available().await,
            StoreBackend::Json(store) => store.is_available().await,
        }
    }
}

/// Picks the backend for one write.
///
/// # Contract
/// - `db_available` true with an empty connection string is a caller error:
///   [`StoreError::MissingConnectionString`], no silent fallback.
/// - `db_available` true otherwise yields a [`SqliteStore`] bound to the
///   configured connection string.
/// - `db_available` false yields a [`JsonFileStore`]; the connection string
///   is ignored.
pub fn create_store(db_available: bool, config: &StoreConfig) -> Result<StoreBackend, StoreError> {
    if db_available {
        if config.connection_string.is_empty() {
            return Err(StoreError::MissingConnectionString);
        }
        debug!("database available, selecting SQLite backend");
        return Ok(StoreBackend::Sqlite(SqliteStore::new(
            config.connection_string.clone(),
        )));
    }

    debug!("database unavailable, selecting JSON file backend");
    Ok(StoreBackend::Json(JsonFileStore::new(
        config.output_dir.clone(),
    )))
}
