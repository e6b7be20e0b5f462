//! Persistence capabilities and the interchangeable storage backends.
//!
//! The processor only ever talks to the [`OrderStore`] capability; which
//! concrete backend sits behind it is decided per write by
//! [`factory::create_store`] from a database-availability answer.
//!
//! # Main Components
//!
//! - [`OrderStore`] - Capability every storage backend implements
//! - [`AvailabilityProbe`] - The host-supplied database reachability check
//! - [`SqliteStore`](sqlite::SqliteStore) - Transactional two-table backend
//! - [`JsonFileStore`](json::JsonFileStore) - One JSON document per order
//! - [`StoreConfig`] - Connection string and output directory
//!
//! # Testing
//!
//! See the [`mock`] module for probe doubles that answer availability checks
//! without touching a real database.

pub mod error;
pub mod factory;
pub mod json;
pub mod mock;
pub mod sqlite;

pub use error::*;
pub use factory::*;
pub use json::*;
pub use sqlite::*;

use crate::model::Order;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

/// The single capability the order processor depends on: persist one order,
/// and answer whether this backend is currently usable.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists one order. Failures are reported through `Err`; a backend
    /// never panics for storage trouble.
    async fn write(&self, order: &Order) -> Result<(), StoreError>;

    /// Whether this backend can currently accept writes. The file backend is
    /// always available; the database backend probes its connection.
    async fn is_available(&self) -> bool;
}

/// Host-supplied collaborator answering whether the durable store is
/// reachable right now.
///
/// Keeping this behind a trait decouples the processor from any real
/// connectivity mechanism; tests inject a [`mock::MockProbe`], hosts can
/// inject a [`sqlite::SqliteStore`] directly (it probes itself).
#[async_trait]
pub trait AvailabilityProbe: Send + Sync {
    async fn is_database_available(&self) -> bool;
}

/// Storage settings supplied by the host.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite connection string (`sqlite:` URL). Required whenever the
    /// availability probe answers true.
    pub connection_string: String,
    /// Directory that receives `Order_<number>.json` documents.
    pub output_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            connection_string: String::new(),
            output_dir: PathBuf::from("."),
        }
    }
}
