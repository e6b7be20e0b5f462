//! Flat-file backend: one pretty-printed JSON document per order.

use crate::model::{Order, OrderNumber};
use crate::store::{OrderStore, StoreError};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{error, info, instrument};

/// Serializes whole orders (customer and lines included) into
/// `Order_<number>.json` files under a configured directory.
///
/// Writing an order number that already has a file replaces the file. I/O
/// trouble is reported as a failed write, never as a panic.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    output_dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store writing into `output_dir`. The directory is expected
    /// to exist; a missing directory surfaces as a write failure.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The file an order with this number is persisted to.
    pub fn file_path(&self, order_number: OrderNumber) -> PathBuf {
        self.output_dir.join(format!("Order_{order_number}.json"))
    }
}

#[async_trait]
impl OrderStore for JsonFileStore {
    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    async fn write(&self, order: &Order) -> Result<(), StoreError> {
        let path = self.file_path(order.order_number);
        let document = serde_json::to_string_pretty(order)?;

        match tokio::fs::write(&path, document).await {
            Ok(()) => {
                info!(path = %path.display(), "order saved to JSON");
                Ok(())
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to save order to JSON");
                Err(StoreError::Io(e))
            }
        }
    }

    /// The file backend has no external dependency to lose.
    async fn is_available(&self) -> bool {
        true
    }
}
