//! Order processing orchestration.
//!
//! [`OrderProcessor`] ties the pieces together for one order: ask the
//! injected [`AvailabilityProbe`] whether the database is reachable, obtain
//! the matching backend from the factory, and dispatch the write.

use crate::model::Order;
use crate::store::{create_store, AvailabilityProbe, OrderStore, StoreConfig, StoreError};
use std::sync::Arc;
use tracing::{error, instrument};

/// Processes finalized orders through whichever backend is currently usable.
///
/// The probe is a required collaborator and is supplied at construction; the
/// store configuration travels with the processor so backend selection needs
/// nothing else at call time.
pub struct OrderProcessor {
    probe: Arc<dyn AvailabilityProbe>,
    config: StoreConfig,
}

impl OrderProcessor {
    /// Creates a processor around an availability probe and store settings.
    pub fn new(probe: Arc<dyn AvailabilityProbe>, config: StoreConfig) -> Self {
        Self { probe, config }
    }

    /// Persists one order through the currently selected backend.
    ///
    /// # Return contract
    /// Returns `Ok(true)` once a backend write has been dispatched, even when
    /// that write itself failed; a failed write is logged and dropped, not
    /// propagated. Only configuration errors from backend selection (an
    /// available database with an empty connection string) surface as `Err`.
    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    pub async fn process_order(&self, order: &Order) -> Result<bool, StoreError> {
        let db_available = self.probe.is_database_available().await;
        let store = create_store(db_available, &self.config)?;

        if let Err(e) = store.write(order).await {
            error!(
                order_number = %order.order_number,
                error = %e,
                "backend write failed; order was not persisted"
            );
        }

        Ok(true)
    }
}
