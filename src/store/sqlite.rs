//! Transactional SQLite backend.
//!
//! Each write opens its own connection, inserts one `Orders` header row and
//! one `OrderDetails` row per line inside a single transaction, and releases
//! the connection on every exit path. A failed insert rolls the whole order
//! back; a line without a stock identifier is skipped individually and the
//! rest of the order proceeds.

use crate::model::Order;
use crate::store::{AvailabilityProbe, OrderStore, StoreError};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, Sqlite, Transaction};
use std::str::FromStr;
use tracing::{error, info, instrument, warn};

const CREATE_ORDERS: &str = "CREATE TABLE IF NOT EXISTS Orders (
    OrderNumber INTEGER NOT NULL,
    DateTime TEXT NOT NULL,
    CustomerName TEXT NOT NULL,
    CustomerPhone TEXT NOT NULL,
    TaxAmount TEXT NOT NULL,
    TariffAmount TEXT NOT NULL,
    TotalAmount TEXT NOT NULL
)";

const CREATE_ORDER_DETAILS: &str = "CREATE TABLE IF NOT EXISTS OrderDetails (
    OrderNumber INTEGER NOT NULL,
    DetailNumber INTEGER NOT NULL,
    StockID TEXT NOT NULL,
    StockName TEXT NOT NULL,
    StockPrice TEXT NOT NULL,
    Quantity INTEGER NOT NULL
)";

const INSERT_ORDER: &str = "INSERT INTO Orders \
    (OrderNumber, DateTime, CustomerName, CustomerPhone, TaxAmount, TariffAmount, TotalAmount) \
    VALUES (?, ?, ?, ?, ?, ?, ?)";

const INSERT_ORDER_DETAIL: &str = "INSERT INTO OrderDetails \
    (OrderNumber, DetailNumber, StockID, StockName, StockPrice, Quantity) \
    VALUES (?, ?, ?, ?, ?, ?)";

/// Durable storage backend writing to a SQLite database.
///
/// Monetary columns are stored as canonical decimal strings and timestamps as
/// RFC 3339 text, so rows remain exact and human-readable. The two tables are
/// related by `OrderNumber` without an enforced foreign key.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    connection_string: String,
}

impl SqliteStore {
    /// Creates a store bound to a `sqlite:` connection string. The database
    /// file is created on first write if it does not exist.
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }

    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        let options = SqliteConnectOptions::from_str(&self.connection_string)
            .map_err(|e| StoreError::Connection(e.to_string()))?
            .create_if_missing(true);
        options
            .connect()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))
    }

    async fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), StoreError> {
        sqlx::query(CREATE_ORDERS).execute(&mut *conn).await?;
        sqlx::query(CREATE_ORDER_DETAILS).execute(&mut *conn).await?;
        Ok(())
    }

    /// Inserts the header row and one row per line. Runs inside the caller's
    /// transaction; any `Err` leaves the transaction ready to roll back.
    async fn insert_rows(tx: &mut Transaction<'_, Sqlite>, order: &Order) -> Result<(), StoreError> {
        sqlx::query(INSERT_ORDER)
            .bind(order.order_number.0)
            .bind(order.date_time.to_rfc3339())
            .bind(&order.customer.name)
            .bind(&order.customer.phone)
            .bind(order.tax_amount.to_string())
            .bind(order.tariff_amount.to_string())
            .bind(order.total_amount.to_string())
            .execute(&mut **tx)
            .await?;

        for line in &order.lines {
            if line.stock_item.stock_id.is_empty() {
                warn!(
                    order_number = %order.order_number,
                    detail_number = line.detail_number,
                    "skipping order line without a stock item"
                );
                continue;
            }

            sqlx::query(INSERT_ORDER_DETAIL)
                .bind(line.order_number.0)
                .bind(line.detail_number)
                .bind(&line.stock_item.stock_id)
                .bind(&line.stock_item.name)
                .bind(line.stock_item.price.to_string())
                .bind(line.quantity)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl OrderStore for SqliteStore {
    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    async fn write(&self, order: &Order) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        Self::ensure_schema(&mut conn).await?;

        let mut tx = conn.begin().await?;
        match Self::insert_rows(&mut tx, order).await {
            Ok(()) => {
                tx.commit().await?;
                info!(order_number = %order.order_number, "order and details committed");
                Ok(())
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    error!(error = %rollback, "rollback failed");
                }
                error!(order_number = %order.order_number, error = %e, "order insert rolled back");
                Err(e)
            }
        }
    }

    /// Attempts to open and immediately close a connection; any failure
    /// answers false.
    async fn is_available(&self) -> bool {
        match self.connect().await {
            Ok(conn) => {
                let _ = conn.close().await;
                true
            }
            Err(e) => {
                warn!(error = %e, "database availability check failed");
                false
            }
        }
    }
}

/// A host can use the store itself as the processor's availability probe.
#[async_trait]
impl AvailabilityProbe for SqliteStore {
    async fn is_database_available(&self) -> bool {
        self.is_available().await
    }
}
