//! # Order System
//!
//! A small order-processing library: build an [`Order`](model::Order) from a
//! customer and line items, compute its tax, tariff, and total amounts, and
//! persist it through one of two interchangeable backends — a transactional
//! SQLite store or a flat JSON document per order — selected at runtime by a
//! database-availability check.
//!
//! ## Module Tour
//!
//! ### 1. The Domain ([`model`])
//! Pure data plus derived calculations: [`Customer`](model::Customer),
//! [`StockItem`](model::StockItem), [`OrderLine`](model::OrderLine), and the
//! [`Order`](model::Order) aggregate with its calculation engine. Amounts use
//! `rust_decimal` throughout; no floating point touches money.
//!
//! ### 2. The Capability ([`store`])
//! The [`OrderStore`](store::OrderStore) trait and its two implementations,
//! [`SqliteStore`](store::SqliteStore) and
//! [`JsonFileStore`](store::JsonFileStore), together with the
//! [`create_store`](store::create_store) factory that picks one from an
//! availability answer.
//!
//! ### 3. The Orchestrator ([`processor`])
//! [`OrderProcessor`](processor::OrderProcessor) consumes a host-supplied
//! [`AvailabilityProbe`](store::AvailabilityProbe), selects a backend, and
//! dispatches the write.
//!
//! ### 4. The Plumbing ([`lifecycle`])
//! Observability setup ([`setup_tracing`](lifecycle::setup_tracing)).
//!
//! ## Quick Start
//!
//! ```ignore
//! use order_system::model::{Customer, Order, OrderLine, OrderNumber, StockItem};
//! use order_system::processor::OrderProcessor;
//! use order_system::store::StoreConfig;
//!
//! let number = OrderNumber(1);
//! let mut order = Order::new(number, Utc::now(), Customer::new("John Doe", "123-456-7890"));
//! order.add_line(OrderLine::new(number, 1, laptop, 1, true));
//! order.calculate_totals();
//!
//! let processor = OrderProcessor::new(probe, StoreConfig::default());
//! processor.process_order(&order).await?;
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod lifecycle;
pub mod model;
pub mod processor;
pub mod store;
