//! The order aggregate and its amount calculations.
//!
//! An [`Order`] owns its [`Customer`] and an insertion-ordered list of
//! [`OrderLine`]s. The three monetary fields (`tax_amount`, `tariff_amount`,
//! `total_amount`) are derived state: they are zero until
//! [`Order::calculate_totals`] runs and go stale when lines change, so callers
//! must re-run the calculation after any mutation.

use crate::model::{Customer, StockItem};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Flat tax rate applied to the order subtotal (10%).
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Tariff rate applied to the subtotal of each electronic line (5%).
pub const TARIFF_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Monetary amounts are rounded to two fraction digits.
const MONEY_SCALE: u32 = 2;

/// Type-safe identifier for orders.
///
/// Also names the persisted artifacts: the JSON backend derives its file name
/// from this number, and the SQLite backend uses it as the join key between
/// the header and detail tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderNumber(pub u32);

impl From<u32> for OrderNumber {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One priced item entry within an order.
///
/// Whether a line counts as electronic is supplied by the caller when the
/// line is built; the core never derives it from the stock identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderLine {
    pub order_number: OrderNumber,
    pub detail_number: u32,
    pub stock_item: StockItem,
    pub quantity: u32,
    pub is_electronic: bool,
}

impl OrderLine {
    /// Creates a new OrderLine.
    ///
    /// # Arguments
    /// * `order_number` - Order this line belongs to
    /// * `detail_number` - Position of the line within the order
    /// * `stock_item` - The priced item; the line takes ownership
    /// * `quantity` - Units ordered
    /// * `is_electronic` - Whether the electronics tariff applies to this line
    pub fn new(
        order_number: OrderNumber,
        detail_number: u32,
        stock_item: StockItem,
        quantity: u32,
        is_electronic: bool,
    ) -> Self {
        Self {
            order_number,
            detail_number,
            stock_item,
            quantity,
            is_electronic,
        }
    }

    /// The line subtotal: unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.stock_item.price * Decimal::from(self.quantity)
    }

    /// The tariff contributed by this line: 5% of the line subtotal for
    /// electronic lines, zero otherwise.
    pub fn line_tariff(&self) -> Decimal {
        if self.is_electronic {
            self.line_total() * TARIFF_RATE
        } else {
            Decimal::ZERO
        }
    }
}

/// A customer order: header data plus an append-only list of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub order_number: OrderNumber,
    pub date_time: DateTime<Utc>,
    pub customer: Customer,
    /// Derived; valid only after [`Order::calculate_totals`].
    pub tax_amount: Decimal,
    /// Derived; valid only after [`Order::calculate_totals`].
    pub tariff_amount: Decimal,
    /// Derived; valid only after [`Order::calculate_totals`].
    pub total_amount: Decimal,
    #[serde(rename = "OrderDetails")]
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Creates an empty order for the given customer.
    ///
    /// All monetary fields start at zero; add lines with [`Order::add_line`]
    /// and then run [`Order::calculate_totals`].
    pub fn new(order_number: OrderNumber, date_time: DateTime<Utc>, customer: Customer) -> Self {
        Self {
            order_number,
            date_time,
            customer,
            tax_amount: Decimal::ZERO,
            tariff_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            lines: Vec::new(),
        }
    }

    /// Appends a line to the order. Lines keep their insertion order.
    pub fn add_line(&mut self, line: OrderLine) {
        self.lines.push(line);
    }

    /// The pre-tax, pre-tariff sum over all lines.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// Recomputes tax, tariff, and total from the current lines.
    ///
    /// Every call starts from scratch, so repeating it without changing the
    /// lines yields identical amounts. The tax applies to the subtotal only;
    /// the tariff is accumulated per electronic line and is not itself taxed.
    pub fn calculate_totals(&mut self) {
        let mut subtotal = Decimal::ZERO;
        let mut tariff = Decimal::ZERO;

        for line in &self.lines {
            subtotal += line.line_total();
            tariff += line.line_tariff();
        }

        self.tax_amount = (subtotal * TAX_RATE).round_dp(MONEY_SCALE);
        self.tariff_amount = tariff.round_dp(MONEY_SCALE);
        self.total_amount = subtotal + self.tax_amount + self.tariff_amount;
    }
}
