use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced catalog entry referenced by order lines.
///
/// `price` uses [`Decimal`] so currency amounts carry exact two-fraction-digit
/// semantics with no floating-point drift. Prices are expected to be
/// non-negative; quantities live on the order line, not here.
///
/// Value type: `Clone` produces an independent copy, so a duplicated order
/// line owns its own `StockItem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItem {
    /// Catalog identifier. Callers may encode classification conventions in
    /// this string; the core treats it as opaque text.
    #[serde(rename = "StockID")]
    pub stock_id: String,
    pub name: String,
    pub price: Decimal,
}

impl StockItem {
    /// Creates a new StockItem.
    pub fn new(stock_id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            stock_id: stock_id.into(),
            name: name.into(),
            price,
        }
    }
}
