use serde::{Deserialize, Serialize};

/// The customer who owns an order.
///
/// A plain value type: once constructed it is never mutated by the core, and
/// `Clone` yields an independent copy (an order duplicated with its customer
/// never shares state with the original).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

impl Customer {
    /// Creates a new Customer.
    ///
    /// # Arguments
    /// * `name` - Customer display name
    /// * `phone` - Contact phone number, stored verbatim
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}
