//! OrderStatus value object - lifecycle state of an order
//!
//! - `Placed`: counted towards daily collections
//! - `Cancelled`: kept on record, never counted
//!
//! Statuses loaded from `order_details.csv` are free text; anything other
//! than the two known literals is kept verbatim as `Other`.

use std::convert::Infallible;
use std::str::FromStr;

/// Lifecycle state of an order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Placed,
    Cancelled,
    /// Unrecognised status text from a backing file
    Other(String),
}

impl OrderStatus {
    /// Returns true only for the exact `Placed` status
    pub fn is_placed(&self) -> bool {
        matches!(self, OrderStatus::Placed)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(text) => text,
        }
    }
}

impl From<&str> for OrderStatus {
    /// Matching is exact and case-sensitive: `placed` is `Other("placed")`.
    fn from(s: &str) -> Self {
        match s {
            "Placed" => OrderStatus::Placed,
            "Cancelled" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OrderStatus::from(s))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
