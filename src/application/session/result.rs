//! Session result types

use crate::domain::value_objects::LoadStatus;

/// Outcome of a cancel request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The order now has status `Cancelled` (also when it already had it)
    Cancelled,
    /// No order with that id exists
    NotFound,
}

/// How each backing store loaded at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub menu_items: LoadStatus,
    pub orders: LoadStatus,
    pub collection_reports: LoadStatus,
}

impl LoadSummary {
    /// True when all three stores loaded without skipping anything
    pub fn is_complete(&self) -> bool {
        [self.menu_items, self.orders, self.collection_reports]
            .iter()
            .all(|s| *s == LoadStatus::Complete)
    }
}
