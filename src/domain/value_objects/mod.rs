//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod load_report;
mod order_status;

pub use load_report::{LoadReport, LoadStatus, SkippedLine};
pub use order_status::OrderStatus;
