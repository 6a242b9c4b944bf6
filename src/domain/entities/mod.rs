//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `MenuItem` / `MenuCatalog` - the menu
//! - `Order` - a customer order with its line items
//! - `CollectionReport` - a day's takings

mod collection_report;
mod menu_item;
mod order;

pub use collection_report::CollectionReport;
pub use menu_item::{MenuCatalog, MenuItem};
pub use order::{LineItem, Order};
