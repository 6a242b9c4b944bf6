//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod csv_store;
pub mod records;

pub use csv_store::{
    CsvRestaurantStore, COLLECTION_REPORT_FILE, MENU_ITEMS_FILE, ORDER_DETAILS_FILE,
};
