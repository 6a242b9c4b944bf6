//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - CSV-backed restaurant store and its record parsers

pub mod repositories;

pub use repositories::CsvRestaurantStore;
