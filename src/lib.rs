//! QuickBite - order and collections tracker for a single restaurant
//!
//! The menu, past orders and past collection reports are read from three
//! delimited files at startup. Orders are then placed, cancelled and
//! totalled through an interactive console for the rest of the session.
//! Nothing is written back to the files.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod parse;
pub mod presentation;

// Re-exports for convenience
pub use application::{CancelOutcome, LoadSummary, Session};
pub use config::{Config, DataConfig, DisplayConfig, LogLevel};
pub use domain::entities::{CollectionReport, LineItem, MenuCatalog, MenuItem, Order};
pub use domain::ports::RestaurantStore;
pub use domain::value_objects::{LoadReport, LoadStatus, OrderStatus, SkippedLine};
pub use error::{QuickBiteError, QuickBiteResult};
pub use infrastructure::CsvRestaurantStore;
pub use presentation::{Cli, Console};
