//! Error types for QuickBite
//!
//! Library code returns `QuickBiteResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for QuickBite operations
pub type QuickBiteResult<T> = Result<T, QuickBiteError>;

/// Main error type for QuickBite operations
#[derive(Error, Debug)]
pub enum QuickBiteError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited record could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A token that must be an integer was not one
    #[error("invalid {field} '{value}': expected an integer")]
    InvalidNumber { field: &'static str, value: String },

    /// A token that must be a decimal amount was not one
    #[error("invalid {field} '{value}': expected a decimal amount")]
    InvalidDecimal { field: &'static str, value: String },

    /// Date not in `yyyy-MM-dd` form
    #[error("invalid date '{value}': expected yyyy-MM-dd")]
    InvalidDate { value: String },

    /// Record ended before a required field
    #[error("missing field '{field}'")]
    MissingField { field: &'static str },

    /// Menu items and quantities of an order do not line up
    #[error("order has {items} menu item(s) but {quantities} quantity value(s)")]
    LineItemMismatch { items: usize, quantities: usize },

    /// Every order id up to `u32::MAX` is taken
    #[error("no order id left after {highest}")]
    OrderIdExhausted { highest: u32 },

    /// Order total does not fit in a decimal amount
    #[error("order total is too large to represent")]
    AmountOverflow,

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Standard input ended while a prompt was waiting for an answer
    #[error("input closed while waiting for {prompt}")]
    InputClosed { prompt: &'static str },
}
