//! Session
//!
//! Owns the menu, orders and collection reports for one run and
//! implements the three workflows:
//! - placing an order
//! - cancelling an order
//! - tracking a day's collections

mod result;
mod state;

pub use result::{CancelOutcome, LoadSummary};
pub use state::Session;
