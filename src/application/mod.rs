//! Application Layer
//!
//! Use cases that orchestrate domain objects. The console in
//! `presentation` drives these; they never read input or print.

pub mod session;

pub use session::{CancelOutcome, LoadSummary, Session};
