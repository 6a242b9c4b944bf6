//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - The interactive console menu
//!
//! ## Structure
//!
//! - `cli` - Command-line flags
//! - `console` - Read-decide-act loop over a session

pub mod cli;
pub mod console;

pub use cli::Cli;
pub use console::{Console, MenuChoice};
