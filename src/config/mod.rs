//! Configuration module for QuickBite
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (QUICKBITE_*)
//! 3. `--config` file, else `./quickbite.toml`, else the user config
//!    (`<config dir>/quickbite/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_overrides_from, ConfigWarning, LOCAL_CONFIG_FILE};
pub use types::{Config, DataConfig, DisplayConfig, LogConfig, LogLevel};
