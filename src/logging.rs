//! Logging setup
//!
//! Library code logs through `tracing` macros. The binary installs a
//! `fmt` subscriber writing to stderr, so log lines never interleave with
//! the console menu on stdout.
//!
//! The subscriber goes in before configuration is resolved, at the default
//! level, so warnings about config files and environment values are shown.
//! [`LogHandle::set_level`] then applies the configured level.
//!
//! `RUST_LOG` takes precedence when set:
//!
//! ```bash
//! RUST_LOG=debug quickbite
//! RUST_LOG=quickbite::infrastructure=trace quickbite
//! ```

use is_terminal::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::config::LogLevel;

/// Build the filter: `RUST_LOG` if set and valid, otherwise `level`.
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()))
}

/// Changes the level of the installed subscriber
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    pub fn set_level(&self, level: LogLevel) {
        if let Err(e) = self.filter.reload(env_filter(level)) {
            tracing::warn!(error = %e, "cannot change log level");
        }
    }
}

/// Install the global subscriber. A second call leaves the first in place.
pub fn setup_tracing(level: LogLevel) -> LogHandle {
    let (filter, handle) = reload::Layer::new(env_filter(level));
    let stderr_is_terminal = std::io::stderr().is_terminal();
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(stderr_is_terminal)
                .with_target(false),
        )
        .try_init();
    LogHandle { filter: handle }
}
