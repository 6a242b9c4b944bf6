//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{QuickBiteError, QuickBiteResult};

use super::types::{Config, LogLevel};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "quickbite.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> QuickBiteResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| QuickBiteError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration.
///
/// An explicit file must load. Otherwise `./quickbite.toml` and then the
/// user config (`<config dir>/quickbite/config.toml`) are tried; a
/// discovered file that fails to parse is logged and skipped.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> QuickBiteResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        debug!(file = %path.display(), "loading explicit config");
        return load_with_warnings(path);
    }

    let candidates = [
        Some(cwd.join(LOCAL_CONFIG_FILE)),
        user_config_file(),
    ];

    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_file() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok(loaded) => {
                debug!(file = %candidate.display(), "loaded config");
                return Ok(loaded);
            }
            Err(e) => warn!(file = %candidate.display(), error = %e, "ignoring config file"),
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (QUICKBITE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // QUICKBITE_DATA_DIR
    if let Some(dir) = lookup("QUICKBITE_DATA_DIR").filter(|d| !d.trim().is_empty()) {
        config.data.dir = PathBuf::from(dir);
    }

    // QUICKBITE_LOG
    if let Some(level) = lookup("QUICKBITE_LOG") {
        match LogLevel::parse(&level) {
            Some(level) => config.log.level = level,
            None => warn!(value = %level, "ignoring unknown QUICKBITE_LOG level"),
        }
    }

    config
}

fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quickbite").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "data",
        "dir",
        "menu_items",
        "order_details",
        "collection_report",
        "display",
        "restaurant_name",
        "currency_symbol",
        "log",
        "level",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
