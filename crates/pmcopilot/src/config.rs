use std::env;

const DEFAULT_SQLITE_PATH: &str = "pmcopilot.db";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file (default: "pmcopilot.db")
    pub sqlite_path: String,
    /// Answer 404 when an update matches no row (default: false).
    ///
    /// When disabled, updates of unknown ids succeed with 200 and echo the
    /// request, affecting zero rows.
    pub strict_updates: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "pmcopilot.db")
    /// - `STRICT_UPDATES` - `1`, `true`, `yes` or `on` enables strict updates (default: off)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            sqlite_path: lookup("SQLITE_PATH")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string()),
            strict_updates: lookup("STRICT_UPDATES")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sqlite_path: DEFAULT_SQLITE_PATH.to_string(),
            strict_updates: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
