//! Configuration for the `tasklist` host.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Values that fail to parse fall back to the default.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use tasklist_runtime::StoreConfig;

/// How input lines are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// `add Buy milk`, `toggle <id>`, `delete <id>`
    #[default]
    Text,
    /// `{"kind":"add","payload":"Buy milk"}`
    Json,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown input format \"{other}\"")),
        }
    }
}

/// Host configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// How stdin lines are decoded
    pub input_format: InputFormat,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Whether rendered lines include task ids
    pub show_ids: bool,
    /// How long shutdown waits for in-flight actions
    pub shutdown_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_format: InputFormat::Text,
            log_filter: "tasklist=info,tasklist_runtime=warn".to_string(),
            show_ids: true,
            shutdown_timeout: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// - `TASKLIST_INPUT_FORMAT`: `text` (default) or `json`
    /// - `TASKLIST_LOG`: default tracing filter
    /// - `TASKLIST_SHOW_IDS`: `true` (default) or `false`
    /// - `TASKLIST_SHUTDOWN_TIMEOUT_MS`: default 5000
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            input_format: lookup("TASKLIST_INPUT_FORMAT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.input_format),
            log_filter: lookup("TASKLIST_LOG").unwrap_or(defaults.log_filter),
            show_ids: lookup("TASKLIST_SHOW_IDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.show_ids),
            shutdown_timeout: lookup("TASKLIST_SHUTDOWN_TIMEOUT_MS")
                .and_then(|s| s.parse::<u64>().ok())
                .map_or(defaults.shutdown_timeout, Duration::from_millis),
        }
    }

    /// Runtime configuration for the task store
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.shutdown_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.input_format, InputFormat::Text);
        assert!(config.show_ids);
        assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
        assert_eq!(config.log_filter, "tasklist=info,tasklist_runtime=warn");
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TASKLIST_INPUT_FORMAT", "JSON"),
            ("TASKLIST_SHOW_IDS", "false"),
            ("TASKLIST_SHUTDOWN_TIMEOUT_MS", "250"),
            ("TASKLIST_LOG", "debug"),
        ]));
        assert_eq!(config.input_format, InputFormat::Json);
        assert!(!config.show_ids);
        assert_eq!(config.log_filter, "debug");

        let store = config.store_config();
        assert_eq!(store.shutdown_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("TASKLIST_INPUT_FORMAT", "yaml"),
            ("TASKLIST_SHOW_IDS", "maybe"),
            ("TASKLIST_SHUTDOWN_TIMEOUT_MS", "-1"),
        ]));
        assert_eq!(config.input_format, InputFormat::Text);
        assert!(config.show_ids);
        assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
    }
}
