//! Configuration data model.
//!
//! This module holds struct definitions plus default values. Source discovery
//! and env overrides live in sibling modules so precedence stays centralized.

use serde::Deserialize;
use std::time::Duration;

use super::defaults::{
    DEFAULT_ATTACHMENT_READ_TIMEOUT_SECS, DEFAULT_BACKEND_BASE_URL,
    DEFAULT_BACKEND_INITIAL_BACKOFF_MS, DEFAULT_BACKEND_MAX_ATTEMPTS,
    DEFAULT_BACKEND_MAX_BACKOFF_MS, DEFAULT_BACKEND_TIMEOUT_SECS, DEFAULT_LANG,
    DEFAULT_SEARCH_LIMIT,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub bot: BotConfig,
}

/// Loot-box backend connection settings under `[backend]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Service root; `/lootbox/rand` and `/lootbox/search` are appended.
    pub base_url: String,
    /// Per-request timeout covering connect, send and body read.
    pub timeout_secs: u64,
    /// Upper bound on total attempts, including the initial request.
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
            timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            max_attempts: DEFAULT_BACKEND_MAX_ATTEMPTS,
            initial_backoff_ms: DEFAULT_BACKEND_INITIAL_BACKOFF_MS,
            max_backoff_ms: DEFAULT_BACKEND_MAX_BACKOFF_MS,
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }
}

/// Command behavior settings under `[bot]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Language tag forwarded to the backend.
    pub lang: String,
    pub search_limit: u32,
    pub attachment_read_timeout_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            attachment_read_timeout_secs: DEFAULT_ATTACHMENT_READ_TIMEOUT_SECS,
        }
    }
}

impl BotConfig {
    pub fn attachment_read_timeout(&self) -> Duration {
        Duration::from_secs(self.attachment_read_timeout_secs)
    }
}

/// Diagnostics captured while resolving runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    /// Human-readable description of the file the config came from.
    pub source: String,
    /// Values that were out of range and got clamped.
    pub adjustments: Vec<String>,
}

/// Configuration payload plus load-time diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub diagnostics: ConfigDiagnostics,
}
