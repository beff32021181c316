//! Default configuration constants.
//!
//! Callers share these constants instead of duplicating literals.

/// Base URL of the loot-box backend service.
pub(super) const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:8080";
/// Timeout for one backend request.
pub(super) const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
/// Total attempts per backend call; `1` disables retries.
pub(super) const DEFAULT_BACKEND_MAX_ATTEMPTS: u32 = 1;
/// Base delay for exponential retry backoff.
pub(super) const DEFAULT_BACKEND_INITIAL_BACKOFF_MS: u64 = 250;
/// Ceiling for retry backoff.
pub(super) const DEFAULT_BACKEND_MAX_BACKOFF_MS: u64 = 8_000;
/// Language tag sent with every draw and search.
pub(super) const DEFAULT_LANG: &str = "zh-sg";
/// Maximum number of names returned by `box search`.
pub(super) const DEFAULT_SEARCH_LIMIT: u32 = 10;
/// Deadline for reading one image attachment from local storage.
pub(super) const DEFAULT_ATTACHMENT_READ_TIMEOUT_SECS: u64 = 10;
/// File name looked up in the working directory and the global config dir.
pub(super) const CONFIG_FILE_NAME: &str = "lootbot.toml";
/// Directory under the XDG config root holding the global config.
pub(super) const CONFIG_DIR_NAME: &str = "lootbot";
