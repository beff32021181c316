//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`LOOTBOT_BACKEND_URL`, `LOOTBOT_LANG`,
//!    `LOOTBOT_TIMEOUT_SECS`, `LOOTBOT_READ_TIMEOUT_SECS`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./lootbot.toml in the current directory
//! 4. $XDG_CONFIG_HOME/lootbot/lootbot.toml (or ~/.config/lootbot/lootbot.toml)
//! 5. Built-in defaults
//!
//! The resolved [`Config`] is read-only once the bot starts.

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use loader::{load_config, load_config_with_diagnostics};
pub use sources::config_root_dir;
pub use types::{BackendConfig, BotConfig, Config, ConfigDiagnostics, LoadedConfig};
