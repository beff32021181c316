//! Environment overrides and value normalization.
//!
//! `LOOTBOT_*` variables override whatever the config file resolved to.

use crate::error::ConfigError;

use super::{Config, ConfigDiagnostics};

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty_env(env_lookup, "LOOTBOT_BACKEND_URL") {
        config.backend.base_url = url;
    }
    if let Some(lang) = non_empty_env(env_lookup, "LOOTBOT_LANG") {
        config.bot.lang = lang;
    }
    if let Some(timeout) = non_empty_env(env_lookup, "LOOTBOT_TIMEOUT_SECS") {
        config.backend.timeout_secs = parse_secs("LOOTBOT_TIMEOUT_SECS", &timeout)?;
    }
    if let Some(timeout) = non_empty_env(env_lookup, "LOOTBOT_READ_TIMEOUT_SECS") {
        config.bot.attachment_read_timeout_secs =
            parse_secs("LOOTBOT_READ_TIMEOUT_SECS", &timeout)?;
    }
    Ok(())
}

fn non_empty_env<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_secs(name: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| {
        ConfigError::Invalid(format!(
            "invalid {name} value `{raw}`: expected positive integer seconds"
        ))
    })
}

/// Clamp out-of-range values and reject settings the bot cannot run with.
pub(super) fn normalize_config(
    config: &mut Config,
    diagnostics: &mut ConfigDiagnostics,
) -> Result<(), ConfigError> {
    config.backend.base_url = config.backend.base_url.trim().trim_end_matches('/').to_string();
    if config.backend.base_url.is_empty() {
        return Err(ConfigError::Invalid(
            "backend.base_url must not be empty".to_string(),
        ));
    }
    config.bot.lang = config.bot.lang.trim().to_string();
    if config.bot.lang.is_empty() {
        return Err(ConfigError::Invalid("bot.lang must not be empty".to_string()));
    }

    // Timeouts are at least one second.
    clamp_min(
        &mut config.backend.timeout_secs,
        1,
        "backend.timeout_secs",
        diagnostics,
    );
    clamp_min(
        &mut config.bot.attachment_read_timeout_secs,
        1,
        "bot.attachment_read_timeout_secs",
        diagnostics,
    );
    if config.backend.max_attempts == 0 {
        config.backend.max_attempts = 1;
        diagnostics
            .adjustments
            .push("backend.max_attempts raised from 0 to 1".to_string());
    }
    if config.backend.max_backoff_ms < config.backend.initial_backoff_ms {
        config.backend.max_backoff_ms = config.backend.initial_backoff_ms;
        diagnostics.adjustments.push(
            "backend.max_backoff_ms raised to match backend.initial_backoff_ms".to_string(),
        );
    }
    Ok(())
}

fn clamp_min(value: &mut u64, min: u64, name: &str, diagnostics: &mut ConfigDiagnostics) {
    if *value < min {
        diagnostics
            .adjustments
            .push(format!("{name} raised from {value} to {min}", value = *value));
        *value = min;
    }
}
