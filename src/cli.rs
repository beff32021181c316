//! CLI argument parsing via clap.

use clap::Parser;

/// Loot-box chat bot. Reads one message per stdin line and prints replies.
#[derive(Debug, Parser)]
#[command(name = "lootbot", version)]
pub struct Args {
    /// Path to config file (default: ./lootbot.toml or ~/.config/lootbot/lootbot.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the loot-box backend base URL.
    #[arg(long = "backend-url")]
    pub backend_url: Option<String>,

    /// Override the language tag sent with every request.
    #[arg(long = "lang")]
    pub lang: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn defaults_leave_config_untouched() {
        let args = Args::parse_from(["lootbot"]);
        assert!(args.config.is_none());
        assert!(args.backend_url.is_none());
        assert!(args.lang.is_none());
        assert!(!args.verbose);
        assert!(!args.no_color);
    }

    #[test]
    fn overrides_parse() {
        let args = Args::parse_from([
            "lootbot",
            "-c",
            "bot.toml",
            "--backend-url",
            "http://10.0.0.2:9000",
            "--lang",
            "en",
            "-v",
            "--no-color",
        ]);
        assert_eq!(args.config.as_deref(), Some("bot.toml"));
        assert_eq!(args.backend_url.as_deref(), Some("http://10.0.0.2:9000"));
        assert_eq!(args.lang.as_deref(), Some("en"));
        assert!(args.verbose);
        assert!(args.no_color);
    }
}
