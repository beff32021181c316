//! CLI entry point for lootbot.

mod cli;

use clap::Parser;
use lootbot::backend::{HttpBackend, LootboxBackend};
use lootbot::command::CommandRegistry;
use lootbot::config::load_config_with_diagnostics;
use lootbot::console::run_console;
use lootbot::logging::init_logging;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_logging(args.verbose);

    let loaded = match load_config_with_diagnostics(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    for adjustment in &loaded.diagnostics.adjustments {
        warn!(%adjustment, "config adjusted");
    }
    let mut config = loaded.config;

    // Apply CLI overrides.
    if let Some(url) = args.backend_url.as_deref().map(str::trim) {
        if url.is_empty() {
            eprintln!("error: --backend-url must not be empty");
            std::process::exit(1);
        }
        config.backend.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(lang) = args.lang.as_deref().map(str::trim) {
        if lang.is_empty() {
            eprintln!("error: --lang must not be empty");
            std::process::exit(1);
        }
        config.bot.lang = lang.to_string();
    }

    info!(
        source = %loaded.diagnostics.source,
        backend = %config.backend.base_url,
        lang = %config.bot.lang,
        "config loaded"
    );

    let backend: Arc<dyn LootboxBackend> = Arc::new(HttpBackend::new(&config.backend));
    let registry = match CommandRegistry::with_default_commands(backend, &config.bot) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    if let Err(e) = run_console(&registry, stdin, &mut stdout, !args.no_color).await {
        error!(error = %e, "console loop failed");
        std::process::exit(1);
    }
}
