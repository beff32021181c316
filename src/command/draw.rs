//! `box <name> <amount>`: draw from a loot box.

use super::replies::reply_for_error;
use super::CommandHandler;
use crate::backend::LootboxBackend;
use crate::config::BotConfig;
use crate::error::CommandError;
use crate::message::{InputSegment, OutputSegment, Reply};
use crate::parse::parse_rand_args;
use crate::render::render_entries;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Subcommand suffixes answered by [`RandCommand`].
pub const RAND_SUFFIXES: [&str; 1] = [""];

/// Parses the arguments, asks the backend for a draw, renders the reply.
pub struct RandCommand {
    backend: Arc<dyn LootboxBackend>,
    language: String,
    read_timeout: Duration,
}

impl RandCommand {
    pub fn new(backend: Arc<dyn LootboxBackend>, bot: &BotConfig) -> Self {
        Self {
            backend,
            language: bot.lang.clone(),
            read_timeout: bot.attachment_read_timeout(),
        }
    }

    /// Full pipeline with typed failures.
    pub async fn run(&self, args: &[InputSegment]) -> Result<Reply, CommandError> {
        let request = parse_rand_args(args, &self.language)?;
        info!(box_name = %request.box_name, amount = request.amount, "drawing");
        let entries = self.backend.rand(&request).await?;
        let reply = render_entries(&entries, self.read_timeout).await?;
        debug!(segments = reply.len(), "draw rendered");
        Ok(reply)
    }
}

#[async_trait]
impl CommandHandler for RandCommand {
    async fn handle(&self, args: &[InputSegment]) -> Reply {
        match self.run(args).await {
            Ok(reply) => reply,
            Err(err) => {
                match &err {
                    CommandError::Argument(_) => debug!(error = %err, "rejected draw arguments"),
                    _ => warn!(error = %err, "draw failed"),
                }
                vec![OutputSegment::PlainText(reply_for_error(&err))]
            }
        }
    }
}
