//! `box help`: usage text.

use super::replies::USAGE_TEXT;
use super::CommandHandler;
use crate::message::{InputSegment, OutputSegment, Reply};
use async_trait::async_trait;

/// Subcommand suffixes answered by [`HelpCommand`].
pub const HELP_SUFFIXES: [&str; 1] = ["help"];

/// Replies with the fixed usage text; arguments are ignored.
pub struct HelpCommand;

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn handle(&self, _args: &[InputSegment]) -> Reply {
        vec![OutputSegment::text(USAGE_TEXT)]
    }
}
