//! Command surface: handlers, alias specs and the dispatch registry.
//!
//! Handlers are async trait objects bound to a [`CommandSpec`]. The registry
//! is built once at startup and only read afterwards, so one instance can be
//! shared across concurrent invocations.

pub mod draw;
pub mod help;
pub mod replies;
pub mod search;
pub mod spec;

use crate::backend::LootboxBackend;
use crate::config::BotConfig;
use crate::error::RegistryError;
use crate::message::{InputSegment, Reply};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub use draw::RandCommand;
pub use help::HelpCommand;
pub use search::SearchCommand;
pub use spec::{CommandName, CommandSpec};

/// Optional markers accepted in front of a command (`/box`, `.box`, `box`).
pub const COMMAND_STARTS: [&str; 2] = ["/", "."];

// ---------------------------------------------------------------------------
// CommandHandler trait
// ---------------------------------------------------------------------------

/// Handler bound to one registered command.
///
/// `handle` receives the argument segments that followed the command name
/// and always produces a reply; failures become plain-text replies.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, args: &[InputSegment]) -> Reply;
}

// ---------------------------------------------------------------------------
// Command registry
// ---------------------------------------------------------------------------

struct Binding {
    spec: CommandSpec,
    spellings: Vec<String>,
    handler: Arc<dyn CommandHandler>,
}

/// Command matched against a line of input.
pub struct ResolvedCommand<'r, 't> {
    pub canonical: &'r CommandName,
    pub handler: &'r Arc<dyn CommandHandler>,
    /// Text after the command name and its separating space.
    pub rest: &'t str,
}

/// Reply produced by [`CommandRegistry::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub command: CommandName,
    pub reply: Reply,
}

/// Registry of command bindings.
pub struct CommandRegistry {
    bindings: Vec<Binding>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Registry with `box`, `box help` and `box search` over one backend.
    pub fn with_default_commands(
        backend: Arc<dyn LootboxBackend>,
        bot: &BotConfig,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(
            CommandSpec::build(&draw::RAND_SUFFIXES),
            Arc::new(RandCommand::new(backend.clone(), bot)),
        )?;
        registry.register(CommandSpec::build(&help::HELP_SUFFIXES), Arc::new(HelpCommand))?;
        registry.register(
            CommandSpec::build(&search::SEARCH_SUFFIXES),
            Arc::new(SearchCommand::new(backend, bot)),
        )?;
        Ok(registry)
    }

    /// Bind a handler to every spelling of `spec`.
    pub fn register(
        &mut self,
        spec: CommandSpec,
        handler: Arc<dyn CommandHandler>,
    ) -> Result<(), RegistryError> {
        let spellings = spec.spellings();
        if let Some(taken) = spellings
            .iter()
            .find(|spelling| self.bindings.iter().any(|b| b.spellings.contains(spelling)))
        {
            return Err(RegistryError::DuplicateSpelling(taken.clone()));
        }
        self.bindings.push(Binding {
            spec,
            spellings,
            handler,
        });
        Ok(())
    }

    /// Registered specs, in registration order.
    pub fn specs(&self) -> impl Iterator<Item = &CommandSpec> {
        self.bindings.iter().map(|b| &b.spec)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Match the longest registered spelling at the start of `text`.
    pub fn resolve<'r, 't>(&'r self, text: &'t str) -> Option<ResolvedCommand<'r, 't>> {
        let text = text.trim_start();
        let body = COMMAND_STARTS
            .iter()
            .find_map(|marker| text.strip_prefix(marker))
            .unwrap_or(text);

        let mut best: Option<(usize, &Binding, &'t str)> = None;
        for binding in &self.bindings {
            for spelling in &binding.spellings {
                let Some(rest) = strip_command(body, spelling) else {
                    continue;
                };
                if best.map_or(true, |(len, _, _)| spelling.len() > len) {
                    best = Some((spelling.len(), binding, rest));
                }
            }
        }

        best.map(|(_, binding, rest)| ResolvedCommand {
            canonical: &binding.spec.canonical,
            handler: &binding.handler,
            rest,
        })
    }

    /// Route one incoming message. Returns `None` when no command matches.
    ///
    /// The command is looked up in the leading text segment; whatever follows
    /// it (rest of that text plus later segments) becomes the arguments.
    pub async fn dispatch(&self, input: &[InputSegment]) -> Option<Dispatched> {
        let (first, tail) = input.split_first()?;
        let resolved = self.resolve(first.as_text()?)?;

        let mut args = Vec::with_capacity(input.len());
        if !resolved.rest.is_empty() {
            args.push(InputSegment::text(resolved.rest));
        }
        args.extend(tail.iter().cloned());

        info!(command = %resolved.canonical, "dispatching");
        let reply = resolved.handler.handle(&args).await;
        Some(Dispatched {
            command: resolved.canonical.clone(),
            reply,
        })
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `body` minus `spelling` and one separating space, if it starts with it.
fn strip_command<'t>(body: &'t str, spelling: &str) -> Option<&'t str> {
    let rest = body.strip_prefix(spelling)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix(spec::COMMAND_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::OutputSegment;

    struct EchoCommand(&'static str);

    #[async_trait]
    impl CommandHandler for EchoCommand {
        async fn handle(&self, args: &[InputSegment]) -> Reply {
            let mut reply = vec![OutputSegment::text(self.0)];
            reply.extend(args.iter().map(|seg| match seg {
                InputSegment::Text(text) => OutputSegment::text(text.clone()),
                InputSegment::Rich { kind } => OutputSegment::text(format!("<{kind}>")),
            }));
            reply
        }
    }

    fn registry() -> CommandRegistry {
        let mut r = CommandRegistry::new();
        r.register(CommandSpec::build(&[""]), Arc::new(EchoCommand("rand")))
            .unwrap();
        r.register(CommandSpec::build(&["help"]), Arc::new(EchoCommand("help")))
            .unwrap();
        r
    }

    #[test]
    fn new_registry_is_empty() {
        assert!(CommandRegistry::new().is_empty());
        assert!(CommandRegistry::default().is_empty());
    }

    #[test]
    fn duplicate_spelling_is_rejected() {
        let mut r = registry();
        let err = r
            .register(CommandSpec::build(&["help"]), Arc::new(EchoCommand("again")))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateSpelling("box help".into()));
        assert_eq!(r.specs().count(), 2);
    }

    #[test]
    fn resolve_prefers_longest_spelling() {
        let r = registry();
        let help = r.resolve("box help").expect("help");
        assert_eq!(*help.canonical, CommandName::new("box", "help"));
        assert_eq!(help.rest, "");

        let rand = r.resolve("lootbox 超级补给箱 5").expect("rand");
        assert_eq!(*rand.canonical, CommandName::new("box", ""));
        assert_eq!(rand.rest, "超级补给箱 5");
    }

    #[test]
    fn resolve_accepts_start_markers() {
        let r = registry();
        for input in ["/box 超级补给箱 5", ".box 超级补给箱 5", "  box 超级补给箱 5"] {
            let resolved = r.resolve(input).expect("resolved");
            assert_eq!(resolved.rest, "超级补给箱 5", "input: {input}");
        }
        assert_eq!(
            r.resolve("/lootbox help").map(|c| c.canonical.clone()),
            Some(CommandName::new("box", "help"))
        );
    }

    #[test]
    fn resolve_requires_word_boundary() {
        let r = registry();
        assert!(r.resolve("boxes 5").is_none());
        assert!(r.resolve("hello").is_none());
        // Only one separator is consumed; the parser sees the rest verbatim.
        assert_eq!(r.resolve("box  a 1").map(|c| c.rest), Some(" a 1"));
    }

    #[tokio::test]
    async fn dispatch_forwards_remaining_segments() {
        let r = registry();
        let out = r
            .dispatch(&[InputSegment::text("box 超级补给箱 "), InputSegment::rich("face")])
            .await
            .expect("dispatched");
        assert_eq!(out.command, CommandName::new("box", ""));
        assert_eq!(
            out.reply,
            vec![
                OutputSegment::text("rand"),
                OutputSegment::text("超级补给箱 "),
                OutputSegment::text("<face>"),
            ]
        );
    }

    #[tokio::test]
    async fn dispatch_ignores_unmatched_or_rich_leading_input() {
        let r = registry();
        assert!(r.dispatch(&[InputSegment::text("hi there")]).await.is_none());
        assert!(r.dispatch(&[InputSegment::rich("face")]).await.is_none());
        assert!(r.dispatch(&[]).await.is_none());
    }

    #[test]
    fn default_commands_claim_distinct_spellings() {
        struct NoBackend;

        #[async_trait]
        impl LootboxBackend for NoBackend {
            async fn rand(
                &self,
                _request: &crate::backend::RandRequest,
            ) -> Result<Vec<crate::backend::RawEntry>, crate::error::BackendError> {
                Ok(Vec::new())
            }

            async fn search(
                &self,
                _query: &crate::backend::SearchQuery,
            ) -> Result<Vec<crate::backend::SearchItem>, crate::error::BackendError> {
                Ok(Vec::new())
            }
        }

        let r = CommandRegistry::with_default_commands(Arc::new(NoBackend), &BotConfig::default())
            .expect("default commands");
        let canonical: Vec<String> = r.specs().map(|s| s.canonical.spelling()).collect();
        assert_eq!(canonical, vec!["box", "box help", "box search"]);
        assert!(r.resolve("lootbox search 补给").is_some());
    }
}
