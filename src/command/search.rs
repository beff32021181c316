//! `box search <pattern>`: list box names similar to a pattern.

use super::replies::{reply_for_error, SEARCH_EMPTY_TEXT, SEARCH_RESULT_HEADER};
use super::CommandHandler;
use crate::backend::{LootboxBackend, SearchItem, SearchQuery};
use crate::config::BotConfig;
use crate::error::CommandError;
use crate::message::{InputSegment, OutputSegment, Reply};
use crate::parse::parse_search_args;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Subcommand suffixes answered by [`SearchCommand`].
pub const SEARCH_SUFFIXES: [&str; 1] = ["search"];

pub struct SearchCommand {
    backend: Arc<dyn LootboxBackend>,
    language: String,
    limit: u32,
}

impl SearchCommand {
    pub fn new(backend: Arc<dyn LootboxBackend>, bot: &BotConfig) -> Self {
        Self {
            backend,
            language: bot.lang.clone(),
            limit: bot.search_limit,
        }
    }

    pub async fn run(&self, args: &[InputSegment]) -> Result<Reply, CommandError> {
        let pattern = parse_search_args(args)?;
        let query = SearchQuery {
            pat: pattern,
            lang: self.language.clone(),
            limit: self.limit,
        };
        let items = self.backend.search(&query).await?;
        debug!(pattern = %query.pat, hits = items.len(), "search finished");
        Ok(vec![OutputSegment::PlainText(format_items(&items, self.limit))])
    }
}

/// One name per line under a header, at most `limit` names.
fn format_items(items: &[SearchItem], limit: u32) -> String {
    if items.is_empty() {
        return SEARCH_EMPTY_TEXT.to_string();
    }
    let mut lines = vec![SEARCH_RESULT_HEADER.to_string()];
    lines.extend(
        items
            .iter()
            .take(limit as usize)
            .map(|item| item.name.clone()),
    );
    lines.join("\n")
}

#[async_trait]
impl CommandHandler for SearchCommand {
    async fn handle(&self, args: &[InputSegment]) -> Reply {
        match self.run(args).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "search failed");
                vec![OutputSegment::PlainText(reply_for_error(&err))]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{RandRequest, RawEntry};
    use crate::command::replies::{BACKEND_UNAVAILABLE_TEXT, WRONG_PARAM_TEXT};
    use crate::error::BackendError;
    use std::sync::Mutex;

    struct FixedSearch {
        items: Vec<SearchItem>,
        fail: bool,
        seen: Mutex<Vec<SearchQuery>>,
    }

    #[async_trait]
    impl LootboxBackend for FixedSearch {
        async fn rand(&self, _request: &RandRequest) -> Result<Vec<RawEntry>, BackendError> {
            Ok(Vec::new())
        }

        async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchItem>, BackendError> {
            self.seen.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(BackendError::status(503, "busy".into(), None));
            }
            Ok(self.items.clone())
        }
    }

    fn item(name: &str, score: f64) -> SearchItem {
        SearchItem {
            name: name.to_string(),
            score,
        }
    }

    fn command(items: Vec<SearchItem>, fail: bool) -> (SearchCommand, Arc<FixedSearch>) {
        let backend = Arc::new(FixedSearch {
            items,
            fail,
            seen: Mutex::new(Vec::new()),
        });
        let bot = BotConfig {
            search_limit: 2,
            ..BotConfig::default()
        };
        (SearchCommand::new(backend.clone(), &bot), backend)
    }

    #[tokio::test]
    async fn lists_names_up_to_the_limit() {
        let (cmd, backend) = command(
            vec![item("超级补给箱", 0.9), item("补给箱", 0.7), item("圣诞补给箱", 0.5)],
            false,
        );
        let reply = cmd.handle(&[InputSegment::text("补给箱")]).await;
        assert_eq!(
            reply,
            vec![OutputSegment::text(format!(
                "{SEARCH_RESULT_HEADER}\n超级补给箱\n补给箱"
            ))]
        );
        let seen = backend.seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![SearchQuery {
                pat: "补给箱".into(),
                lang: "zh-sg".into(),
                limit: 2,
            }]
        );
    }

    #[tokio::test]
    async fn empty_result_says_so() {
        let (cmd, _) = command(Vec::new(), false);
        let reply = cmd.handle(&[InputSegment::text("zzz")]).await;
        assert_eq!(reply, vec![OutputSegment::text(SEARCH_EMPTY_TEXT)]);
    }

    #[tokio::test]
    async fn missing_pattern_is_a_usage_error() {
        let (cmd, backend) = command(Vec::new(), false);
        let reply = cmd.handle(&[]).await;
        assert_eq!(reply, vec![OutputSegment::text(WRONG_PARAM_TEXT)]);
        assert!(backend.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn backend_failure_is_reported() {
        let (cmd, _) = command(Vec::new(), true);
        let reply = cmd.handle(&[InputSegment::text("补给箱")]).await;
        assert_eq!(reply, vec![OutputSegment::text(BACKEND_UNAVAILABLE_TEXT)]);
    }
}
