//! reqwest-backed implementation of [`LootboxBackend`].

use super::retry::RetryPolicy;
use super::transport;
use super::types::{RandRequest, RawEntry, SearchItem, SearchQuery};
use super::LootboxBackend;
use crate::config::BackendConfig;
use crate::error::BackendError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::future::Future;
use tokio::time::sleep;
use tracing::{debug, warn};

const RAND_PATH: &str = "/lootbox/rand";
const SEARCH_PATH: &str = "/lootbox/search";

/// Client for the loot-box backend service.
///
/// One `reqwest::Client` is shared across calls for connection reuse; each
/// call still builds a fresh request and keeps no state between calls.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    retry_policy: RetryPolicy,
}

impl HttpBackend {
    /// Build a client from resolved backend configuration.
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http: transport::build_http_client(config.timeout()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry_policy: RetryPolicy::from_config(config),
        }
    }

    pub fn rand_url(&self) -> String {
        format!("{}{RAND_PATH}", self.base_url)
    }

    pub fn search_url(&self) -> String {
        format!("{}{SEARCH_PATH}", self.base_url)
    }

    /// Run one logical call, retrying transient failures per the policy.
    async fn call_with_retries<T, F, Fut>(
        &self,
        what: &str,
        mut attempt_fn: F,
    ) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<super::types::Envelope<T>, BackendError>>,
    {
        let mut attempt: u32 = 0;
        loop {
            let result = attempt_fn().await.and_then(transport::into_payload);
            match result {
                Ok(payload) => return Ok(payload),
                Err(err) => {
                    if !self.retry_policy.should_retry(&err, attempt) {
                        return Err(err);
                    }
                    let delay = self.retry_policy.retry_delay_for(attempt, &err);
                    warn!(
                        call = what,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "backend call failed, retrying"
                    );
                    attempt = attempt.saturating_add(1);
                    sleep(delay).await;
                }
            }
        }
    }
}

#[async_trait]
impl LootboxBackend for HttpBackend {
    async fn rand(&self, request: &RandRequest) -> Result<Vec<RawEntry>, BackendError> {
        let url = self.rand_url();
        debug!(%url, ?request, "sending draw request");
        let entries = self
            .call_with_retries("rand", || {
                transport::send::<Vec<RawEntry>>(self.http.post(&url).json(request))
            })
            .await?;
        debug!(entries = entries.len(), "draw reply decoded");
        Ok(entries)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchItem>, BackendError> {
        let url = self.search_url();
        debug!(%url, ?query, "sending search request");
        self.call_with_retries("search", || {
            transport::send::<Vec<SearchItem>>(self.http.get(&url).query(query))
        })
        .await
    }
}
