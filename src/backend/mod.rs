//! Client side of the loot-box backend RPC.
//!
//! The layer is split into cohesive modules:
//! - `types`: wire payloads and the status envelope
//! - `transport`: request dispatch and envelope decoding
//! - `retry`: bounded retry policy
//! - `client`: the reqwest-backed [`HttpBackend`]

use crate::error::BackendError;
use async_trait::async_trait;

mod client;
mod retry;
mod transport;
pub mod types;

pub use client::HttpBackend;
pub use types::{RandRequest, RandResponse, RawEntry, SearchItem, SearchQuery};

/// Backend interface used by the command handlers.
///
/// Tests provide deterministic implementations without network calls while
/// the production path uses [`HttpBackend`].
#[async_trait]
pub trait LootboxBackend: Send + Sync {
    /// Draw from a loot box. Returns the undecoded reply entries in order.
    async fn rand(&self, request: &RandRequest) -> Result<Vec<RawEntry>, BackendError>;

    /// Fuzzy-search box names, best match first.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchItem>, BackendError>;
}
