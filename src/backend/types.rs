//! Wire types for the loot-box backend RPC.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status string the backend uses for a successful reply.
pub const STATUS_OK: &str = "ok";

/// Decoded draw request. Serializes to `{"lang", "box_name", "amount"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandRequest {
    #[serde(rename = "lang")]
    pub language: String,
    pub box_name: String,
    /// Passed through unvalidated; the backend owns range checks.
    pub amount: i64,
}

/// One undecoded draw result, normally a single-key object such as
/// `{"Image": "/srv/render/123.png"}` or `{"Text": "..."}`.
///
/// Kept as a raw JSON value so that odd entries degrade to
/// [`RandMessage::Unknown`](crate::render::RandMessage::Unknown) instead of
/// failing the whole reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEntry(pub Value);

impl RawEntry {
    /// Build a single-key entry.
    pub fn tagged(tag: &str, value: &str) -> Self {
        let mut map = serde_json::Map::new();
        map.insert(tag.to_string(), Value::String(value.to_string()));
        Self(Value::Object(map))
    }

    /// First key/value pair of the entry in the order the backend sent them,
    /// if it is a non-empty object.
    pub fn first_pair(&self) -> Option<(&str, &Value)> {
        self.0
            .as_object()
            .and_then(|map| map.iter().next())
            .map(|(key, value)| (key.as_str(), value))
    }
}

/// Reply envelope shared by every backend endpoint.
///
/// Success: `{"status": "ok", "data": ...}`.
/// Failure: `{"status": "error", "brief": "...", "full": "..."}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: Option<T>,
    #[serde(default)]
    pub brief: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
}

/// Reply body of `/lootbox/rand`.
pub type RandResponse = Envelope<Vec<RawEntry>>;

/// Query of `/lootbox/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub pat: String,
    pub lang: String,
    pub limit: u32,
}

/// One fuzzy-match candidate returned by `/lootbox/search`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchItem {
    pub name: String,
    pub score: f64,
}
