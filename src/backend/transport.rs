//! HTTP transport helpers for backend requests.

use crate::error::BackendError;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime};

use super::types::{Envelope, STATUS_OK};

/// Build an HTTP client with timeout applied.
pub(super) fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Send a prepared request and decode the status envelope from its body.
///
/// The response (and its connection) is consumed before returning on every
/// path, so nothing outlives the call.
pub(super) async fn send<T>(request: reqwest::RequestBuilder) -> Result<Envelope<T>, BackendError>
where
    T: DeserializeOwned,
{
    let response = request.send().await?;
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let retry_after_secs = parse_retry_after_secs(response.headers());
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::status(status, body, retry_after_secs));
    }

    let body = response.text().await?;
    decode_envelope(&body)
}

/// Parse a backend body into its envelope.
pub(super) fn decode_envelope<T>(body: &str) -> Result<Envelope<T>, BackendError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| BackendError::InvalidResponse(e.to_string()))
}

/// Turn an envelope into its payload, or a typed error for non-ok replies.
pub(super) fn into_payload<T>(envelope: Envelope<T>) -> Result<T, BackendError> {
    if envelope.status != STATUS_OK {
        return Err(BackendError::NonOk {
            status: envelope.status,
            brief: envelope.brief,
        });
    }
    envelope.data.ok_or_else(|| {
        BackendError::InvalidResponse("`ok` reply is missing the `data` field".to_string())
    })
}

/// Read `Retry-After` as either delta-seconds or an HTTP date.
pub(super) fn parse_retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    let raw = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();
    if let Ok(secs) = raw.parse::<u64>() {
        return Some(secs);
    }
    let at = httpdate::parse_http_date(raw).ok()?;
    Some(
        at.duration_since(SystemTime::now())
            .map(|delta| delta.as_secs())
            .unwrap_or(0),
    )
}
