//! Translation of backend reply entries into chat output segments.

use crate::backend::RawEntry;
use crate::error::RenderError;
use crate::message::OutputSegment;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Decoded backend entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandMessage {
    /// Path of a rendered image on the bot host's local storage.
    Image(String),
    Text(String),
    /// Tag not recognized, or the entry was not a single string-valued key.
    Unknown,
}

#[derive(Clone, Copy)]
enum EntryTag {
    Image,
    Text,
}

const ENTRY_TAGS: [(&str, EntryTag); 2] = [("image", EntryTag::Image), ("text", EntryTag::Text)];

impl RandMessage {
    /// Decode one entry. Never fails: anything unrecognized is `Unknown`.
    pub fn parse(entry: &RawEntry) -> Self {
        let Some((key, value)) = entry.first_pair() else {
            return Self::Unknown;
        };
        let Some(value) = value.as_str() else {
            return Self::Unknown;
        };
        let tag = ENTRY_TAGS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, tag)| *tag);
        match tag {
            Some(EntryTag::Image) => Self::Image(value.to_string()),
            Some(EntryTag::Text) => Self::Text(value.to_string()),
            None => Self::Unknown,
        }
    }
}

/// Turn backend entries into output segments, in order.
///
/// Unknown entries are dropped with a warning. An unreadable image fails the
/// whole reply.
pub async fn render_entries(
    entries: &[RawEntry],
    read_timeout: Duration,
) -> Result<Vec<OutputSegment>, RenderError> {
    let mut segments = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match RandMessage::parse(entry) {
            RandMessage::Image(path) => {
                segments.push(load_attachment(path, read_timeout).await?);
            }
            RandMessage::Text(content) => segments.push(OutputSegment::PlainText(content)),
            RandMessage::Unknown => {
                warn!(index, entry = %entry.0, "dropping unrecognized backend entry");
            }
        }
    }
    Ok(segments)
}

async fn load_attachment(
    path: String,
    read_timeout: Duration,
) -> Result<OutputSegment, RenderError> {
    let bytes = match tokio::time::timeout(read_timeout, tokio::fs::read(&path)).await {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(source)) => {
            return Err(RenderError::Attachment {
                path: PathBuf::from(path),
                source,
            })
        }
        Err(_) => {
            return Err(RenderError::Timeout {
                path: PathBuf::from(path),
            })
        }
    };
    Ok(OutputSegment::Attachment {
        filename: path,
        bytes,
    })
}
