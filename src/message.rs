//! Chat message segments exchanged with the hosting platform.
//!
//! Input arrives as a sequence of [`InputSegment`]s (plain text mixed with
//! emoji, mentions, pictures ...). Replies go out as [`OutputSegment`]s, which
//! an adapter maps onto whatever message-composition primitive its platform
//! exposes.

use std::fmt;

/// One unit of command input as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSegment {
    Text(String),
    /// Anything that is not plain text. `kind` is the platform's own tag
    /// (`"face"`, `"at"`, `"image"`, ...) and is kept only for logging.
    Rich { kind: String },
}

impl InputSegment {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn rich(kind: impl Into<String>) -> Self {
        Self::Rich { kind: kind.into() }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Rich { .. } => None,
        }
    }
}

/// Concatenate the plain-text parts of a segment list.
pub fn extract_plain_text(segments: &[InputSegment]) -> String {
    segments.iter().filter_map(InputSegment::as_text).collect()
}

/// One unit of reply output.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum OutputSegment {
    /// Binary file sent alongside the reply.
    Attachment { filename: String, bytes: Vec<u8> },
    PlainText(String),
}

impl OutputSegment {
    pub fn text(content: impl Into<String>) -> Self {
        Self::PlainText(content.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::PlainText(text) => Some(text),
            Self::Attachment { .. } => None,
        }
    }
}

// Attachment payloads can be megabytes; print their size instead.
impl fmt::Debug for OutputSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attachment { filename, bytes } => f
                .debug_struct("Attachment")
                .field("filename", filename)
                .field("len", &bytes.len())
                .finish(),
            Self::PlainText(text) => f.debug_tuple("PlainText").field(text).finish(),
        }
    }
}

/// Ordered reply produced by one command invocation. May be empty.
pub type Reply = Vec<OutputSegment>;
