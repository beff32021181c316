//! Unified error types for the bot.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ArgumentError
// ---------------------------------------------------------------------------

/// Rejections raised while decoding command arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The arguments carried emoji, mentions, images or other rich content.
    NonPlainText,
    /// Wrong token count, or the amount was not an integer.
    WrongArgumentCount,
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPlainText => write!(f, "arguments contain non-plain-text segments"),
            Self::WrongArgumentCount => write!(f, "wrong argument count or malformed amount"),
        }
    }
}

impl std::error::Error for ArgumentError {}

// ---------------------------------------------------------------------------
// BackendError
// ---------------------------------------------------------------------------

/// Errors from the loot-box backend RPC.
#[derive(Debug)]
pub enum BackendError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the backend.
    Status {
        code: u16,
        body: String,
        retry_after_secs: Option<u64>,
    },
    /// The backend answered, but with a status other than `ok`.
    NonOk {
        status: String,
        brief: Option<String>,
    },
    /// The body was not the expected JSON envelope.
    InvalidResponse(String),
}

impl BackendError {
    pub fn status(code: u16, body: String, retry_after_secs: Option<u64>) -> Self {
        Self::Status {
            code,
            body,
            retry_after_secs,
        }
    }

    /// HTTP status code, when the error came from a non-2xx reply.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Server-requested delay before retrying, if any.
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::Status {
                retry_after_secs, ..
            } => *retry_after_secs,
            _ => None,
        }
    }

    /// True when the backend could not be reached or did not speak the protocol.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, Self::NonOk { .. })
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status { code, body, .. } => write!(f, "status {code}: {body}"),
            Self::NonOk { status, brief } => match brief {
                Some(brief) => write!(f, "backend replied `{status}`: {brief}"),
                None => write!(f, "backend replied `{status}`"),
            },
            Self::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// RenderError
// ---------------------------------------------------------------------------

/// Errors while turning backend entries into output segments.
#[derive(Debug)]
pub enum RenderError {
    /// An image entry pointed at a file that could not be read.
    Attachment {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Reading the attachment exceeded the configured deadline.
    Timeout { path: PathBuf },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attachment { path, source } => {
                write!(f, "failed to read attachment `{}`: {source}", path.display())
            }
            Self::Timeout { path } => {
                write!(f, "timed out reading attachment `{}`", path.display())
            }
        }
    }
}

impl std::error::Error for RenderError {}

// ---------------------------------------------------------------------------
// RegistryError
// ---------------------------------------------------------------------------

/// Errors when binding commands at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Another command already answers to this spelling.
    DuplicateSpelling(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSpelling(spelling) => {
                write!(f, "command spelling `{spelling}` is already registered")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

// ---------------------------------------------------------------------------
// CommandError
// ---------------------------------------------------------------------------

/// Top-level error for one command invocation.
#[derive(Debug)]
pub enum CommandError {
    Argument(ArgumentError),
    Backend(BackendError),
    Render(RenderError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(e) => write!(f, "argument: {e}"),
            Self::Backend(e) => write!(f, "backend: {e}"),
            Self::Render(e) => write!(f, "render: {e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ArgumentError> for CommandError {
    fn from(e: ArgumentError) -> Self {
        Self::Argument(e)
    }
}

impl From<BackendError> for CommandError {
    fn from(e: BackendError) -> Self {
        Self::Backend(e)
    }
}

impl From<RenderError> for CommandError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}
