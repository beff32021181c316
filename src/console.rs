//! Line-oriented console adapter.
//!
//! Stands in for a chat platform: every stdin line is one incoming message,
//! and reply segments are printed to stdout. Rich content can be simulated
//! with `[:kind]` markers, e.g. `box 超级补给箱 [:face] 5`.

use crate::command::CommandRegistry;
use crate::message::{InputSegment, OutputSegment};
use crossterm::style::Stylize;
use std::borrow::Cow;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

const RICH_OPEN: &str = "[:";
const RICH_CLOSE: char = ']';

/// Split a console line into text and simulated rich segments.
pub fn parse_console_line(line: &str) -> Vec<InputSegment> {
    let mut segments = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find(RICH_OPEN) {
        let after = &rest[start + RICH_OPEN.len()..];
        let Some(end) = after.find(RICH_CLOSE) else {
            break;
        };
        if start > 0 {
            segments.push(InputSegment::text(&rest[..start]));
        }
        segments.push(InputSegment::rich(after[..end].trim()));
        rest = &after[end + RICH_CLOSE.len_utf8()..];
    }
    if !rest.is_empty() {
        segments.push(InputSegment::text(rest));
    }
    segments
}

/// Printable form of one reply segment.
pub fn format_segment(segment: &OutputSegment, color: bool) -> String {
    match segment {
        OutputSegment::PlainText(text) => text.clone(),
        OutputSegment::Attachment { filename, bytes } => {
            let line = format!("[attachment] {filename} ({} bytes)", bytes.len());
            if color {
                line.cyan().to_string()
            } else {
                line
            }
        }
    }
}

/// Read messages until EOF, dispatching each through `registry`.
///
/// Lines that match no command are ignored, like any chat message that is
/// not addressed to the bot. Invalid UTF-8 is decoded lossily so one bad
/// line never ends the loop.
pub async fn run_console<R, W>(
    registry: &CommandRegistry,
    mut reader: R,
    out: &mut W,
    color: bool,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let decoded = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = decoded {
            warn!("input line is not valid UTF-8; invalid bytes replaced");
        }
        let line = decoded.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if line.trim().is_empty() {
            continue;
        }
        let segments = parse_console_line(line);
        let Some(dispatched) = registry.dispatch(&segments).await else {
            debug!(line, "no command matched");
            continue;
        };
        for segment in &dispatched.reply {
            writeln!(out, "{}", format_segment(segment, color))?;
        }
        out.flush()?;
    }
    Ok(())
}
