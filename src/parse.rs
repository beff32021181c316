//! Command argument decoding.

use crate::backend::RandRequest;
use crate::error::ArgumentError;
use crate::message::{extract_plain_text, InputSegment};

/// Separator between command arguments. Splitting is literal: repeated
/// separators yield empty tokens, which then fail the count check.
pub const ARG_SEPARATOR: char = ' ';

/// Decode `<box_name> <amount>` into a draw request.
///
/// Every segment must be plain text. The text of all segments is joined and
/// split on single spaces; exactly two tokens are accepted and the second
/// must be a base-10 integer.
pub fn parse_rand_args(
    segments: &[InputSegment],
    language: &str,
) -> Result<RandRequest, ArgumentError> {
    let text = plain_text_only(segments)?;
    let tokens: Vec<&str> = text.split(ARG_SEPARATOR).collect();
    let [box_name, amount_text] = tokens.as_slice() else {
        return Err(ArgumentError::WrongArgumentCount);
    };
    if box_name.is_empty() {
        return Err(ArgumentError::WrongArgumentCount);
    }
    let amount = parse_amount(amount_text).ok_or(ArgumentError::WrongArgumentCount)?;

    Ok(RandRequest {
        language: language.to_string(),
        box_name: (*box_name).to_string(),
        amount,
    })
}

/// Base-10 integer, accepting full-width digits and signs as typed by CJK
/// input methods (`１００`, `－３`).
fn parse_amount(raw: &str) -> Option<i64> {
    let ascii: String = raw
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            '＋' => '+',
            '－' => '-',
            other => other,
        })
        .collect();
    ascii.parse::<i64>().ok()
}

/// Decode the single free-text pattern of `box search <pattern>`.
///
/// The pattern may contain spaces; only surrounding whitespace is trimmed.
pub fn parse_search_args(segments: &[InputSegment]) -> Result<String, ArgumentError> {
    let text = plain_text_only(segments)?;
    let pattern = text.trim();
    if pattern.is_empty() {
        return Err(ArgumentError::WrongArgumentCount);
    }
    Ok(pattern.to_string())
}

/// Reject any rich segment, then return the joined text.
pub fn plain_text_only(segments: &[InputSegment]) -> Result<String, ArgumentError> {
    if !segments.iter().all(InputSegment::is_text) {
        return Err(ArgumentError::NonPlainText);
    }
    Ok(extract_plain_text(segments))
}
