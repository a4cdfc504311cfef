//! Detection of a leading `@charset` rule.

use super::char_stream::CharStream;
use super::helper::extract_string_value;
use super::lexer::tokenize;
use super::token::TokenKind;
use crate::reader::DoNothingParseErrorHandler;

/// Only this many characters are scanned for the rule.
const SCAN_LIMIT: usize = 1024;

/// Find the charset name declared by a leading `@charset "name";` rule.
///
/// Only whitespace and comments may precede the rule. The text may have
/// been decoded with a provisional single-byte encoding, since charset
/// names are plain ASCII.
pub fn declared_charset(text: &str) -> Option<String> {
    let head: String = text.chars().take(SCAN_LIMIT).collect();
    let stream = CharStream::new(&head, 8);
    let tokens = tokenize(&stream, &DoNothingParseErrorHandler).ok()?;

    let mut significant = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Whitespace && t.kind != TokenKind::Cdo);

    let at = significant.next()?;
    if at.kind != TokenKind::AtKeyword || !at.text.eq_ignore_ascii_case("@charset") {
        return None;
    }
    let name = significant.next()?;
    if name.kind != TokenKind::String {
        return None;
    }
    let end = significant.next()?;
    if end.kind != TokenKind::Semicolon {
        return None;
    }
    let charset = extract_string_value(&name.text).trim();
    if charset.is_empty() {
        None
    } else {
        Some(charset.to_string())
    }
}
