//! Line/Indent Inspector
//!
//! Reads indentation off the token stream. A *line start* is a whitespace
//! token (or inline HTML) whose text contains a line break; its indent is
//! the run of horizontal whitespace after the last break.
//!
//! `<?php` swallows the newline that follows it, so the whitespace right
//! after an open tag is read as if the tag's text were prefixed to it.

use chain_ir::{TokenBuffer, TokenKind};

#[inline]
fn is_line_break(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

#[inline]
fn is_horizontal(text: &str) -> bool {
    text.bytes().all(|b| b == b' ' || b == b'\t')
}

/// Byte offset just past the last line break in `text`.
#[inline]
fn after_last_line_break(text: &str) -> Option<usize> {
    text.bytes().rposition(is_line_break).map(|pos| pos + 1)
}

/// The indentation after the last line break of `text`.
///
/// Returns `None` if `text` has no line break, or if anything other than
/// spaces and tabs follows the last one.
pub fn trailing_indent(text: &str) -> Option<&str> {
    let start = after_last_line_break(text)?;
    let indent = &text[start..];
    is_horizontal(indent).then_some(indent)
}

/// Indentation of the line that starts at token `index`.
///
/// Returns `None` when the token is not a line start (see module docs),
/// including when `index` is out of range.
pub fn indent_at(tokens: &TokenBuffer, index: usize) -> Option<String> {
    let token = tokens.get(index)?;
    if !matches!(token.kind, TokenKind::Whitespace | TokenKind::InlineHtml) {
        return None;
    }
    if let Some(indent) = trailing_indent(token.text()) {
        return Some(indent.to_string());
    }

    // The break may live in a preceding open tag: `<?php\n` + `    `.
    let follows_open_tag = token.kind == TokenKind::Whitespace
        && index
            .checked_sub(1)
            .is_some_and(|prev| tokens.at(prev).kind == TokenKind::OpenTag);
    if !follows_open_tag || !is_horizontal(token.text()) {
        return None;
    }
    let tag = tokens.at(index - 1).text();
    let tag_indent = trailing_indent(tag)?;
    Some(format!("{tag_indent}{}", token.text()))
}

/// Shift one line break's indentation from `from` to `to`.
///
/// Only the part of the trailing indent that matches `from` is replaced;
/// extra horizontal whitespace after it is kept. Returns `None` when the
/// text has no line break or its indent does not begin with `from`.
pub fn reindent_line_break(text: &str, from: &str, to: &str) -> Option<String> {
    let start = after_last_line_break(text)?;
    let indent = trailing_indent(text)?;
    let rest = indent.strip_prefix(from)?;
    Some(format!("{}{to}{rest}", &text[..start]))
}
