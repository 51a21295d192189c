//! Chain Rewriter
//!
//! The indentation pass proper. Scans the buffer for chain links and, for
//! each link that starts a line, rewrites the whitespace before it to the
//! resolved indentation. The whitespace inside the link's argument list is
//! shifted by the same amount so multi-line arguments move with their call.
//!
//! Only whitespace tokens are ever replaced or inserted; every other token's
//! text survives unchanged.
//!
//! # Forced Line Breaks
//!
//! A link is moved onto its own line when:
//! - a comment sits between it and the previous code on the same line,
//!   and a line break precedes that comment, or
//! - `break_marked_chains` is on, the link directly follows a call's `)`
//!   on the same line, and its chain contains a marker call.

use chain_ir::{Token, TokenBuffer, TokenKind};
use tracing::{debug, trace};

use crate::classify::is_chain_link;
use crate::config::IndentConfig;
use crate::error::FixError;
use crate::line_indent::{indent_at, reindent_line_break};
use crate::resolve::Resolver;

/// Tokens that end the search for a link's argument list.
const CALL_BOUNDARIES: &[TokenKind] = &[
    TokenKind::LeftParen,
    TokenKind::Semicolon,
    TokenKind::Comma,
    TokenKind::CloseTag,
];

/// What one run of the pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Call links visited (`->name(` or `?->name(`).
    pub calls: usize,
    /// Links whose leading whitespace was rewritten.
    pub reindented: usize,
    /// Line breaks synthesized before a link.
    pub breaks_inserted: usize,
}

impl RewriteSummary {
    /// Whether the pass changed anything.
    pub fn changed(&self) -> bool {
        self.reindented > 0 || self.breaks_inserted > 0
    }
}

/// Normalize method-chain indentation in `tokens`.
///
/// `config` is used as given; run [`IndentConfig::validate`] first when it
/// comes from user input.
///
/// # Errors
///
/// Returns [`FixError::Delimiter`] when a parenthesis the pass needs to
/// match has no partner. The buffer may already be partly rewritten.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn fix_tokens(
    tokens: &mut TokenBuffer,
    config: &IndentConfig,
) -> Result<RewriteSummary, FixError> {
    let mut summary = RewriteSummary::default();

    // Indent of the source line being scanned, read before any link on it
    // is rewritten or split off.
    let mut line_indent = String::new();

    // The length changes when a break is inserted, so re-read it each step.
    let mut index = 0;
    while index < tokens.len() {
        if let Some(indent) = indent_at(tokens, index) {
            line_indent = indent;
        }
        if is_chain_link(tokens.at(index)) {
            index = fix_link(tokens, config, index, &line_indent, &mut summary)?;
        }
        index += 1;
    }

    debug!(
        calls = summary.calls,
        reindented = summary.reindented,
        breaks = summary.breaks_inserted,
        "chain indentation complete"
    );
    Ok(summary)
}

/// Process the link at `link`, returning its (possibly shifted) index.
///
/// `line_indent` is the original indent of the line `link` sits on. A link
/// moved onto a new line shifts its arguments relative to it.
fn fix_link(
    tokens: &mut TokenBuffer,
    config: &IndentConfig,
    mut link: usize,
    line_indent: &str,
    summary: &mut RewriteSummary,
) -> Result<usize, FixError> {
    let Some(mut open) = tokens.find_forward(link, CALL_BOUNDARIES) else {
        return Ok(link);
    };
    if tokens.at(open).kind != TokenKind::LeftParen {
        return Ok(link);
    }
    summary.calls += 1;

    let mut shift_from = None;
    if must_start_line(tokens, config, link)? {
        shift_from = Some(line_indent.to_string());
        if tokens.at(link - 1).is_whitespace() {
            tokens.replace(link - 1, Token::whitespace(config.line_ending.as_str()));
        } else {
            tokens.insert_before(link, Token::whitespace(config.line_ending.as_str()));
            link += 1;
            open += 1;
        }
        summary.breaks_inserted += 1;
        trace!(link, "forced line break");
    }

    let Some(observed) = link.checked_sub(1).and_then(|prev| indent_at(tokens, prev)) else {
        return Ok(link);
    };
    let expected = Resolver::new(tokens, config).expected_indent(link)?;
    trace!(link, ?observed, ?expected, "chain link");

    if observed != expected && tokens.at(link - 1).is_whitespace() {
        let replacement = if tokens.at(link - 1).has_line_break() {
            format!("{}{expected}", config.line_ending)
        } else {
            // `lex` folds the newline after `<?php` into the tag, so the
            // whitespace carries only the indent.
            expected.clone()
        };
        tokens.replace(link - 1, Token::whitespace(replacement));
        summary.reindented += 1;
    }

    let from = shift_from.unwrap_or(observed);
    if from != expected {
        shift_arguments(tokens, open, &from, &expected)?;
    }
    Ok(link)
}

/// Whether the link must be moved to a line of its own.
fn must_start_line(
    tokens: &TokenBuffer,
    config: &IndentConfig,
    link: usize,
) -> Result<bool, FixError> {
    let prev = tokens.prev_meaningful(link);
    let lower = prev.map_or(0, |p| p + 1);

    let mut after_comment = false;
    for index in (lower..link).rev() {
        let token = tokens.at(index);
        if token.kind.is_comment() {
            after_comment = true;
        } else if token.is_line_break() {
            return Ok(after_comment);
        }
    }

    // Same line as the previous code.
    let Some(prev) = prev else {
        return Ok(false);
    };
    if !config.break_marked_chains || tokens.at(prev).kind != TokenKind::RightParen {
        return Ok(false);
    }
    Resolver::new(tokens, config).chain_has_marker(link)
}

/// Re-indent every line inside the argument list opened at `open`.
fn shift_arguments(
    tokens: &mut TokenBuffer,
    open: usize,
    from: &str,
    to: &str,
) -> Result<(), FixError> {
    let close = tokens.matching_close(open)?;
    for index in open + 1..close {
        let token = tokens.at(index);
        if !token.is_line_break() {
            continue;
        }
        if let Some(text) = reindent_line_break(token.text(), from, to) {
            tokens.replace(index, Token::whitespace(text));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
