//! Indentation Resolver
//!
//! Computes where a chain link *should* be indented. Two parts:
//!
//! 1. **Anchoring.** Walk back from the token before the link, hopping over
//!    balanced argument lists, to the nearest line start. That line's indent
//!    is the anchor; one level is added when the link continues an
//!    expression begun on the anchor line.
//! 2. **Markers.** A link following an open-marker call goes one level
//!    deeper; a close-marker call comes back out one level.
//!
//! Neighbors are found structurally (`prev_meaningful` / `next_meaningful`
//! and paren matching), so comments and odd spacing between a call name and
//! its parentheses do not change the result.

use chain_ir::{TokenBuffer, TokenKind};

use crate::classify::{call_marker, is_bare_variable, is_chain_link, is_close_marker, is_open_marker};
use crate::config::{CallMarker, IndentConfig};
use crate::error::FixError;
use crate::line_indent::indent_at;

/// Read-only view used to resolve indentation for links in one buffer.
pub struct Resolver<'a> {
    tokens: &'a TokenBuffer,
    config: &'a IndentConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(tokens: &'a TokenBuffer, config: &'a IndentConfig) -> Self {
        Self { tokens, config }
    }

    /// Expected indentation for the chain link at `link`, markers included.
    pub fn expected_indent(&self, link: usize) -> Result<String, FixError> {
        let anchored = self.anchored_indent(link)?;
        self.apply_markers(link, anchored)
    }

    /// Expected indentation ignoring markers.
    pub fn anchored_indent(&self, link: usize) -> Result<String, FixError> {
        let unit = &self.config.indent;
        let Some(end) = self.tokens.prev_meaningful(link) else {
            return Ok(unit.clone());
        };

        let mut index = end;
        loop {
            if self.tokens.at(index).kind == TokenKind::RightParen {
                index = self.tokens.matching_open(index)?;
            }
            if let Some(mut indent) = indent_at(self.tokens, index) {
                if self.requires_extra_level(index, end)? {
                    indent.push_str(unit);
                }
                return Ok(indent);
            }
            if index == 0 {
                break;
            }
            index -= 1;
        }
        Ok(unit.clone())
    }

    /// Whether the expression from the line start at `start` up to the
    /// meaningful token `end` is still open, so the link continues it.
    ///
    /// If the line itself begins with a chain link, it counts as open only
    /// when that link's argument list is still unclosed at `end`. Otherwise
    /// the line is open unless `end` is a `)` whose `(` sits before `start`.
    pub fn requires_extra_level(&self, start: usize, end: usize) -> Result<bool, FixError> {
        let tokens = self.tokens;
        let Some(first) = tokens.next_meaningful(start) else {
            return Ok(false);
        };

        if is_chain_link(tokens.at(first)) {
            let args = tokens
                .next_meaningful(first)
                .and_then(|name| tokens.next_meaningful(name));
            return match args {
                Some(open) if tokens.at(open).kind == TokenKind::LeftParen => {
                    Ok(tokens.matching_close(open)? > end)
                }
                _ => Ok(false),
            };
        }

        if tokens.at(end).kind != TokenKind::RightParen {
            return Ok(true);
        }
        Ok(tokens.matching_open(end)? >= start)
    }

    /// Apply open/close marker adjustments to an anchored indent.
    pub fn apply_markers(&self, link: usize, mut indent: String) -> Result<String, FixError> {
        let markers = &self.config.markers;
        let unit = self.config.indent.as_str();

        if let Some(name) = self.previous_call_name(link)? {
            if is_open_marker(self.tokens.at(name), markers) {
                indent.push_str(unit);
                return Ok(indent);
            }
        }

        let closes = self
            .tokens
            .next_meaningful(link)
            .is_some_and(|name| is_close_marker(self.tokens.at(name), markers));
        if closes && !self.follows_bare_variable(link) {
            if let Some(kept) = indent.strip_suffix(unit).map(str::len) {
                indent.truncate(kept);
            }
        }
        Ok(indent)
    }

    /// Name token of the call whose `)` immediately precedes `link`.
    pub fn previous_call_name(&self, link: usize) -> Result<Option<usize>, FixError> {
        let tokens = self.tokens;
        let Some(close) = tokens.prev_meaningful(link) else {
            return Ok(None);
        };
        if tokens.at(close).kind != TokenKind::RightParen {
            return Ok(None);
        }
        let open = tokens.matching_open(close)?;
        Ok(tokens
            .prev_meaningful(open)
            .filter(|&name| tokens.at(name).kind == TokenKind::Ident))
    }

    /// `$q->endClause()`: the chain's receiver is a bare variable, so there
    /// is no enclosing level to return to.
    fn follows_bare_variable(&self, link: usize) -> bool {
        self.tokens
            .prev_meaningful(link)
            .is_some_and(|prev| is_bare_variable(self.tokens.at(prev)))
    }

    /// Whether any call in the chain through `link` is a marker.
    ///
    /// The chain is followed in both directions through `name(...)` calls
    /// joined by links. A property access (`->name` with no arguments) ends
    /// the forward walk.
    pub fn chain_has_marker(&self, link: usize) -> Result<bool, FixError> {
        let tokens = self.tokens;
        let markers = &self.config.markers;
        let is_marker = |name: usize| call_marker(tokens.at(name), markers) != CallMarker::Plain;

        let mut cursor = link;
        while let Some(name) = tokens.next_meaningful(cursor) {
            if is_marker(name) {
                return Ok(true);
            }
            let Some(open) = tokens.next_meaningful(name) else {
                break;
            };
            if tokens.at(open).kind != TokenKind::LeftParen {
                break;
            }
            let close = tokens.matching_close(open)?;
            match tokens.next_meaningful(close) {
                Some(next) if is_chain_link(tokens.at(next)) => cursor = next,
                _ => break,
            }
        }

        let mut cursor = link;
        while let Some(name) = self.previous_call_name(cursor)? {
            if is_marker(name) {
                return Ok(true);
            }
            match tokens.prev_meaningful(name) {
                Some(prev) if is_chain_link(tokens.at(prev)) => cursor = prev,
                _ => break,
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests;
