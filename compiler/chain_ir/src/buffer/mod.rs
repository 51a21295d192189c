//! Editable token buffer.
//!
//! An index-addressed sequence of tokens with in-place edits and the
//! neighbor-lookup primitives the indentation pass is built from.
//!
//! # Index Stability
//!
//! Indices are stable across [`TokenBuffer::replace`]. Every
//! [`TokenBuffer::insert_before`] at position `i` shifts all indices `>= i`
//! by one; callers holding indices past the insertion point must adjust them.

use std::ops::Index;

use thiserror::Error;

use crate::{Token, TokenKind};

/// A parenthesis without a partner.
///
/// The tokenizer normally guarantees balanced nesting; this surfaces when it
/// didn't (truncated input, unterminated strings swallowing a delimiter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DelimiterError {
    #[error("`(` at token {index} is never closed")]
    Unclosed { index: usize },
    #[error("`)` at token {index} has no matching `(`")]
    Unopened { index: usize },
    #[error("token {index} is {found}, expected a parenthesis")]
    NotADelimiter { index: usize, found: TokenKind },
}

/// An ordered, mutable sequence of tokens.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    /// Create a buffer with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenBuffer {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the token at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. An out-of-range index is a bug in
    /// the caller, not a property of the input.
    #[inline]
    pub fn at(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    /// Get the token at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Replace the token at `index`. Indices are unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn replace(&mut self, index: usize, token: Token) {
        self.tokens[index] = token;
    }

    /// Insert `token` so that it ends up at `index`.
    ///
    /// Every index `>= index` shifts up by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[inline]
    pub fn insert_before(&mut self, index: usize, token: Token) {
        self.tokens.insert(index, token);
    }

    /// Index of the nearest token before `index` that is not trivia.
    pub fn prev_meaningful(&self, index: usize) -> Option<usize> {
        self.tokens[..index.min(self.tokens.len())]
            .iter()
            .rposition(|t| !t.kind.is_trivia())
    }

    /// Index of the nearest token after `index` that is not trivia.
    pub fn next_meaningful(&self, index: usize) -> Option<usize> {
        let start = index.checked_add(1)?;
        self.tokens
            .get(start..)?
            .iter()
            .position(|t| !t.kind.is_trivia())
            .map(|offset| start + offset)
    }

    /// Index of the `)` matching the `(` at `open`.
    pub fn matching_close(&self, open: usize) -> Result<usize, DelimiterError> {
        let found = self.at(open).kind;
        if found != TokenKind::LeftParen {
            return Err(DelimiterError::NotADelimiter { index: open, found });
        }

        let mut depth = 0usize;
        for (index, token) in self.tokens.iter().enumerate().skip(open) {
            match token.kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(index);
                    }
                }
                _ => {}
            }
        }

        Err(DelimiterError::Unclosed { index: open })
    }

    /// Index of the `(` matching the `)` at `close`.
    pub fn matching_open(&self, close: usize) -> Result<usize, DelimiterError> {
        let found = self.at(close).kind;
        if found != TokenKind::RightParen {
            return Err(DelimiterError::NotADelimiter {
                index: close,
                found,
            });
        }

        let mut depth = 0usize;
        for index in (0..=close).rev() {
            match self.tokens[index].kind {
                TokenKind::RightParen => depth += 1,
                TokenKind::LeftParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(index);
                    }
                }
                _ => {}
            }
        }

        Err(DelimiterError::Unopened { index: close })
    }

    /// Index of the first token at or after `index` whose kind is in `kinds`.
    pub fn find_forward(&self, index: usize, kinds: &[TokenKind]) -> Option<usize> {
        self.tokens
            .get(index..)?
            .iter()
            .position(|t| kinds.contains(&t.kind))
            .map(|offset| index + offset)
    }

    /// Iterate over the tokens.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Consume the buffer, returning the tokens.
    #[inline]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Concatenate every token's text.
    pub fn to_source(&self) -> String {
        let capacity = self.tokens.iter().map(|t| t.text.len()).sum();
        let mut source = String::with_capacity(capacity);
        for token in &self.tokens {
            source.push_str(&token.text);
        }
        source
    }
}

impl std::fmt::Debug for TokenBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl Index<usize> for TokenBuffer {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        self.at(index)
    }
}

impl FromIterator<Token> for TokenBuffer {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenBuffer {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
