//! Token types shared by the lexer and the indentation pass.

mod kind;

pub use kind::TokenKind;

use std::fmt;

/// A token: a kind plus the exact source text it covers.
///
/// Text is owned so the indentation pass can rewrite whitespace in place.
/// Non-whitespace tokens are never modified after lexing.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// Create a whitespace token.
    #[inline]
    pub fn whitespace(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Whitespace, text)
    }

    /// The token's source text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check whether the token's text contains a line break (`\n` or `\r`).
    #[inline]
    pub fn has_line_break(&self) -> bool {
        self.text.bytes().any(|b| b == b'\n' || b == b'\r')
    }

    /// Check if this is a whitespace token.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Check if this is a whitespace token containing a line break.
    #[inline]
    pub fn is_line_break(&self) -> bool {
        self.is_whitespace() && self.has_line_break()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
