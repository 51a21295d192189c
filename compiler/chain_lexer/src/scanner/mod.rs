//! Hand-written scanner producing `(TokenKind, &str)` pairs.
//!
//! The scanner is a two-mode state machine. In HTML mode everything up to an
//! open tag is a single [`TokenKind::InlineHtml`] token; in code mode the
//! main dispatch picks a focused method per leading byte.
//!
//! The scanner never fails: bytes it does not recognize become one-byte
//! [`TokenKind::Operator`] tokens, and unterminated comments or strings run
//! to EOF. Every byte of the source ends up in exactly one token.

use chain_ir::TokenKind;

use crate::cursor::Cursor;

/// Where the scanner currently is relative to `<?php ... ?>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexMode {
    /// Outside code: text is inline HTML until an open tag.
    Html,
    /// Inside code.
    Code,
}

/// Operators tried longest-first. Anything else is a single byte.
const OPERATORS: &[&str] = &[
    "<=>", "**=", "...", "<<=", ">>=", "===", "!==", "??=", "=>", "==", "!=", "<>", "<=", ">=",
    "&&", "||", "??", "++", "--", "+=", "-=", "*=", "/=", ".=", "%=", "&=", "|=", "^=", "<<",
    ">>", "**",
];

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Scanner over one source text.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    mode: LexMode,
}

impl<'a> Scanner<'a> {
    /// Create a scanner starting in `mode`.
    pub fn new(source: &'a str, mode: LexMode) -> Self {
        Self {
            cursor: Cursor::new(source),
            mode,
        }
    }

    /// Produce the next token, or `None` at EOF.
    pub fn next_token(&mut self) -> Option<(TokenKind, &'a str)> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let kind = match self.mode {
            LexMode::Html => self.html(),
            LexMode::Code => self.code(),
        };
        Some((kind, self.cursor.slice_from(start)))
    }

    // ─── HTML mode ─────────────────────────────────────────────────────

    fn html(&mut self) -> TokenKind {
        if let Some(kind) = self.open_tag() {
            return kind;
        }
        loop {
            self.cursor.advance();
            if !self.cursor.eat_until_str("<?") {
                return TokenKind::InlineHtml;
            }
            if self.at_open_tag() {
                return TokenKind::InlineHtml;
            }
        }
    }

    fn at_open_tag(&self) -> bool {
        self.cursor.starts_with("<?=") || self.php_tag_len().is_some()
    }

    /// Length of `<?php` plus its folded trailing whitespace, if present here.
    fn php_tag_len(&self) -> Option<usize> {
        if !self.cursor.starts_with_ignore_case("<?php") {
            return None;
        }
        match self.cursor.peek_at(5) {
            b'\r' if self.cursor.peek_at(6) == b'\n' => Some(7),
            b' ' | b'\t' | b'\n' | b'\r' => Some(6),
            0 => Some(5),
            _ => None,
        }
    }

    fn open_tag(&mut self) -> Option<TokenKind> {
        if self.cursor.starts_with("<?=") {
            self.cursor.advance_n(3);
            self.mode = LexMode::Code;
            return Some(TokenKind::OpenTagWithEcho);
        }
        let len = self.php_tag_len()?;
        self.cursor.advance_n(len);
        self.mode = LexMode::Code;
        Some(TokenKind::OpenTag)
    }

    // ─── Code mode ─────────────────────────────────────────────────────

    fn code(&mut self) -> TokenKind {
        match self.cursor.current() {
            b if is_space(b) => {
                self.cursor.eat_while(is_space);
                TokenKind::Whitespace
            }
            b'$' if is_ident_start(self.cursor.peek()) => {
                self.cursor.advance();
                self.cursor.eat_while(is_ident_continue);
                TokenKind::Variable
            }
            b if is_ident_start(b) => self.identifier(),
            b'\\' if is_ident_start(self.cursor.peek()) => self.identifier(),
            b'0'..=b'9' => self.number(),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(),
            b'\'' | b'"' | b'`' => {
                let quote = self.cursor.current();
                self.cursor.advance();
                self.cursor.eat_quoted(quote);
                TokenKind::StringLiteral
            }
            b'/' if self.cursor.peek() == b'/' => self.line_comment(),
            b'/' if self.cursor.peek() == b'*' => self.block_comment(),
            b'#' if self.cursor.peek() == b'[' => {
                self.cursor.advance_n(2);
                TokenKind::Operator
            }
            b'#' => self.line_comment(),
            b'?' => self.question(),
            b'-' if self.cursor.peek() == b'>' => {
                self.cursor.advance_n(2);
                TokenKind::ObjectOperator
            }
            b':' if self.cursor.peek() == b':' => {
                self.cursor.advance_n(2);
                TokenKind::DoubleColon
            }
            b'<' if self.cursor.starts_with("<<<") => self.heredoc_or_operator(),
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b'[' => self.single(TokenKind::LeftBracket),
            b']' => self.single(TokenKind::RightBracket),
            b';' => self.single(TokenKind::Semicolon),
            b',' => self.single(TokenKind::Comma),
            _ => self.operator(),
        }
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn operator(&mut self) -> TokenKind {
        let len = OPERATORS
            .iter()
            .find(|op| self.cursor.starts_with(op))
            .map_or(1, |op| op.len());
        self.cursor.advance_n(len);
        TokenKind::Operator
    }

    /// Identifier, optionally namespace-qualified (`\Foo\bar`).
    fn identifier(&mut self) -> TokenKind {
        loop {
            if self.cursor.current() == b'\\' {
                self.cursor.advance();
            }
            self.cursor.eat_while(is_ident_continue);
            if self.cursor.current() != b'\\' || !is_ident_start(self.cursor.peek()) {
                return TokenKind::Ident;
            }
        }
    }

    fn number(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        loop {
            let b = self.cursor.current();
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.cursor.advance();
            } else if b == b'.' && self.cursor.peek().is_ascii_digit() {
                self.cursor.advance();
            } else if (b == b'+' || b == b'-')
                && self.cursor.peek().is_ascii_digit()
                && self.after_exponent_marker(start)
            {
                self.cursor.advance();
            } else {
                return TokenKind::Number;
            }
        }
    }

    /// Whether the number so far ends in `e`/`E` and is not hex.
    fn after_exponent_marker(&self, start: usize) -> bool {
        let text = self.cursor.slice_from(start).as_bytes();
        let is_hex = text.len() > 1 && text[0] == b'0' && matches!(text[1], b'x' | b'X');
        !is_hex && matches!(text.last(), Some(b'e' | b'E'))
    }

    fn line_comment(&mut self) -> TokenKind {
        self.cursor.eat_line_comment_body();
        TokenKind::Comment
    }

    fn block_comment(&mut self) -> TokenKind {
        let is_doc = self.cursor.starts_with("/**") && is_space(self.cursor.peek_at(3));
        self.cursor.advance_n(2);
        if self.cursor.eat_until_str("*/") {
            self.cursor.advance_n(2);
        }
        if is_doc {
            TokenKind::DocComment
        } else {
            TokenKind::Comment
        }
    }

    fn question(&mut self) -> TokenKind {
        if self.cursor.starts_with("?->") {
            self.cursor.advance_n(3);
            return TokenKind::NullsafeObjectOperator;
        }
        if self.cursor.starts_with("?>") {
            self.cursor.advance_n(2);
            self.cursor.eat_line_break();
            self.mode = LexMode::Html;
            return TokenKind::CloseTag;
        }
        self.operator()
    }

    /// `<<<LABEL`, `<<<"LABEL"`, or `<<<'LABEL'` followed by a line break
    /// starts a heredoc/nowdoc; otherwise this is `<<` or `<<=`.
    fn heredoc_or_operator(&mut self) -> TokenKind {
        let mut probe = self.cursor;
        probe.advance_n(3);
        probe.eat_while(|b| b == b' ' || b == b'\t');
        let quote = match probe.current() {
            q @ (b'"' | b'\'') => {
                probe.advance();
                Some(q)
            }
            _ => None,
        };
        if !is_ident_start(probe.current()) {
            return self.operator();
        }
        let label_start = probe.pos();
        probe.eat_while(is_ident_continue);
        let label = probe.slice_from(label_start);
        if let Some(q) = quote {
            if probe.current() != q {
                return self.operator();
            }
            probe.advance();
        }
        if !probe.eat_line_break() {
            return self.operator();
        }

        self.cursor = probe;
        self.heredoc_body(label);
        TokenKind::StringLiteral
    }

    /// Consume lines until one whose first non-blank text is `label` not
    /// followed by an identifier character. Unterminated bodies run to EOF.
    fn heredoc_body(&mut self, label: &str) {
        while !self.cursor.is_eof() {
            self.cursor.eat_while(|b| b == b' ' || b == b'\t');
            if self.cursor.starts_with(label) && !is_ident_continue(self.cursor.peek_at(label.len()))
            {
                self.cursor.advance_n(label.len());
                return;
            }
            self.cursor.eat_until_line_break();
            self.cursor.eat_line_break();
        }
    }
}
