//! Token kind enumeration.

use std::fmt;

/// Token kinds produced by the lexer.
///
/// Kinds carry no payload; the text lives on [`Token`](super::Token).
/// Keywords are not distinguished from identifiers: the indentation pass only
/// ever matches call names literally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Mode switches
    /// `<?php` including one trailing newline or space
    OpenTag,
    /// `<?=`
    OpenTagWithEcho,
    /// `?>` including one trailing newline
    CloseTag,
    /// Text outside of `<?php ... ?>`
    InlineHtml,

    // Trivia
    /// Run of spaces, tabs, and line breaks
    Whitespace,
    /// `// ...`, `# ...`, or `/* ... */`
    Comment,
    /// `/** ... */`
    DocComment,

    // Names and literals
    /// `$name`
    Variable,
    /// Bare name: function, method, class, constant, or keyword
    Ident,
    /// Quoted, backtick, heredoc, or nowdoc string
    StringLiteral,
    /// Integer or float literal
    Number,

    // Member access
    /// `->`
    ObjectOperator,
    /// `?->`
    NullsafeObjectOperator,
    /// `::`
    DoubleColon,

    // Delimiters
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    /// Any other operator or punctuation
    Operator,
}

impl TokenKind {
    /// Whitespace or any comment.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }

    /// Either comment flavor.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::DocComment)
    }

    /// `->` or `?->`.
    #[inline]
    pub fn is_object_operator(self) -> bool {
        matches!(
            self,
            TokenKind::ObjectOperator | TokenKind::NullsafeObjectOperator
        )
    }

    /// Human-readable name used in diagnostics and debug dumps.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::OpenTag => "open tag",
            TokenKind::OpenTagWithEcho => "echo open tag",
            TokenKind::CloseTag => "close tag",
            TokenKind::InlineHtml => "inline html",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::DocComment => "doc comment",
            TokenKind::Variable => "variable",
            TokenKind::Ident => "identifier",
            TokenKind::StringLiteral => "string",
            TokenKind::Number => "number",
            TokenKind::ObjectOperator => "`->`",
            TokenKind::NullsafeObjectOperator => "`?->`",
            TokenKind::DoubleColon => "`::`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::LeftBracket => "`[`",
            TokenKind::RightBracket => "`]`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Operator => "operator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
