//! Chain Lexer
//!
//! Lossless tokenizer for PHP-style source, producing a [`TokenBuffer`] for
//! the indentation pass.
//!
//! The lexer recognizes exactly what the pass needs to reconstruct call
//! chains: trivia, variables, names, member-access operators, delimiters,
//! and literals opaque enough that parentheses inside strings or comments
//! never leak into the token stream. It does not validate anything.
//!
//! # Example
//!
//! ```
//! use chain_ir::TokenKind;
//!
//! let tokens = chain_lexer::lex("<?php\n$q->where(1);\n");
//! assert_eq!(tokens.at(0).kind, TokenKind::OpenTag);
//! assert_eq!(tokens.at(2).kind, TokenKind::ObjectOperator);
//! assert_eq!(tokens.to_source(), "<?php\n$q->where(1);\n");
//! ```

mod cursor;
mod scanner;

pub use cursor::Cursor;
pub use scanner::{LexMode, Scanner};

use chain_ir::{Token, TokenBuffer};

/// Tokenize a complete file.
///
/// Starts in HTML mode, like a real PHP file: code begins at `<?php` or `<?=`.
pub fn lex(source: &str) -> TokenBuffer {
    lex_in_mode(source, LexMode::Html)
}

/// Tokenize a code fragment with no open tag.
pub fn lex_fragment(source: &str) -> TokenBuffer {
    lex_in_mode(source, LexMode::Code)
}

/// Tokenize starting in the given mode.
pub fn lex_in_mode(source: &str, mode: LexMode) -> TokenBuffer {
    let mut scanner = Scanner::new(source, mode);
    // Rough estimate: one token per four bytes.
    let mut tokens = TokenBuffer::with_capacity(source.len() / 4 + 1);
    while let Some((kind, text)) = scanner.next_token() {
        tokens.push(Token::new(kind, text));
    }
    tokens
}

#[cfg(test)]
mod tests;
