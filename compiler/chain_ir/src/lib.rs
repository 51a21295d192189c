//! Chain IR - Token Model
//!
//! This crate contains the core data structures shared by the chainfmt crates:
//! - [`TokenKind`] and [`Token`] for lexer output
//! - [`TokenBuffer`], the index-addressed, in-place editable token sequence
//!
//! # Design Philosophy
//!
//! - **Flat, not a tree**: tokens live in one ordered `Vec`; the index is the
//!   only address. Structure (matching parentheses, statement boundaries) is
//!   recovered on demand by scanning rather than stored.
//! - **Lossless**: concatenating every token's text reproduces the source,
//!   so whitespace edits round-trip to text without a printer.

mod buffer;
mod token;

pub use buffer::{DelimiterError, TokenBuffer};
pub use token::{Token, TokenKind};
