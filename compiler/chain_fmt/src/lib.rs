//! Chain Indentation
//!
//! Normalizes the indentation of fluent method chains in a token stream.
//!
//! # Architecture
//!
//! The pass makes a single left-to-right sweep over a [`TokenBuffer`]:
//!
//! 1. **Classify**: find chain links (`->`, `?->`) that start a call.
//! 2. **Inspect**: read the indentation of the line the link starts, forcing
//!    a line break first where one is required.
//! 3. **Resolve**: anchor on the nearest earlier line start, then apply
//!    open/close marker adjustments.
//! 4. **Rewrite**: replace the whitespace before the link and shift the
//!    call's multi-line arguments by the same amount.
//!
//! Only whitespace is ever changed.
//!
//! # Modules
//!
//! - [`config`]: Indentation unit, line ending, and marker names
//! - [`classify`]: Token predicates for links, markers, and variables
//! - [`line_indent`]: Reading indentation off whitespace tokens
//! - [`resolve`]: Expected indentation for a link
//! - [`rewrite`]: The pass itself
//! - [`fixer`]: The host-facing [`Fixer`] interface
//!
//! # Example
//!
//! ```
//! use chain_fmt::{fix_tokens, IndentConfig};
//!
//! let mut tokens = chain_lexer::lex("<?php\n$q->where(1)\n->andClause()\n->where(2)\n->endClause();\n");
//! fix_tokens(&mut tokens, &IndentConfig::default()).unwrap();
//! assert_eq!(
//!     tokens.to_source(),
//!     "<?php\n$q->where(1)\n    ->andClause()\n        ->where(2)\n    ->endClause();\n",
//! );
//! ```
//!
//! [`TokenBuffer`]: chain_ir::TokenBuffer

pub mod classify;
pub mod config;
mod error;
pub mod fixer;
pub mod line_indent;
pub mod resolve;
pub mod rewrite;

pub use config::{CallMarker, ConfigError, IndentConfig, IndentSettings, MarkerSet};
pub use error::FixError;
pub use fixer::{ChainIndentationFixer, Fixer, FixerDefinition};
pub use rewrite::{fix_tokens, RewriteSummary};
