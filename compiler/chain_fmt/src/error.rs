//! Errors surfaced by the indentation pass.

use chain_ir::DelimiterError;
use thiserror::Error;

use crate::config::ConfigError;

/// Why a file could not be fixed.
///
/// A failed fix leaves the buffer partially rewritten; callers that need the
/// original text should keep their own copy.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FixError {
    #[error("malformed nesting: {0}")]
    Delimiter(#[from] DelimiterError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
