//! Host Contract
//!
//! The interface a fixer-running host sees: identity, ordering, a cheap
//! candidate check, and the fix itself. [`ChainIndentationFixer`] wraps the
//! indentation pass behind it.

use chain_ir::TokenBuffer;

use crate::config::{ConfigError, IndentConfig};
use crate::error::FixError;
use crate::rewrite::fix_tokens;

/// Human-readable description of a fixer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixerDefinition {
    /// One-line summary.
    pub summary: &'static str,
    /// Longer explanation of what the fixer changes.
    pub description: &'static str,
    /// Input the fixer would change.
    pub code_sample: &'static str,
}

/// A whitespace pass run by the host over one file's tokens.
pub trait Fixer: Send + Sync {
    /// Stable identifier used in configuration and reports.
    fn name(&self) -> &'static str;

    /// Ordering among fixers; higher runs first.
    fn priority(&self) -> i32;

    fn definition(&self) -> FixerDefinition;

    /// Whether running [`Fixer::fix`] could change anything.
    fn is_candidate(&self, tokens: &TokenBuffer) -> bool;

    /// Rewrite `tokens` in place.
    ///
    /// On error the buffer may be partly rewritten and should be discarded.
    fn fix(&self, tokens: &mut TokenBuffer) -> Result<(), FixError>;
}

const CODE_SAMPLE: &str = "<?php
$q->andWhere(1)->andClause()->andWhere(2)->endClause();
";

/// Indents method chains one level past their receiver, with marker calls
/// opening and closing nested levels.
#[derive(Clone, Debug, Default)]
pub struct ChainIndentationFixer {
    config: IndentConfig,
}

impl ChainIndentationFixer {
    pub const NAME: &'static str = "chain_indentation";

    /// Runs after the general whitespace passes and before trailing
    /// whitespace cleanup.
    pub const PRIORITY: i32 = -29;

    /// Create a fixer with a validated config.
    pub fn new(config: IndentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Fixer for ChainIndentationFixer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn definition(&self) -> FixerDefinition {
        FixerDefinition {
            summary: "Each chained method call must be indented one level past its receiver.",
            description: "Calls to open markers (such as `andClause`) indent the calls that \
                follow by one more level until the matching close marker (such as \
                `endClause`). Multi-line argument lists move with their call.",
            code_sample: CODE_SAMPLE,
        }
    }

    fn is_candidate(&self, tokens: &TokenBuffer) -> bool {
        tokens.iter().any(|t| t.kind.is_object_operator())
    }

    fn fix(&self, tokens: &mut TokenBuffer) -> Result<(), FixError> {
        fix_tokens(tokens, &self.config).map(|_| ())
    }
}
