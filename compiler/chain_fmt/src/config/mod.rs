//! Indentation Configuration
//!
//! The pass is parameterized by four values, fixed for a whole run:
//! - the indentation unit (one level's literal text),
//! - the line ending used when a line break has to be synthesized,
//! - the open and close marker sets,
//! - whether chains containing markers are split one call per line.
//!
//! [`IndentSettings`] is the partial, deserializable form read from a
//! project settings file and layered over the defaults.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;

/// Spaces per indentation level in the default config.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Call names that open a nested logical block by default.
pub const DEFAULT_OPEN_MARKERS: &[&str] = &["andClause", "orClause"];

/// Call names that close a nested logical block by default.
pub const DEFAULT_CLOSE_MARKERS: &[&str] = &["endClause"];

/// How a call name affects nesting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallMarker {
    /// Lines after this call are one level deeper.
    Open,
    /// This call returns to the enclosing level.
    Close,
    /// No effect on nesting.
    Plain,
}

/// The open and close marker name sets.
///
/// Names are matched literally and case-sensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerSet {
    open: FxHashSet<String>,
    close: FxHashSet<String>,
}

impl MarkerSet {
    /// Create a marker set from open and close names.
    pub fn new<O, C>(open: O, close: C) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            open: open.into_iter().map(Into::into).collect(),
            close: close.into_iter().map(Into::into).collect(),
        }
    }

    /// Classify a call name.
    #[inline]
    pub fn classify(&self, name: &str) -> CallMarker {
        if self.open.contains(name) {
            CallMarker::Open
        } else if self.close.contains(name) {
            CallMarker::Close
        } else {
            CallMarker::Plain
        }
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new(
            DEFAULT_OPEN_MARKERS.iter().copied(),
            DEFAULT_CLOSE_MARKERS.iter().copied(),
        )
    }
}

/// Invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("indentation unit must not be empty")]
    EmptyIndent,
    #[error("indentation unit {0:?} may only contain spaces and tabs")]
    InvalidIndent(String),
    #[error("line ending {0:?} must be one of \"\\n\", \"\\r\\n\", \"\\r\"")]
    InvalidLineEnding(String),
    #[error("`{0}` is listed as both an open and a close marker")]
    OverlappingMarker(String),
}

/// Configuration for the indentation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentConfig {
    /// Literal text of one indentation level.
    pub indent: String,

    /// Line terminator used for synthesized line breaks.
    pub line_ending: String,

    /// Open/close call names.
    pub markers: MarkerSet,

    /// Split chains that contain a marker call so each call after the first
    /// starts its own line.
    pub break_marked_chains: bool,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            indent: " ".repeat(DEFAULT_INDENT_WIDTH),
            line_ending: "\n".to_string(),
            markers: MarkerSet::default(),
            break_marked_chains: true,
        }
    }
}

impl IndentConfig {
    /// Replace the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Replace the line ending.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    /// Replace the marker sets.
    #[must_use]
    pub fn with_markers(mut self, markers: MarkerSet) -> Self {
        self.markers = markers;
        self
    }

    /// Enable or disable splitting of marked chains.
    #[must_use]
    pub fn with_break_marked_chains(mut self, enabled: bool) -> Self {
        self.break_marked_chains = enabled;
        self
    }

    /// Check that the config can produce well-formed indentation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent.is_empty() {
            return Err(ConfigError::EmptyIndent);
        }
        if !self.indent.bytes().all(|b| b == b' ' || b == b'\t') {
            return Err(ConfigError::InvalidIndent(self.indent.clone()));
        }
        if !matches!(self.line_ending.as_str(), "\n" | "\r\n" | "\r") {
            return Err(ConfigError::InvalidLineEnding(self.line_ending.clone()));
        }
        let mut overlap: Vec<&String> = self
            .markers
            .open
            .intersection(&self.markers.close)
            .collect();
        overlap.sort();
        if let Some(name) = overlap.first() {
            return Err(ConfigError::OverlappingMarker((*name).clone()));
        }
        Ok(())
    }
}

/// Partial configuration as written in a project settings file.
///
/// Every field is optional; missing fields keep the value of the config the
/// settings are applied to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndentSettings {
    pub indent: Option<String>,
    pub line_ending: Option<String>,
    pub open_markers: Option<Vec<String>>,
    pub close_markers: Option<Vec<String>>,
    pub break_marked_chains: Option<bool>,
}

impl IndentSettings {
    /// Layer these settings over `base`.
    #[must_use]
    pub fn apply(self, mut base: IndentConfig) -> IndentConfig {
        if let Some(indent) = self.indent {
            base.indent = indent;
        }
        if let Some(line_ending) = self.line_ending {
            base.line_ending = line_ending;
        }
        if self.open_markers.is_some() || self.close_markers.is_some() {
            let open = self
                .open_markers
                .unwrap_or_else(|| base.markers.open.iter().cloned().collect());
            let close = self
                .close_markers
                .unwrap_or_else(|| base.markers.close.iter().cloned().collect());
            base.markers = MarkerSet::new(open, close);
        }
        if let Some(enabled) = self.break_marked_chains {
            base.break_marked_chains = enabled;
        }
        base
    }
}

#[cfg(test)]
mod tests;
