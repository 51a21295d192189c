//! chainfmt
//!
//! Command-line host for the chain indentation pass: file discovery,
//! settings resolution, parallel formatting, and reporting.
//!
//! # Tracing
//!
//! Logging is off unless an environment filter is set:
//!
//! - `CHAINFMT_LOG=chain_fmt=debug`: one summary line per file.
//! - `CHAINFMT_LOG=chain_fmt=trace`: every chain link decision.
//! - `RUST_LOG` is used when `CHAINFMT_LOG` is not set.
//! - `CHAINFMT_LOG_TREE=1`: indented span tree instead of flat lines.

pub mod commands;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CHAINFMT_LOG";

/// Set to `1` to render spans as a tree.
pub const LOG_TREE_ENV: &str = "CHAINFMT_LOG_TREE";

/// Initialize tracing to stderr.
///
/// Call this once at startup. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = env_filter() else {
            return;
        };
        let tree = std::env::var(LOG_TREE_ENV).is_ok_and(|v| v == "1");
        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// `CHAINFMT_LOG`, else `RUST_LOG`, else `None`.
fn env_filter() -> Option<EnvFilter> {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
}
