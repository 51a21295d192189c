//! CLI command implementations.

mod fmt;

pub use fmt::{
    format_content, format_directory, format_file, format_stdin, parse_args, resolve_style,
    run_format, FormatConfig, FormatOptions, FormatResult, FormatTotals, StyleOverrides,
    EXIT_FAILURE, EXIT_SUCCESS,
};
