//! The format command: normalize chain indentation in PHP files.
//!
//! Supports single files, directories, and stdin.
//! Uses parallel processing for directories when multiple files are found.

#![allow(
    clippy::struct_excessive_bools,
    reason = "FormatConfig has standard CLI config bool fields"
)]

mod ignore;
mod settings;

pub use settings::{resolve_style, StyleOverrides};

use std::fmt::Write as _;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use chain_fmt::{ChainIndentationFixer, FixError, Fixer};
use rayon::prelude::*;

use ignore::{load_ignore_patterns, visit_php_files};
use settings::{parse_indent, parse_line_ending};

/// Configuration for the format command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    /// Check if files are formatted without modifying them.
    /// Returns exit code 1 if any files would be modified.
    pub check: bool,
    /// Show diff output instead of modifying files.
    pub diff: bool,
    /// Read from stdin and write to stdout.
    pub stdin: bool,
    /// Ignore .chainfmtignore files and the default skip list.
    pub no_ignore: bool,
}

/// Everything parsed from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub config: FormatConfig,
    pub style: StyleOverrides,
    pub paths: Vec<String>,
    pub help: bool,
}

/// Result of formatting a single file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatResult {
    /// File was unchanged (already formatted).
    Unchanged,
    /// File was formatted successfully.
    Formatted,
    /// File would be formatted (in check or diff mode).
    WouldFormat,
    /// The file could not be formatted; contains the rendered message.
    Error(String),
}

/// Counters for a multi-file run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatTotals {
    pub formatted: usize,
    pub unchanged: usize,
    pub errors: usize,
}

impl FormatTotals {
    fn record(&mut self, result: &FormatResult) {
        match result {
            FormatResult::Formatted | FormatResult::WouldFormat => self.formatted += 1,
            FormatResult::Unchanged => self.unchanged += 1,
            FormatResult::Error(_) => self.errors += 1,
        }
    }

    fn add(&mut self, other: FormatTotals) {
        self.formatted += other.formatted;
        self.unchanged += other.unchanged;
        self.errors += other.errors;
    }
}

/// Run `fixer` over `source`, returning the new text.
fn fix_source(source: &str, fixer: &dyn Fixer) -> Result<String, FixError> {
    let mut tokens = chain_lexer::lex(source);
    if !fixer.is_candidate(&tokens) {
        return Ok(source.to_string());
    }
    fixer.fix(&mut tokens)?;
    Ok(tokens.to_source())
}

/// Format a single file.
pub fn format_file(path: &Path, config: &FormatConfig, fixer: &dyn Fixer) -> FormatResult {
    match std::fs::read_to_string(path) {
        Ok(content) => format_content(path, &content, config, fixer),
        Err(e) => FormatResult::Error(render_error(path, &format!("cannot read file: {e}"))),
    }
}

/// Format content read from `path`, writing it back unless checking.
pub fn format_content(
    path: &Path,
    content: &str,
    config: &FormatConfig,
    fixer: &dyn Fixer,
) -> FormatResult {
    let formatted = match fix_source(content, fixer) {
        Ok(formatted) => formatted,
        Err(e) => return FormatResult::Error(render_error(path, &e.to_string())),
    };

    if formatted == content {
        return FormatResult::Unchanged;
    }

    if config.check {
        return FormatResult::WouldFormat;
    }

    if config.diff {
        print!("{}", render_diff(&path.display().to_string(), content, &formatted));
        return FormatResult::WouldFormat;
    }

    if let Err(e) = std::fs::write(path, &formatted) {
        return FormatResult::Error(render_error(path, &format!("cannot write file: {e}")));
    }
    FormatResult::Formatted
}

/// Format stdin and write the result to stdout.
///
/// Returns true on success.
pub fn format_stdin(fixer: &dyn Fixer) -> bool {
    let mut content = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut content) {
        eprintln!("Error reading from stdin: {e}");
        return false;
    }
    match fix_source(&content, fixer) {
        Ok(formatted) => {
            print!("{formatted}");
            true
        }
        Err(e) => {
            eprint!("{}", render_error(Path::new("<stdin>"), &e.to_string()));
            false
        }
    }
}

/// Line-by-line diff with two lines of context around each change.
///
/// The pass only rewrites whitespace and can add lines, so a changed region
/// is printed as the original lines followed by the new ones.
fn render_diff(path: &str, original: &str, formatted: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {path}");
    let _ = writeln!(out, "+++ {path}");

    let old: Vec<&str> = original.lines().collect();
    let new: Vec<&str> = formatted.lines().collect();

    let common_prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
    let common_suffix = old[common_prefix..]
        .iter()
        .rev()
        .zip(new[common_prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    if common_prefix == old.len() && common_prefix == new.len() {
        return out;
    }

    let context_start = common_prefix.saturating_sub(2);
    let old_end = old.len() - common_suffix;
    let new_end = new.len() - common_suffix;
    let trailing = common_suffix.min(2);

    let _ = writeln!(
        out,
        "@@ -{},{} +{},{} @@",
        context_start + 1,
        old_end + trailing - context_start,
        context_start + 1,
        new_end + trailing - context_start,
    );
    for line in &old[context_start..common_prefix] {
        let _ = writeln!(out, " {line}");
    }
    for line in &old[common_prefix..old_end] {
        let _ = writeln!(out, "-{line}");
    }
    for line in &new[common_prefix..new_end] {
        let _ = writeln!(out, "+{line}");
    }
    for line in &old[old_end..old_end + trailing] {
        let _ = writeln!(out, " {line}");
    }
    out
}

/// Format all PHP files in a directory recursively.
///
/// Uses parallel processing for better performance on large directories.
pub fn format_directory(path: &Path, config: &FormatConfig, fixer: &dyn Fixer) -> FormatTotals {
    let ignore_patterns = if config.no_ignore {
        Vec::new()
    } else {
        load_ignore_patterns(path)
    };

    let mut files: Vec<PathBuf> = Vec::new();
    visit_php_files(path, config, &ignore_patterns, &mut |file| {
        files.push(file.to_path_buf());
    });
    tracing::debug!(root = %path.display(), files = files.len(), "collected files");

    let formatted = AtomicUsize::new(0);
    let unchanged = AtomicUsize::new(0);
    let errors = AtomicUsize::new(0);

    files.par_iter().for_each(|file| {
        let result = format_file(file, config, fixer);
        report(&file.display().to_string(), &result, config);
        let counter = match result {
            FormatResult::Formatted | FormatResult::WouldFormat => &formatted,
            FormatResult::Unchanged => &unchanged,
            FormatResult::Error(_) => &errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    });

    FormatTotals {
        formatted: formatted.load(Ordering::Relaxed),
        unchanged: unchanged.load(Ordering::Relaxed),
        errors: errors.load(Ordering::Relaxed),
    }
}

/// Print the per-file outcome line.
fn report(path: &str, result: &FormatResult, config: &FormatConfig) {
    match result {
        FormatResult::Formatted => println!("Formatted: {path}"),
        FormatResult::WouldFormat if config.check => println!("Would format: {path}"),
        FormatResult::WouldFormat | FormatResult::Unchanged => {}
        FormatResult::Error(message) => eprint!("{message}"),
    }
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<FormatOptions, String> {
    let mut options = FormatOptions::default();

    for arg in args {
        match arg.as_str() {
            "--check" => options.config.check = true,
            "--diff" => options.config.diff = true,
            "--stdin" => options.config.stdin = true,
            "--no-ignore" => options.config.no_ignore = true,
            "--help" | "-h" => options.help = true,
            arg => {
                if let Some(value) = arg.strip_prefix("--indent=") {
                    options.style.indent = Some(parse_indent(value)?);
                } else if let Some(value) = arg.strip_prefix("--line-ending=") {
                    options.style.line_ending = Some(parse_line_ending(value)?);
                } else if let Some(value) = arg.strip_prefix("--config=") {
                    options.style.config_path = Some(PathBuf::from(value));
                } else if arg.starts_with('-') {
                    return Err(format!("Unknown option: {arg}"));
                } else {
                    options.paths.push(arg.to_string());
                }
            }
        }
    }

    if options.config.stdin {
        if !options.paths.is_empty() {
            return Err("Cannot specify paths with --stdin".to_string());
        }
        if options.config.check {
            return Err("Cannot use --check with --stdin".to_string());
        }
        if options.config.diff {
            return Err("Cannot use --diff with --stdin".to_string());
        }
    }

    Ok(options)
}

/// Exit status for a clean run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status when any file failed, or would change under `--check`.
pub const EXIT_FAILURE: u8 = 1;

/// Run the format command, returning the process exit status.
pub fn run_format(args: &[String]) -> u8 {
    let options = match parse_args(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Run 'chainfmt --help' for usage");
            return EXIT_FAILURE;
        }
    };
    if options.help {
        print_help();
        return EXIT_SUCCESS;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let fixer = match resolve_style(&options.style, &cwd).and_then(|style| {
        ChainIndentationFixer::new(style).map_err(|e| e.to_string())
    }) {
        Ok(fixer) => fixer,
        Err(message) => {
            eprintln!("error: {message}");
            return EXIT_FAILURE;
        }
    };

    let config = &options.config;
    if config.stdin {
        return if format_stdin(&fixer) {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        };
    }

    let mut paths = options.paths.clone();
    if paths.is_empty() {
        paths.push(".".to_string());
    }

    let mut totals = FormatTotals::default();
    for path in &paths {
        let path_obj = Path::new(path);
        if path_obj.is_file() {
            let result = format_file(path_obj, config, &fixer);
            report(path, &result, config);
            totals.record(&result);
        } else if path_obj.is_dir() {
            totals.add(format_directory(path_obj, config, &fixer));
        } else {
            eprintln!("Path not found: {path}");
            totals.errors += 1;
        }
    }

    // Summary for multi-file runs
    if paths.len() > 1 || paths.iter().any(|p| Path::new(p).is_dir()) {
        let verb = if config.check { "would format" } else { "formatted" };
        if totals.formatted > 0 || totals.unchanged > 0 {
            println!("\n{} {verb}, {} unchanged", totals.formatted, totals.unchanged);
        }
    }

    if totals.errors > 0 || (config.check && totals.formatted > 0) {
        return EXIT_FAILURE;
    }
    EXIT_SUCCESS
}

fn print_help() {
    println!("Normalize method-chain indentation in PHP files");
    println!();
    println!("Usage: chainfmt [options] [paths...]");
    println!();
    println!("Arguments:");
    println!("  paths                 Files or directories to format (default: .)");
    println!();
    println!("Options:");
    println!("  --check               Check if files are formatted (exit 1 if not)");
    println!("  --diff                Show diff output instead of modifying files");
    println!("  --stdin               Read from stdin, write to stdout");
    println!("  --no-ignore           Ignore .chainfmtignore files and format everything");
    println!("  --indent=<N|tab>      Indent with N spaces or a tab (default: 4)");
    println!("  --line-ending=<lf|crlf|cr>");
    println!("                        Line ending for inserted line breaks (default: lf)");
    println!("  --config=<path>       Settings file (default: ./chainfmt.json if present)");
    println!("  --help                Show this help message");
    println!();
    println!("Settings file keys:");
    println!("  indent, line_ending, open_markers, close_markers, break_marked_chains");
    println!();
    println!("Ignore files:");
    println!("  Create a .chainfmtignore file to exclude paths from formatting.");
    println!("  Patterns support * (single directory) and ** (any directories).");
    println!("  Default ignores: hidden files (.*), vendor/, node_modules/");
    println!();
    println!("Examples:");
    println!("  chainfmt                        # Format all files in current directory");
    println!("  chainfmt src/                   # Format all files in src/");
    println!("  chainfmt --check                # Check formatting in CI");
    println!("  chainfmt --diff Repo.php        # Preview formatting changes");
    println!("  cat Repo.php | chainfmt --stdin # Format stdin to stdout");
}

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const RESET: &str = "\x1b[0m";
}

/// Check if stderr is a terminal (for color output).
fn use_colors() -> bool {
    std::io::stderr().is_terminal()
}

/// Render a per-file error message for stderr.
fn render_error(path: &Path, message: &str) -> String {
    if use_colors() {
        format!(
            "{}error{}: {}: {message}\n",
            colors::ERROR,
            colors::RESET,
            path.display()
        )
    } else {
        format!("error: {}: {message}\n", path.display())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
