//! File discovery and `.chainfmtignore` handling.

use std::path::Path;

use super::FormatConfig;

/// Per-directory ignore file.
pub const IGNORE_FILE: &str = ".chainfmtignore";

/// Directory names skipped unless `--no-ignore` is given.
const SKIPPED_DIRS: &[&str] = &["vendor", "node_modules"];

/// Load ignore patterns from the ignore file in `root`.
///
/// Blank lines and `#` comments are skipped. A missing or unreadable file
/// yields no patterns.
pub(super) fn load_ignore_patterns(root: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(root.join(IGNORE_FILE)) else {
        return Vec::new();
    };
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Whether `path` (under `root`) matches any pattern.
///
/// Supported forms:
/// - `**` matches across directories (`build/**`, `**/*.tpl.php`)
/// - `*` matches within one path segment (`*.blade.php`)
/// - anything else matches the relative path, a directory prefix of it, or
///   the file name
pub(super) fn is_ignored(path: &Path, root: &Path, patterns: &[String]) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    let relative = relative.to_string_lossy().replace('\\', "/");
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

    patterns
        .iter()
        .any(|pattern| matches_pattern(pattern, &relative, file_name))
}

fn matches_pattern(pattern: &str, relative: &str, file_name: &str) -> bool {
    if let Some((prefix, suffix)) = pattern.split_once("**") {
        let prefix = prefix.trim_end_matches('/');
        let suffix = suffix.trim_start_matches('/');
        let matches_prefix = prefix.is_empty()
            || relative == prefix
            || relative.starts_with(&format!("{prefix}/"));
        let matches_suffix = suffix.is_empty()
            || relative
                .rsplit('/')
                .next()
                .is_some_and(|name| matches_segment(suffix, name))
            || relative.ends_with(suffix);
        return matches_prefix && matches_suffix;
    }

    if pattern.contains('*') {
        let subject = if pattern.contains('/') { relative } else { file_name };
        return matches_segment(pattern, subject);
    }

    relative == pattern || relative.starts_with(&format!("{pattern}/")) || file_name == pattern
}

/// Single `*` glob over one segment: `*` never crosses `/`.
fn matches_segment(pattern: &str, text: &str) -> bool {
    let Some((prefix, suffix)) = pattern.split_once('*') else {
        return pattern == text;
    };
    if suffix.contains('*') || text.len() < prefix.len() + suffix.len() {
        return false;
    }
    text.starts_with(prefix)
        && text.ends_with(suffix)
        && !text[prefix.len()..text.len() - suffix.len()].contains('/')
}

/// Visit all `.php` files under `dir`.
pub(super) fn visit_php_files<F: FnMut(&Path)>(
    dir: &Path,
    config: &FormatConfig,
    ignore_patterns: &[String],
    callback: &mut F,
) {
    visit_php_files_impl(dir, dir, config, ignore_patterns, callback);
}

fn visit_php_files_impl<F: FnMut(&Path)>(
    dir: &Path,
    root: &Path,
    config: &FormatConfig,
    ignore_patterns: &[String],
    callback: &mut F,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory '{}': {e}", dir.display());
            return;
        }
    };

    let mut paths: Vec<_> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();

    for path in paths {
        if !config.no_ignore {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') || SKIPPED_DIRS.contains(&name) {
                    continue;
                }
            }
            if is_ignored(&path, root, ignore_patterns) {
                continue;
            }
        }

        if path.is_dir() {
            visit_php_files_impl(&path, root, config, ignore_patterns, callback);
        } else if path.extension().is_some_and(|ext| ext == "php") {
            callback(&path);
        }
    }
}
