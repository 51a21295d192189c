//! Style resolution: defaults, then a settings file, then command-line flags.

use std::path::{Path, PathBuf};

use chain_fmt::{IndentConfig, IndentSettings};

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "chainfmt.json";

/// Style values given on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleOverrides {
    /// `--indent=<N|tab>`, already expanded to its literal text.
    pub indent: Option<String>,
    /// `--line-ending=<lf|crlf|cr>`, already expanded.
    pub line_ending: Option<String>,
    /// `--config=<path>`: settings file to use instead of `chainfmt.json`.
    pub config_path: Option<PathBuf>,
}

/// Expand an `--indent` value: a space count or `tab`.
pub(super) fn parse_indent(value: &str) -> Result<String, String> {
    if value == "tab" {
        return Ok("\t".to_string());
    }
    match value.parse::<usize>() {
        Ok(width) if width > 0 => Ok(" ".repeat(width)),
        _ => Err(format!(
            "invalid --indent value '{value}': expected a positive number or 'tab'"
        )),
    }
}

/// Expand a `--line-ending` value.
pub(super) fn parse_line_ending(value: &str) -> Result<String, String> {
    match value {
        "lf" => Ok("\n".to_string()),
        "crlf" => Ok("\r\n".to_string()),
        "cr" => Ok("\r".to_string()),
        _ => Err(format!(
            "invalid --line-ending value '{value}': expected lf, crlf, or cr"
        )),
    }
}

fn load_settings(path: &Path) -> Result<IndentSettings, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| format!("invalid settings in '{}': {e}", path.display()))
}

/// Build the indentation config for a run.
///
/// An explicit `--config` file must exist; `chainfmt.json` in `cwd` is used
/// only when present. The result is validated.
pub fn resolve_style(overrides: &StyleOverrides, cwd: &Path) -> Result<IndentConfig, String> {
    let mut style = IndentConfig::default();

    let settings_path = match &overrides.config_path {
        Some(path) => Some(path.clone()),
        None => Some(cwd.join(SETTINGS_FILE)).filter(|p| p.is_file()),
    };
    if let Some(path) = settings_path {
        tracing::debug!(path = %path.display(), "loading settings");
        style = load_settings(&path)?.apply(style);
    }

    if let Some(indent) = &overrides.indent {
        style.indent.clone_from(indent);
    }
    if let Some(line_ending) = &overrides.line_ending {
        style.line_ending.clone_from(line_ending);
    }

    style.validate().map_err(|e| e.to_string())?;
    Ok(style)
}
