use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_config() {
    let config = IndentConfig::default();
    assert_eq!(config.indent, "    ");
    assert_eq!(config.line_ending, "\n");
    assert!(config.break_marked_chains);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn classify_default_markers() {
    let markers = MarkerSet::default();
    assert_eq!(markers.classify("andClause"), CallMarker::Open);
    assert_eq!(markers.classify("orClause"), CallMarker::Open);
    assert_eq!(markers.classify("endClause"), CallMarker::Close);
    assert_eq!(markers.classify("andWhere"), CallMarker::Plain);
}

#[test]
fn classify_is_case_sensitive() {
    let markers = MarkerSet::default();
    assert_eq!(markers.classify("ANDCLAUSE"), CallMarker::Plain);
}

#[test]
fn custom_markers() {
    let markers = MarkerSet::new(["begin"], ["end"]);
    assert_eq!(markers.classify("begin"), CallMarker::Open);
    assert_eq!(markers.classify("end"), CallMarker::Close);
    assert_eq!(markers.classify("andClause"), CallMarker::Plain);
}

#[test]
fn builder_methods() {
    let config = IndentConfig::default()
        .with_indent("\t")
        .with_line_ending("\r\n")
        .with_break_marked_chains(false);
    assert_eq!(config.indent, "\t");
    assert_eq!(config.line_ending, "\r\n");
    assert!(!config.break_marked_chains);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn rejects_empty_indent() {
    let config = IndentConfig::default().with_indent("");
    assert_eq!(config.validate(), Err(ConfigError::EmptyIndent));
}

#[test]
fn rejects_non_whitespace_indent() {
    let config = IndentConfig::default().with_indent("--");
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidIndent("--".to_string()))
    );
}

#[test]
fn rejects_unknown_line_ending() {
    let config = IndentConfig::default().with_line_ending("\n\n");
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidLineEnding("\n\n".to_string()))
    );
}

#[test]
fn rejects_overlapping_markers() {
    let config =
        IndentConfig::default().with_markers(MarkerSet::new(["toggle", "a"], ["toggle"]));
    assert_eq!(
        config.validate(),
        Err(ConfigError::OverlappingMarker("toggle".to_string()))
    );
}

#[test]
fn settings_apply_only_present_fields() {
    let settings = IndentSettings {
        indent: Some("  ".to_string()),
        ..IndentSettings::default()
    };
    let config = settings.apply(IndentConfig::default());
    assert_eq!(config.indent, "  ");
    assert_eq!(config.line_ending, "\n");
    assert_eq!(config.markers, MarkerSet::default());
}

#[test]
fn settings_replace_one_marker_set() {
    let settings = IndentSettings {
        close_markers: Some(vec!["done".to_string()]),
        ..IndentSettings::default()
    };
    let config = settings.apply(IndentConfig::default());
    assert_eq!(config.markers.classify("done"), CallMarker::Close);
    assert_eq!(config.markers.classify("endClause"), CallMarker::Plain);
    assert_eq!(config.markers.classify("andClause"), CallMarker::Open);
}

#[test]
fn settings_from_json() {
    let json = r#"{ "indent": "\t", "open_markers": ["begin"], "break_marked_chains": false }"#;
    let settings: IndentSettings = serde_json::from_str(json).unwrap();
    let config = settings.apply(IndentConfig::default());
    assert_eq!(config.indent, "\t");
    assert_eq!(config.markers.classify("begin"), CallMarker::Open);
    assert_eq!(config.markers.classify("endClause"), CallMarker::Close);
    assert!(!config.break_marked_chains);
}

#[test]
fn settings_reject_unknown_keys() {
    let json = r#"{ "indent_size": 4 }"#;
    assert!(serde_json::from_str::<IndentSettings>(json).is_err());
}
