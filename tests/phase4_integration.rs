//! Phase 4 tests: display config and CLI commands end to end.

use std::io::Cursor;

use adjlist_view::cli::commands::{self, OutputFormat};
use adjlist_view::config::{load_config, parse_config, Direction, DisplayConfig, NodeShape};
use adjlist_view::types::error::AdjError;

use tempfile::NamedTempFile;

// ==================== Config ====================

#[test]
fn test_config_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config, DisplayConfig::default());
    assert_eq!(config.direction, Direction::TopDown);
    assert_eq!(config.shape, NodeShape::Circle);
    assert!((config.node_size - 40.0).abs() < f64::EPSILON);
    assert!(config.viewer.is_none());
    assert!(!config.viewer_command().is_empty());
}

#[test]
fn test_config_all_fields() {
    let config = parse_config(
        r#"
direction = "left-right"
shape = "box"
node_size = 25.5
viewer = "feh"
"#,
    )
    .unwrap();
    assert_eq!(config.direction, Direction::LeftRight);
    assert_eq!(config.shape, NodeShape::Box);
    assert!((config.node_size - 25.5).abs() < f64::EPSILON);
    assert_eq!(config.viewer_command(), "feh");
}

#[test]
fn test_config_rejects_unknown_direction() {
    assert!(matches!(
        parse_config("direction = \"diagonal\""),
        Err(AdjError::Config(_))
    ));
}

#[test]
fn test_config_rejects_bad_node_size() {
    assert!(matches!(
        parse_config("node_size = 0.0"),
        Err(AdjError::Config(_))
    ));
}

#[test]
fn test_load_config_file() {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "shape = \"box\"\n").unwrap();
    let config = load_config(tmp.path()).unwrap();
    assert_eq!(config.shape, NodeShape::Box);
}

#[test]
fn test_load_config_missing_file() {
    let result = load_config(std::path::Path::new("/nonexistent/adjview.toml"));
    assert!(matches!(result, Err(AdjError::Config(_))));
}

// ==================== Commands ====================

#[test]
fn test_format_names() {
    for name in ["svg", "dot", "json", "text"] {
        assert_eq!(OutputFormat::from_name(name).unwrap().name(), name);
    }
    assert!(OutputFormat::from_name("png").is_none());
}

#[test]
fn test_read_strict_flag() {
    let lenient = commands::cmd_read(&mut Cursor::new("1 2 3\n"), 1, false).unwrap();
    assert!(lenient[0].is_empty());

    let strict = commands::cmd_read(&mut Cursor::new("1 2 3\n"), 1, true);
    assert!(matches!(strict, Err(AdjError::MissingSeparator { line: 1 })));
}

#[test]
fn test_print_text_and_json() {
    let adj = commands::cmd_read(&mut Cursor::new("-1: 1, 2\n0: 3\n1:\n"), 3, false).unwrap();
    let config = DisplayConfig::default();

    let mut out = Vec::new();
    commands::cmd_print(&adj, OutputFormat::Text, &config, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[[1, 2], [3], []]\n");

    let mut out = Vec::new();
    commands::cmd_print(&adj, OutputFormat::Json, &config, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[[1,2],[3],[]]\n");
}

#[test]
fn test_print_dot() {
    let adj = commands::cmd_read(&mut Cursor::new("0: 1\n1: 0\n"), 2, false).unwrap();
    let mut out = Vec::new();
    commands::cmd_print(&adj, OutputFormat::Dot, &DisplayConfig::default(), &mut out).unwrap();
    let dot = String::from_utf8(out).unwrap();
    assert!(dot.contains("0 -> 1"));
    assert!(dot.contains("1 -> 0"));
}

#[test]
fn test_export_svg_file() {
    let adj = commands::cmd_read(&mut Cursor::new("0: 1\n1:\n"), 2, false).unwrap();
    let tmp = NamedTempFile::new().unwrap();
    commands::cmd_export(&adj, OutputFormat::Svg, &DisplayConfig::default(), tmp.path()).unwrap();
    let svg = std::fs::read_to_string(tmp.path()).unwrap();
    assert!(svg.contains("<svg"));
}

#[cfg(unix)]
#[test]
fn test_show_with_viewer() {
    let adj = commands::cmd_read(&mut Cursor::new("0: 1\n1: 0\n"), 2, false).unwrap();
    let config = DisplayConfig {
        viewer: Some("true".to_string()),
        ..DisplayConfig::default()
    };
    commands::cmd_show(&adj, &config).unwrap();
}
