//! Configuration system tests
//!
//! Tests for config paths and loading/saving the ruler config.

use pixruler::config::{PpiOverride, RulerConfig};
use pixruler::config_paths;
use pixruler::model::{BackgroundType, RulerPosition};
use pixruler::units::Units;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("pixruler"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_themes_and_logs_live_under_config_dir() {
    let base = config_paths::config_dir().unwrap();
    assert!(config_paths::themes_dir().unwrap().starts_with(&base));
    assert!(config_paths::logs_dir().unwrap().starts_with(&base));
}

// ========================================================================
// Load/Save Tests
// ========================================================================

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = RulerConfig {
        theme: "night".to_string(),
        position: RulerPosition::Bottom,
        units: Units::Inches,
        length: 1024,
        always_on_top: false,
        background: BackgroundType::Solid,
        ppi_override: Some(PpiOverride {
            horizontal: 110.0,
            vertical: 110.0,
        }),
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    let loaded = RulerConfig::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = RulerConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(loaded, RulerConfig::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "position: [not, a, position\n").unwrap();
    assert_eq!(RulerConfig::load_from(&path), RulerConfig::default());
}

#[test]
fn test_unit_aliases_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "units: pica\nposition: left\n").unwrap();

    let loaded = RulerConfig::load_from(&path);
    assert_eq!(loaded.units, Units::Picas);
    assert_eq!(loaded.position, RulerPosition::Left);
}

#[test]
fn test_optional_fields_are_omitted_when_unset() {
    let yaml = serde_yaml::to_string(&RulerConfig::default()).unwrap();
    assert!(!yaml.contains("ppi_override"));
    assert!(!yaml.contains("font_path"));
    assert!(!yaml.contains("window"));
}
