//! Configuration system tests
//!
//! Tests for config paths and panel config loading/saving.

use std::time::Duration;

use slidepanel::config::PanelConfig;
use slidepanel::config_paths;
use slidepanel::host::RecordingHost;
use slidepanel::layout::Size;
use slidepanel::panel::{Panel, PanelContainer, PanelRef};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("slidepanel"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// Panel Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = PanelConfig::default();
    assert_eq!(config.transition_duration_ms, 250);
    assert!(config.animate_transitions);
    assert_eq!(config.transition_duration(), Duration::from_millis(250));
}

#[test]
fn test_missing_fields_use_defaults() {
    let config: PanelConfig = serde_yaml::from_str("transition_duration_ms: 80\n").unwrap();
    assert_eq!(config.transition_duration_ms, 80);
    assert!(config.animate_transitions);
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = PanelConfig {
        transition_duration_ms: 600,
        animate_transitions: false,
    };
    config.save_to(&path).unwrap();

    assert_eq!(PanelConfig::load_from(&path), config);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PanelConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, PanelConfig::default());
}

#[test]
fn test_load_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "transition_duration_ms: [not a number").unwrap();

    assert_eq!(PanelConfig::load_from(&path), PanelConfig::default());
}

#[test]
fn test_builder_takes_duration_from_config() {
    struct Blank;
    impl Panel for Blank {}

    let config = PanelConfig {
        transition_duration_ms: 125,
        animate_transitions: true,
    };
    let container = PanelContainer::builder(RecordingHost::new(Size::new(10.0, 10.0)))
        .center(PanelRef::new(Blank))
        .config(&config)
        .build();

    assert_eq!(container.transition_duration(), Duration::from_millis(125));
}
