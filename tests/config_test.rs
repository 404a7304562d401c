//! Integration tests for Settings config loading.
//!
//! These tests use temp files as the local layer. A global config on the test
//! machine would sit below them; every test sets all keys it asserts on.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use fruittree::config::Settings;
use fruittree::domain::Fruit;
use fruittree::errors::SettingsError;

#[test]
fn given_local_config_when_load_then_overrides_all_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fruittree.toml");
    fs::write(
        &path,
        r#"
show_tree = true
kinds = ["apple"]
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert!(settings.show_tree);
    assert_eq!(settings.kinds, vec![Fruit::Apple]);
}

#[test]
fn given_empty_kinds_when_load_then_report_counts_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fruittree.toml");
    fs::write(&path, "kinds = []\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert!(settings.kinds.is_empty());
}

#[test]
fn given_missing_local_config_when_load_then_read_error() {
    let result = Settings::load(Some(Path::new("/nonexistent/fruittree.toml")));

    assert!(matches!(result, Err(SettingsError::Read { .. })));
}

#[test]
fn given_unknown_fruit_in_file_when_load_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fruittree.toml");
    fs::write(&path, "kinds = [\"banana\"]\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("fruittree.toml"));
}

#[test]
fn given_settings_when_to_toml_then_round_trips_through_file() {
    let settings = Settings {
        show_tree: true,
        kinds: vec![Fruit::Apple, Fruit::Orange],
    };
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fruittree.toml");
    fs::write(&path, settings.to_toml().unwrap()).unwrap();

    let loaded = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(loaded, settings);
}
