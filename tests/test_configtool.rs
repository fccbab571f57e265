use std::fs;
use rpawogen::charclass::CharacterClass;
use rpawogen::configtool::{ConfigError, Settings};
use tempfile::tempdir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
    let config = settings.generation_config().unwrap();
    assert_eq!(config.length(), 10);
    assert_eq!(config.enabled_classes(), vec![CharacterClass::Lowercase]);
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("nested").join("settings.json");
    let settings = Settings {
        length: 16,
        classes: vec![CharacterClass::Uppercase, CharacterClass::Symbols],
        clipboard_clear_secs: Some(30),
        show_strength: false,
    };
    settings.save_to(&path).unwrap();
    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_partial_file_uses_field_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "length": 4 }"#).unwrap();
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.length, 4);
    assert_eq!(settings.classes, vec![CharacterClass::Lowercase]);
    assert!(settings.show_strength);
}

#[test]
fn test_invalid_settings_are_rejected() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("settings.json");

    fs::write(&path, r#"{ "length": 30 }"#).unwrap();
    assert!(matches!(Settings::load_from(&path), Err(ConfigError::Invalid(_))));

    fs::write(&path, r#"{ "classes": [] }"#).unwrap();
    assert!(matches!(Settings::load_from(&path), Err(ConfigError::Invalid(_))));

    fs::write(&path, "not json").unwrap();
    assert!(matches!(Settings::load_from(&path), Err(ConfigError::JsonError(_))));
}
