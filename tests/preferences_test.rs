// ABOUTME: Integration tests for unit and language preference persistence
// ABOUTME: Exercises the JSON file store in temporary directories and the typed wrapper fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pace_assistant::i18n::Language;
use pace_assistant::preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences,
};
use pace_assistant::{ErrorCode, UnitSystem};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_stored_values() {
    let prefs = Preferences::new(MemoryPreferenceStore::new());
    assert_eq!(prefs.unit().unwrap(), UnitSystem::Kilometer);
    assert_eq!(prefs.language().unwrap(), Language::Zh);
}

#[test]
fn test_configured_defaults() {
    let prefs = Preferences::with_defaults(
        MemoryPreferenceStore::new(),
        UnitSystem::Mile,
        Language::En,
    );
    assert_eq!(prefs.unit().unwrap(), UnitSystem::Mile);
    assert_eq!(prefs.language().unwrap(), Language::En);
}

#[test]
fn test_file_store_missing_file_reads_empty() {
    let dir = TempDir::new().unwrap();
    let store = FilePreferenceStore::new(dir.path().join("missing.json"));
    assert_eq!(store.get("unit").unwrap(), None);
}

#[test]
fn test_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("preferences.json");

    let mut prefs = Preferences::new(FilePreferenceStore::new(&path));
    prefs.set_unit(UnitSystem::Mile).unwrap();
    prefs.set_language(Language::En).unwrap();

    let reopened = Preferences::new(FilePreferenceStore::new(&path));
    assert_eq!(reopened.unit().unwrap(), UnitSystem::Mile);
    assert_eq!(reopened.language().unwrap(), Language::En);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["unit"], "mile");
    assert_eq!(raw["language"], "en");
}

#[test]
fn test_file_store_set_keeps_other_keys() {
    let dir = TempDir::new().unwrap();
    let mut store = FilePreferenceStore::new(dir.path().join("prefs.json"));

    store.set("unit", "km").unwrap();
    store.set("language", "zh").unwrap();
    store.set("unit", "mile").unwrap();

    assert_eq!(store.get("unit").unwrap().as_deref(), Some("mile"));
    assert_eq!(store.get("language").unwrap().as_deref(), Some("zh"));
}

#[test]
fn test_empty_file_reads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "  \n").unwrap();

    let prefs = Preferences::new(FilePreferenceStore::new(&path));
    assert_eq!(prefs.unit().unwrap(), UnitSystem::Kilometer);
}

#[test]
fn test_unrecognized_stored_value_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"unit": "furlong", "language": "fr"}"#).unwrap();

    let prefs = Preferences::new(FilePreferenceStore::new(&path));
    assert_eq!(prefs.unit().unwrap(), UnitSystem::Kilometer);
    assert_eq!(prefs.language().unwrap(), Language::Zh);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{not json").unwrap();

    let err = Preferences::new(FilePreferenceStore::new(&path))
        .unit()
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_default_path_names_preferences_file() {
    let path = FilePreferenceStore::default_path();
    let name = path.file_name().unwrap().to_string_lossy();
    assert!(name.ends_with("preferences.json"), "{name}");
}

#[test]
fn test_set_repairs_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{not json").unwrap();

    let mut store = FilePreferenceStore::new(&path);
    store.set("unit", "km").unwrap();
    assert_eq!(store.get("unit").unwrap().as_deref(), Some("km"));
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn test_typed_setter_repairs_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{not json").unwrap();

    let mut prefs = Preferences::new(FilePreferenceStore::new(&path));
    prefs.set_unit(UnitSystem::Mile).unwrap();

    assert_eq!(prefs.unit().unwrap(), UnitSystem::Mile);
    assert_eq!(prefs.language().unwrap(), Language::Zh);
}

#[test]
fn test_set_still_fails_when_file_is_unreadable() {
    let dir = TempDir::new().unwrap();
    // A directory in place of the file is an I/O failure, not bad JSON
    let path = dir.path().join("prefs.json");
    fs::create_dir(&path).unwrap();

    let err = FilePreferenceStore::new(&path)
        .set("unit", "km")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}
