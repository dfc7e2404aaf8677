// ABOUTME: Key-value preference storage for the active unit system and display language
// ABOUTME: Provides an in-memory store, a JSON file store, and a typed Preferences wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Preferences
//!
//! The only state that survives between sessions is the unit system and the
//! display language, one key each. Stored values that are missing or not
//! recognized fall back to the defaults (`km`, `zh`).

use crate::constants::{paths, preference_keys};
use crate::i18n::Language;
use pace_core::{AppError, AppResult, ErrorCode, UnitSystem};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// String key-value storage for user preferences
pub trait PreferenceStore {
    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Preference store held in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Preference store persisted as a flat JSON object in a file
///
/// The whole file is read on every `get` and rewritten on every `set`. A
/// missing file reads as an empty store; a file that is not valid JSON fails
/// on `get` and is replaced on `set`.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the platform config directory
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(paths::FALLBACK_PREFERENCES_PATH),
            |dir| {
                dir.join(paths::APP_DIR_NAME)
                    .join(paths::PREFERENCES_FILE_NAME)
            },
        )
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> AppResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read preferences from {}",
                self.path.display()
            ))
            .with_source(e)),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(e) if e.code == ErrorCode::SerializationError => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "preference file is not valid JSON, rewriting it"
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, json).map_err(|e| {
            AppError::storage(format!(
                "Failed to write preferences to {}",
                self.path.display()
            ))
            .with_source(e)
        })?;

        debug!(key, value, path = %self.path.display(), "preference saved");
        Ok(())
    }
}

/// Typed access to the unit and language preferences
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
    default_unit: UnitSystem,
    default_language: Language,
}

impl<S: PreferenceStore> Preferences<S> {
    /// Wrap a store, falling back to `km` and `zh`
    pub fn new(store: S) -> Self {
        Self::with_defaults(store, UnitSystem::default(), Language::default())
    }

    /// Wrap a store with explicit fallbacks
    pub const fn with_defaults(
        store: S,
        default_unit: UnitSystem,
        default_language: Language,
    ) -> Self {
        Self {
            store,
            default_unit,
            default_language,
        }
    }

    /// Stored unit system, or the default
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn unit(&self) -> AppResult<UnitSystem> {
        Ok(self
            .read_parsed(preference_keys::UNIT)?
            .unwrap_or(self.default_unit))
    }

    /// Persist the unit system
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn set_unit(&mut self, unit: UnitSystem) -> AppResult<()> {
        self.store.set(preference_keys::UNIT, unit.as_str())
    }

    /// Stored display language, or the default
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn language(&self) -> AppResult<Language> {
        Ok(self
            .read_parsed(preference_keys::LANGUAGE)?
            .unwrap_or(self.default_language))
    }

    /// Persist the display language
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn set_language(&mut self, language: Language) -> AppResult<()> {
        self.store.set(preference_keys::LANGUAGE, language.as_str())
    }

    fn read_parsed<T>(&self, key: &str) -> AppResult<Option<T>>
    where
        T: std::str::FromStr<Err = AppError>,
    {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, value = %raw, error = %e, "ignoring unrecognized stored preference");
                Ok(None)
            }
        }
    }
}
