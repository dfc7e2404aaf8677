// ABOUTME: Environment configuration for the pace assistant
// ABOUTME: Reads preference file location, default unit and language, environment and log settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration. There is no config file; every setting
//! has a default and can be overridden by an environment variable.

use crate::constants::env_vars;
use crate::i18n::Language;
use crate::logging::LogFormat;
use crate::preferences::FilePreferenceStore;
use pace_core::{AppError, AppResult, UnitSystem};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Location of the preference file
    pub preferences_path: PathBuf,
    /// Unit system used when no preference has been stored
    pub default_unit: UnitSystem,
    /// Language used when no preference has been stored
    pub default_language: Language,
    /// Deployment environment
    pub environment: Environment,
    /// Raw `RUST_LOG` filter, passed through to `EnvFilter` unchanged
    pub log_filter: String,
    /// Log output format from `LOG_FORMAT`
    pub log_format: LogFormat,
    /// Source locations in log lines; always on in production
    pub log_include_location: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preferences_path: FilePreferenceStore::default_path(),
            default_unit: UnitSystem::default(),
            default_language: Language::default(),
            environment: Environment::default(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: LogFormat::default(),
            log_include_location: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if `PACE_DEFAULT_UNIT` or
    /// `PACE_DEFAULT_LANGUAGE` is set to an unrecognized value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error for unrecognized unit or language values
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let default_unit = match non_empty(env_vars::DEFAULT_UNIT) {
            Some(raw) => raw.parse::<UnitSystem>().map_err(|e| {
                AppError::config(format!("{} has invalid value '{raw}'", env_vars::DEFAULT_UNIT))
                    .with_source(e)
            })?,
            None => defaults.default_unit,
        };

        let default_language = match non_empty(env_vars::DEFAULT_LANGUAGE) {
            Some(raw) => raw.parse::<Language>().map_err(|e| {
                AppError::config(format!(
                    "{} has invalid value '{raw}'",
                    env_vars::DEFAULT_LANGUAGE
                ))
                .with_source(e)
            })?,
            None => defaults.default_language,
        };

        let environment = non_empty(env_vars::ENVIRONMENT)
            .map_or(defaults.environment, |v| Environment::from_str_or_default(&v));

        Ok(Self {
            preferences_path: non_empty(env_vars::PREFERENCES_PATH)
                .map_or(defaults.preferences_path, PathBuf::from),
            default_unit,
            default_language,
            environment,
            log_filter: non_empty(env_vars::RUST_LOG).unwrap_or(defaults.log_filter),
            log_format: non_empty(env_vars::LOG_FORMAT)
                .map_or(defaults.log_format, |v| LogFormat::from_str_or_default(&v)),
            log_include_location: environment.is_production()
                || lookup(env_vars::LOG_INCLUDE_LOCATION).is_some(),
        })
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pace Assistant Configuration:\n\
             - Preferences: {}\n\
             - Default Unit: {}\n\
             - Default Language: {}\n\
             - Environment: {}\n\
             - Log Filter: {}",
            self.preferences_path.display(),
            self.default_unit,
            self.default_language,
            self.environment,
            self.log_filter,
        )
    }
}
