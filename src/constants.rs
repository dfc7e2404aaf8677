// ABOUTME: Application constants: service identity, environment variable names, preference keys
// ABOUTME: Numeric engine constants live in pace-core; this module covers the application shell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Names and defaults for the application around the conversion engine.
//! Engine numbers (race distances, factors, ranges) are re-exported from
//! [`pace_core::constants`].

pub use pace_core::constants::{conversions, defaults, fields, limits, race_distances, treadmill};

/// Service identity used in structured logs
pub mod service_names {
    /// Library default
    pub const PACE_ASSISTANT: &str = "pace-assistant";
    /// Command-line binary
    pub const PACE_CLI: &str = "pace-cli";
}

/// Environment variable names read by [`crate::config::environment`]
pub mod env_vars {
    /// Preference file location
    pub const PREFERENCES_PATH: &str = "PACE_PREFERENCES_PATH";
    /// Unit system used when none is stored
    pub const DEFAULT_UNIT: &str = "PACE_DEFAULT_UNIT";
    /// Language used when none is stored
    pub const DEFAULT_LANGUAGE: &str = "PACE_DEFAULT_LANGUAGE";
    /// `development` or `production`
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// `EnvFilter` directives
    pub const RUST_LOG: &str = "RUST_LOG";
    /// `json`, `pretty` or `compact`
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Any value adds source file and line to log lines
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// Keys in the preference store
pub mod preference_keys {
    /// Active unit system, `km` or `mile`
    pub const UNIT: &str = "unit";
    /// Display language, `zh` or `en`
    pub const LANGUAGE: &str = "language";
}

/// File locations
pub mod paths {
    /// Directory created under the platform config dir
    pub const APP_DIR_NAME: &str = "pace-assistant";
    /// Preference file inside the app directory
    pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
    /// Used when the platform has no config dir
    pub const FALLBACK_PREFERENCES_PATH: &str = "./pace-preferences.json";
}
