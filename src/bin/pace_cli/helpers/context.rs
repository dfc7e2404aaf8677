// ABOUTME: Per-invocation context for pace-cli: resolved unit, language, output format, preferences
// ABOUTME: Command-line overrides win over stored preferences, which win over configured defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_assistant::{
    config::AppConfig,
    formatters::OutputFormat,
    i18n::Language,
    preferences::{FilePreferenceStore, Preferences},
    render::Renderer,
    AppResult, UnitSystem,
};
use tracing::{debug, warn};

/// Everything a command needs besides its own arguments
pub struct Context {
    pub preferences: Preferences<FilePreferenceStore>,
    pub unit: UnitSystem,
    pub language: Language,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve the context from configuration, stored preferences and flags
    pub fn resolve(
        config: AppConfig,
        unit_flag: Option<&str>,
        lang_flag: Option<&str>,
        format: OutputFormat,
    ) -> AppResult<Self> {
        let store = FilePreferenceStore::new(config.preferences_path);
        debug!(path = %store.path().display(), "using preference file");
        let preferences =
            Preferences::with_defaults(store, config.default_unit, config.default_language);

        let unit = match unit_flag {
            Some(raw) => raw.parse()?,
            None => preferences.unit().unwrap_or_else(|e| {
                warn!(error = %e, "cannot read stored unit, using default");
                config.default_unit
            }),
        };
        let language = match lang_flag {
            Some(raw) => raw.parse()?,
            None => preferences.language().unwrap_or_else(|e| {
                warn!(error = %e, "cannot read stored language, using default");
                config.default_language
            }),
        };

        debug!(%unit, %language, %format, "cli context resolved");
        Ok(Self {
            preferences,
            unit,
            language,
            format,
        })
    }

    /// Renderer for the resolved language
    pub const fn renderer(&self) -> Renderer {
        Renderer::new(self.language)
    }
}
