// ABOUTME: Logging configuration and structured logging setup for the pace assistant
// ABOUTME: Builds the subscriber from AppConfig: filter, format and location fields; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging with `tracing`. Results are printed on stdout by the
//! CLI, so every log layer writes to stderr.

use crate::config::AppConfig;
use crate::constants::service_names;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when the configured one does not parse
const FALLBACK_FILTER: &str = "warn";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive: a level (`debug`) or per-target list (`pace_core=trace,warn`)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `JSON` lines
    Json,
    /// Multi-line human-readable output
    Pretty,
    /// Single-line output
    #[default]
    Compact,
}

impl LogFormat {
    /// Parse from string, defaulting to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: FALLBACK_FILTER.into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: service_names::PACE_ASSISTANT.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Logging settings taken from the application configuration
    ///
    /// Production environments always include source locations.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            level: config.log_filter.clone(),
            format: config.log_format,
            include_location: config.log_include_location,
            ..Self::default()
        }
    }

    /// Same configuration with debug output for this crate
    #[must_use]
    pub fn verbose(self) -> Self {
        Self {
            level: "debug".into(),
            ..self
        }
    }

    /// Same configuration under another service name
    #[must_use]
    pub fn with_service_name(self, service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..self
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// The level string is handed to `EnvFilter` as is, so per-target
    /// directives work. A filter that does not parse falls back to `warn`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let (env_filter, rejected) = match EnvFilter::try_new(&self.level) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(FALLBACK_FILTER), Some(e)),
        };

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        if let Some(e) = rejected {
            warn!(filter = %self.level, error = %e, "invalid log filter, using warn");
        }
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "logging initialized"
        );
        Ok(())
    }
}
