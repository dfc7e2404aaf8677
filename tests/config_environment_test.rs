// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment variable parsing, defaults, and invalid value handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pace_assistant::config::{AppConfig, Environment};
use pace_assistant::constants::env_vars;
use pace_assistant::formatters::OutputFormat;
use pace_assistant::i18n::Language;
use pace_assistant::logging::{LogFormat, LoggingConfig};
use pace_assistant::{ErrorCode, UnitSystem};
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert!(!Environment::Development.is_production());
}

#[test]
fn test_output_format_parsing() {
    assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("text"), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
}

#[test]
fn test_lookup_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    let defaults = AppConfig::default();

    assert_eq!(config, defaults);
    assert_eq!(config.default_unit, UnitSystem::Kilometer);
    assert_eq!(config.default_language, Language::Zh);
    assert_eq!(config.environment, Environment::Development);
}

#[test]
fn test_lookup_overrides() {
    let config = AppConfig::from_lookup(lookup_from(&[
        (env_vars::PREFERENCES_PATH, "/tmp/pace/prefs.json"),
        (env_vars::DEFAULT_UNIT, "mile"),
        (env_vars::DEFAULT_LANGUAGE, "en"),
        (env_vars::ENVIRONMENT, "production"),
        (env_vars::RUST_LOG, "debug"),
    ]))
    .unwrap();

    assert_eq!(config.preferences_path, PathBuf::from("/tmp/pace/prefs.json"));
    assert_eq!(config.default_unit, UnitSystem::Mile);
    assert_eq!(config.default_language, Language::En);
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.log_filter, "debug");
    assert!(config.log_include_location, "production always logs locations");
    assert!(config.summary().contains("Default Unit: mile"));
}

#[test]
fn test_blank_values_use_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[
        (env_vars::DEFAULT_UNIT, "  "),
        (env_vars::PREFERENCES_PATH, ""),
    ]))
    .unwrap();
    assert_eq!(config.default_unit, UnitSystem::Kilometer);
    assert_eq!(config.preferences_path, AppConfig::default().preferences_path);
}

#[test]
fn test_invalid_unit_is_config_error() {
    let err = AppConfig::from_lookup(lookup_from(&[(env_vars::DEFAULT_UNIT, "furlong")]))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(env_vars::DEFAULT_UNIT));
}

#[test]
fn test_invalid_language_is_config_error() {
    let err = AppConfig::from_lookup(lookup_from(&[(env_vars::DEFAULT_LANGUAGE, "klingon")]))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    env::set_var(env_vars::DEFAULT_UNIT, "mi");
    env::set_var(env_vars::DEFAULT_LANGUAGE, "en");
    let config = AppConfig::from_env();
    env::remove_var(env_vars::DEFAULT_UNIT);
    env::remove_var(env_vars::DEFAULT_LANGUAGE);

    let config = config.unwrap();
    assert_eq!(config.default_unit, UnitSystem::Mile);
    assert_eq!(config.default_language, Language::En);
}

#[test]
fn test_log_filter_keeps_target_directives() {
    let config = AppConfig::from_lookup(lookup_from(&[(
        env_vars::RUST_LOG,
        "pace_assistant=debug,pace_core=trace",
    )]))
    .unwrap();

    assert_eq!(config.log_filter, "pace_assistant=debug,pace_core=trace");
    assert_eq!(
        LoggingConfig::from_config(&config).level,
        "pace_assistant=debug,pace_core=trace"
    );
}

#[test]
fn test_log_format_and_location_from_lookup() {
    let config = AppConfig::from_lookup(lookup_from(&[
        (env_vars::LOG_FORMAT, "json"),
        (env_vars::LOG_INCLUDE_LOCATION, "1"),
    ]))
    .unwrap();
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.log_include_location);

    let logging = LoggingConfig::from_config(&config);
    assert_eq!(logging.format, LogFormat::Json);
    assert!(logging.include_location);
}

#[test]
fn test_development_omits_locations_by_default() {
    let config = AppConfig::from_lookup(lookup_from(&[(env_vars::ENVIRONMENT, "dev")])).unwrap();
    assert!(!config.log_include_location);
    assert!(!LoggingConfig::from_config(&config).include_location);
}

#[test]
#[serial]
fn test_logging_config_from_process_environment() {
    env::set_var(env_vars::RUST_LOG, "debug");
    env::set_var(env_vars::LOG_FORMAT, "json");
    env::set_var(env_vars::ENVIRONMENT, "production");
    let config = AppConfig::from_env();
    env::remove_var(env_vars::RUST_LOG);
    env::remove_var(env_vars::LOG_FORMAT);
    env::remove_var(env_vars::ENVIRONMENT);

    let logging = LoggingConfig::from_config(&config.unwrap());
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.format, LogFormat::Json);
    assert!(logging.include_location);
}

#[test]
fn test_logging_defaults_to_quiet() {
    let config = LoggingConfig::from_config(&AppConfig::default()).with_service_name("pace-cli");

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "pace-cli");
    assert_eq!(config.verbose().level, "debug");
}
