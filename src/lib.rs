// ABOUTME: Main library entry point for the marathon pace assistant
// ABOUTME: Wires the pace-core engine to state, validation, localization, preferences and output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pace Assistant
//!
//! A calculator for runners. Pick a race (full marathon, half marathon or
//! 10K) and enter either a target finish time or a pace to get the other;
//! enter a treadmill speed to get the outdoor pace that costs the same effort.
//! Values switch between kilometers and miles, and text is available in
//! Chinese and English.
//!
//! ## Architecture
//!
//! - **`pace_core`**: the pure conversion engine (re-exported as [`engine`])
//! - **state**: immutable calculator state, rebuilt on every interaction
//! - **validation**: parsing of free-form input before the engine is called
//! - **i18n** / **render**: string tables and localized output
//! - **preferences**: persisted unit and language
//! - **config** / **logging**: environment configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust
//! use pace_assistant::state::CalculatorState;
//! use pace_assistant::{FinishTime, RaceDistance, UnitSystem};
//!
//! let state = CalculatorState::new(RaceDistance::HalfMarathon, UnitSystem::Kilometer)
//!     .with_finish_time(FinishTime::from_minutes(90.0));
//! assert_eq!(state.evaluate().pace.to_string(), "4:16");
//! ```

/// Application constants and environment variable names
pub mod constants;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Display languages and string tables
pub mod i18n;

/// Input validation before calculation
pub mod validation;

/// Immutable calculator state
pub mod state;

/// Localized text rendering
pub mod render;

/// Persisted unit and language preferences
pub mod preferences;

/// Text and JSON output formats
pub mod formatters;

pub use pace_core::{engine, errors, formatting};
pub use pace_core::{
    convert_unit, AppError, AppResult, Distance, ErrorCode, FinishTime, Pace, RaceDistance,
    Speed, UnitSystem, ValueRange,
};
