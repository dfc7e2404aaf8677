// ABOUTME: Output format abstraction for CLI results: localized text or JSON
// ABOUTME: Builds serializable reports with both raw numbers and their display strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Text output is meant for people and goes through [`crate::render`]. JSON
//! output is meant for scripts: it carries the unrounded engine values next
//! to the strings a person would see.

use crate::state::Evaluation;
use pace_core::{AppError, ErrorCode, FinishTime, Pace, Speed, UnitSystem};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Localized human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for formatting operations
#[derive(Debug, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Serialize `data` as pretty JSON
///
/// # Errors
///
/// Returns `FormatError` if serialization fails
pub fn to_json<T: Serialize>(data: &T) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Json,
    })
}

/// A pace with its display string
#[derive(Debug, Clone, Serialize)]
pub struct PaceReport {
    /// Unrounded seconds per unit
    pub seconds_per_unit: f64,
    /// `M:SS`
    pub display: String,
    /// Unit system
    pub unit: UnitSystem,
}

impl From<Pace> for PaceReport {
    fn from(pace: Pace) -> Self {
        Self {
            seconds_per_unit: pace.seconds(),
            display: pace.to_string(),
            unit: pace.unit(),
        }
    }
}

/// A speed with its display string
#[derive(Debug, Clone, Serialize)]
pub struct SpeedReport {
    /// Unrounded units per hour
    pub value: f64,
    /// One decimal place
    pub display: String,
    /// Unit system
    pub unit: UnitSystem,
}

impl From<Speed> for SpeedReport {
    fn from(speed: Speed) -> Self {
        Self {
            value: speed.value(),
            display: speed.to_string(),
            unit: speed.unit(),
        }
    }
}

/// A finish time with its display strings
#[derive(Debug, Clone, Serialize)]
pub struct FinishTimeReport {
    /// Unrounded total seconds
    pub total_seconds: f64,
    /// `H:MM:SS`
    pub display: String,
    /// `H:MM`
    pub hours_minutes: String,
}

impl From<FinishTime> for FinishTimeReport {
    fn from(finish: FinishTime) -> Self {
        Self {
            total_seconds: finish.seconds(),
            display: finish.to_string(),
            hours_minutes: finish.to_hm(),
        }
    }
}

/// Pace tab report
#[derive(Debug, Clone, Serialize)]
pub struct RaceReport {
    /// Race identifier
    pub race: String,
    /// Race distance in `unit`
    pub distance: f64,
    /// Unit system
    pub unit: UnitSystem,
    /// Pace per unit
    pub pace: PaceReport,
    /// Total time
    pub finish_time: FinishTimeReport,
}

impl From<&Evaluation> for RaceReport {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            race: evaluation.race.to_string(),
            distance: evaluation.distance.value(),
            unit: evaluation.unit,
            pace: evaluation.pace.into(),
            finish_time: evaluation.finish_time.into(),
        }
    }
}

/// Treadmill tab report
#[derive(Debug, Clone, Serialize)]
pub struct TreadmillReport {
    /// Treadmill speed
    pub speed: SpeedReport,
    /// Unadjusted pace
    pub actual_pace: PaceReport,
    /// Road pace with the same effort
    pub road_pace: PaceReport,
    /// Road speed with the same effort
    pub road_speed: SpeedReport,
}

impl From<&Evaluation> for TreadmillReport {
    fn from(evaluation: &Evaluation) -> Self {
        let treadmill = &evaluation.treadmill;
        Self {
            speed: treadmill.speed.into(),
            actual_pace: treadmill.actual_pace.into(),
            road_pace: treadmill.road_pace.into(),
            road_speed: treadmill.road_speed.into(),
        }
    }
}
