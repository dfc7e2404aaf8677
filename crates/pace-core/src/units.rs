// ABOUTME: Unit system selection (kilometers or miles) and distance-like unit conversion
// ABOUTME: Provides labels, parsing, toggling, and the 1.609344 km/mile scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{conversions::KM_PER_MILE, fields};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement convention used for distances, paces and speeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Metric, kilometer based
    #[default]
    #[serde(rename = "km")]
    Kilometer,
    /// Imperial, mile based
    #[serde(rename = "mile", alias = "mi")]
    Mile,
}

impl UnitSystem {
    /// Both unit systems, metric first
    pub const ALL: [Self; 2] = [Self::Kilometer, Self::Mile];

    /// Stable identifier, also the value persisted in the preference store
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kilometer => "km",
            Self::Mile => "mile",
        }
    }

    /// Short distance label (`km` / `mi`)
    #[must_use]
    pub const fn distance_label(&self) -> &'static str {
        match self {
            Self::Kilometer => "km",
            Self::Mile => "mi",
        }
    }

    /// Speed label (`km/h` / `mi/h`)
    #[must_use]
    pub const fn speed_label(&self) -> &'static str {
        match self {
            Self::Kilometer => "km/h",
            Self::Mile => "mi/h",
        }
    }

    /// The other unit system
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Kilometer => Self::Mile,
            Self::Mile => Self::Kilometer,
        }
    }

    /// Kilometers in one unit of this system
    #[must_use]
    pub const fn kilometers_per_unit(&self) -> f64 {
        match self {
            Self::Kilometer => 1.0,
            Self::Mile => KM_PER_MILE,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "km" | "kilometer" | "kilometers" | "metric" => Ok(Self::Kilometer),
            "mi" | "mile" | "miles" | "imperial" => Ok(Self::Mile),
            _ => Err(AppError::invalid_format(fields::UNIT, s)),
        }
    }
}

/// Convert a distance-like quantity (a distance or a speed) between unit systems
///
/// Kilometers become miles by dividing by 1.609344 and miles become
/// kilometers by multiplying. Paces are time per distance and therefore scale
/// the other way; use [`crate::Pace::in_unit`] for those.
#[must_use]
pub fn convert_unit(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return value;
    }
    value * from.kilometers_per_unit() / to.kilometers_per_unit()
}
