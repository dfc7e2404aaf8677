// ABOUTME: Display language selection and lookup of localized string tables
// ABOUTME: Chinese is the default; unknown stored languages fall back to it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Localization
//!
//! Strings are kept entirely apart from the numeric engine. The renderer asks
//! a [`Language`] for its [`Translations`] and interpolates engine output into
//! them.

/// Static string tables
pub mod translations;

pub use translations::Translations;

use pace_core::constants::fields;
use pace_core::{AppError, AppResult, RaceDistance, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Simplified Chinese
    #[default]
    Zh,
    /// English
    En,
}

impl Language {
    /// All supported languages
    pub const ALL: [Self; 2] = [Self::Zh, Self::En];

    /// Stable identifier, also the value persisted in the preference store
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// String table for this language
    #[must_use]
    pub const fn translations(&self) -> &'static Translations {
        match self {
            Self::Zh => &translations::ZH,
            Self::En => &translations::EN,
        }
    }

    /// Parse with fallback to the default language
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Name of the language in its own script
    #[must_use]
    pub const fn native_name(&self) -> &'static str {
        match self {
            Self::Zh => "中文",
            Self::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh-cn" | "chinese" => Ok(Self::Zh),
            "en" | "en-us" | "english" => Ok(Self::En),
            _ => Err(AppError::invalid_format(fields::LANGUAGE, s)),
        }
    }
}

impl Translations {
    /// Localized race name
    #[must_use]
    pub const fn race_name(&self, race: RaceDistance) -> &'static str {
        match race {
            RaceDistance::FullMarathon => self.full_marathon,
            RaceDistance::HalfMarathon => self.half_marathon,
            RaceDistance::TenK => self.ten_k,
        }
    }

    /// Localized unit system name (`公里` / `mile`)
    #[must_use]
    pub const fn unit_name(&self, unit: UnitSystem) -> &'static str {
        match unit {
            UnitSystem::Kilometer => self.kilometer,
            UnitSystem::Mile => self.mile,
        }
    }

    /// Localized distance label (`km` / `mi`)
    #[must_use]
    pub const fn distance_label(&self, unit: UnitSystem) -> &'static str {
        match unit {
            UnitSystem::Kilometer => self.km,
            UnitSystem::Mile => self.mi,
        }
    }

    /// Localized speed label (`km/h` / `mi/h`)
    #[must_use]
    pub const fn speed_label(&self, unit: UnitSystem) -> &'static str {
        match unit {
            UnitSystem::Kilometer => self.kmh,
            UnitSystem::Mile => self.mih,
        }
    }

    /// Localized name of an input field reported in `AppError::field`
    ///
    /// Unknown names fall back to the generic "value".
    #[must_use]
    pub fn field_name(&self, field: &str) -> &'static str {
        match field {
            fields::FINISH_TIME => self.field_finish_time,
            fields::HOURS => self.field_hours,
            fields::MINUTES => self.field_minutes,
            fields::PACE => self.field_pace,
            fields::SPEED => self.field_speed,
            fields::UNIT => self.field_unit,
            fields::RACE => self.field_race,
            fields::LANGUAGE => self.field_language,
            _ => self.field_value,
        }
    }
}
