// ABOUTME: Presentation layer that interpolates engine output into localized display text
// ABOUTME: Renders pace tab, treadmill tab, unit/language switch notices and validation notices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Rendering
//!
//! All numbers come from an [`Evaluation`]; this module only chooses strings
//! from the active [`Language`] and puts the two together.

use crate::i18n::{Language, Translations};
use crate::state::Evaluation;
use crate::validation::fields;
use pace_core::{AppError, ErrorCode, Pace, Speed, UnitSystem, ValueRange};
use serde::Serialize;
use std::fmt;

/// A titled message, the text form of a UI notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Short heading
    pub title: String,
    /// Body text
    pub description: String,
}

impl Notice {
    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.description)
    }
}

/// Localized renderer
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    language: Language,
}

impl Renderer {
    /// Renderer for `language`
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    /// Active language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    const fn t(&self) -> &'static Translations {
        self.language.translations()
    }

    /// `5:00 分钟/km` / `5:00 min/km`
    #[must_use]
    pub fn pace(&self, pace: Pace) -> String {
        let t = self.t();
        format!(
            "{pace} {}/{}",
            t.minutes,
            t.distance_label(pace.unit())
        )
    }

    /// `10.4 km/h`
    #[must_use]
    pub fn speed(&self, speed: Speed) -> String {
        format!("{speed} {}", self.t().speed_label(speed.unit()))
    }

    /// Lines for the pace tab
    #[must_use]
    pub fn pace_tab(&self, evaluation: &Evaluation) -> Vec<String> {
        let t = self.t();
        vec![
            format!(
                "{} ({} {})",
                t.race_name(evaluation.race),
                evaluation.distance.value(),
                t.distance_label(evaluation.unit)
            ),
            format!("{}: {}", t.target_finish_time, evaluation.finish_time),
            format!("{}: {}", t.pace, self.pace(evaluation.pace)),
        ]
    }

    /// Lines for the treadmill tab
    #[must_use]
    pub fn treadmill_tab(&self, evaluation: &Evaluation) -> Vec<String> {
        let t = self.t();
        let treadmill = &evaluation.treadmill;
        vec![
            format!("{}: {}", t.treadmill_speed, self.speed(treadmill.speed)),
            format!("{}: {}", t.actual_pace, self.pace(treadmill.actual_pace)),
            format!(
                "{}: {}",
                t.equivalent_road_pace,
                self.pace(treadmill.road_pace)
            ),
            format!(
                "{} {} ≈ {} {}",
                t.treadmill,
                self.speed(treadmill.speed),
                t.road,
                self.speed(treadmill.road_speed)
            ),
        ]
    }

    /// Result notice for a pace calculated from a finish time
    #[must_use]
    pub fn pace_result(&self, evaluation: &Evaluation) -> Notice {
        let t = self.t();
        Notice::new(
            t.pace_result_title,
            format!("{}: {}", t.target_pace_is, self.pace(evaluation.pace)),
        )
    }

    /// Result notice for a treadmill conversion
    #[must_use]
    pub fn speed_result(&self, evaluation: &Evaluation) -> Notice {
        let t = self.t();
        let treadmill = &evaluation.treadmill;
        Notice::new(
            t.speed_result_title,
            format!(
                "{} {} ≈ {} {}",
                t.treadmill,
                self.speed(treadmill.speed),
                t.road,
                self.speed(treadmill.road_speed)
            ),
        )
    }

    /// `单位已切换为 英里` / `Unit switched to mile`
    #[must_use]
    pub fn unit_switched(&self, unit: UnitSystem) -> String {
        let t = self.t();
        format!("{} {}", t.unit_switched, t.unit_name(unit))
    }

    /// `Language switched to English`
    #[must_use]
    pub fn language_switched(&self) -> String {
        format!(
            "{} {}",
            self.t().language_switched,
            self.language.native_name()
        )
    }

    /// Localized notice for any [`AppError`]
    ///
    /// The text is built from the error's code, field and range; the English
    /// `message` is left to logs and JSON output.
    #[must_use]
    pub fn error(&self, error: &AppError) -> Notice {
        let t = self.t();
        let field = error.field.as_deref().unwrap_or(fields::VALUE);
        let name = t.field_name(field);
        match error.code {
            ErrorCode::MissingRequiredField | ErrorCode::InvalidInput
                if field == fields::FINISH_TIME =>
            {
                Notice::new(t.enter_valid_time, t.enter_hours_or_minutes)
            }
            ErrorCode::MissingRequiredField if field == fields::SPEED => {
                Notice::new(t.enter_speed, t.enter_treadmill_speed)
            }
            ErrorCode::MissingRequiredField => {
                Notice::new(t.missing_value, t.enter_field.replace("{field}", name))
            }
            ErrorCode::InvalidInput => {
                Notice::new(t.invalid_input, t.check_field.replace("{field}", name))
            }
            ErrorCode::InvalidFormat => Notice::new(t.invalid_format, format_hint(t, field, name)),
            ErrorCode::ValueOutOfRange => Notice::new(
                t.value_out_of_range,
                error.range.map_or_else(
                    || t.range_exceeded.replace("{field}", name),
                    |range| self.range_hint(field, name, range),
                ),
            ),
            ErrorCode::ConfigInvalid => Notice::new(t.config_invalid, t.config_invalid_hint),
            ErrorCode::StorageError => Notice::new(t.storage_failed, t.storage_failed_hint),
            ErrorCode::SerializationError => {
                Notice::new(t.data_unreadable, t.data_unreadable_hint)
            }
        }
    }

    fn range_hint(&self, field: &str, name: &str, range: ValueRange) -> String {
        let t = self.t();
        let unit = match (field, range.unit) {
            (fields::PACE, Some(unit)) => format!("{}/{}", t.seconds, t.distance_label(unit)),
            (fields::SPEED, Some(unit)) => t.speed_label(unit).to_owned(),
            (_, Some(unit)) => t.distance_label(unit).to_owned(),
            (_, None) => t.minutes.to_owned(),
        };
        t.range_between
            .replace("{field}", name)
            .replace("{min}", &format_bound(range.min))
            .replace("{max}", &format_bound(range.max))
            .replace("{unit}", &unit)
    }
}

fn format_hint(t: &Translations, field: &str, name: &str) -> String {
    match field {
        fields::PACE => t.pace_format_hint.to_owned(),
        fields::UNIT => t.unit_format_hint.to_owned(),
        fields::RACE => t.race_format_hint.to_owned(),
        fields::LANGUAGE => t.language_format_hint.to_owned(),
        _ => t.enter_number_for.replace("{field}", name),
    }
}

/// Whole bounds print without decimals, others with one
fn format_bound(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_label_uses_language() {
        let pace = Pace::from_seconds(256.0, UnitSystem::Kilometer);
        assert_eq!(Renderer::new(Language::Zh).pace(pace), "4:16 分钟/km");
        assert_eq!(Renderer::new(Language::En).pace(pace), "4:16 min/km");
    }

    #[test]
    fn test_unit_switched_notice() {
        assert_eq!(
            Renderer::new(Language::Zh).unit_switched(UnitSystem::Mile),
            "单位已切换为 英里"
        );
        assert_eq!(
            Renderer::new(Language::En).unit_switched(UnitSystem::Kilometer),
            "Unit switched to kilometer"
        );
    }

    #[test]
    fn test_missing_speed_notice() {
        let notice = Renderer::new(Language::Zh).error(&AppError::missing_field(fields::SPEED));
        assert_eq!(notice.title, "请输入速度");
        assert_eq!(notice.description, "请输入跑步机速度");
    }

    #[test]
    fn test_format_bound() {
        assert_eq!(format_bound(241.0), "241");
        assert_eq!(format_bound(2.485_484_8), "2.5");
        assert_eq!(format_bound(12.427_423_8), "12.4");
    }
}
