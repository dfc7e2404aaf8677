// ABOUTME: Value types for the conversion engine: distance, pace, speed and finish time
// ABOUTME: Unit-tagged, immutable, kept unrounded in f64 until they are displayed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Engine Value Types
//!
//! Paces and speeds carry the [`UnitSystem`] they are expressed in, so a value
//! can only be compared or converted deliberately. Internally everything is an
//! unrounded `f64`; `Pace × Distance = FinishTime` holds exactly in that
//! domain and rounding happens only in the `Display` implementations.

use crate::constants::conversions::SECONDS_PER_MINUTE;
use crate::formatting::{
    format_minutes_to_hm, format_seconds_to_hms, format_seconds_to_ms, format_speed,
    round_seconds,
};
use crate::units::{convert_unit, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A length in kilometers or miles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    value: f64,
    unit: UnitSystem,
}

impl Distance {
    /// Create a distance
    #[must_use]
    pub const fn new(value: f64, unit: UnitSystem) -> Self {
        Self { value, unit }
    }

    /// Length in [`Self::unit`]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Unit system the length is expressed in
    #[must_use]
    pub const fn unit(&self) -> UnitSystem {
        self.unit
    }

    /// Exact conversion by 1.609344 km/mile
    #[must_use]
    pub fn in_unit(&self, unit: UnitSystem) -> Self {
        Self::new(convert_unit(self.value, self.unit, unit), unit)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.distance_label())
    }
}

/// Time needed to cover one unit of distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pace {
    seconds_per_unit: f64,
    unit: UnitSystem,
}

impl Pace {
    /// Pace from seconds per unit
    #[must_use]
    pub const fn from_seconds(seconds_per_unit: f64, unit: UnitSystem) -> Self {
        Self {
            seconds_per_unit,
            unit,
        }
    }

    /// Pace from minutes per unit
    #[must_use]
    pub fn from_minutes(minutes_per_unit: f64, unit: UnitSystem) -> Self {
        Self::from_seconds(minutes_per_unit * SECONDS_PER_MINUTE, unit)
    }

    /// Seconds per unit, unrounded
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.seconds_per_unit
    }

    /// Minutes per unit, unrounded
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.seconds_per_unit / SECONDS_PER_MINUTE
    }

    /// Unit system the pace is expressed in
    #[must_use]
    pub const fn unit(&self) -> UnitSystem {
        self.unit
    }

    /// Seconds per unit rounded to whole seconds, as displayed
    #[must_use]
    pub fn rounded_seconds(&self) -> u32 {
        round_seconds(self.seconds_per_unit)
    }

    /// Same pace per unit of another system
    ///
    /// A pace is time per distance, so a kilometer pace becomes a mile pace by
    /// multiplying by 1.609344.
    #[must_use]
    pub fn in_unit(&self, unit: UnitSystem) -> Self {
        Self::from_seconds(
            self.seconds_per_unit * convert_unit(1.0, unit, self.unit),
            unit,
        )
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_seconds_to_ms(self.rounded_seconds()))
    }
}

/// Distance units covered per hour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    value: f64,
    unit: UnitSystem,
}

impl Speed {
    /// Create a speed
    #[must_use]
    pub const fn new(value: f64, unit: UnitSystem) -> Self {
        Self { value, unit }
    }

    /// Units per hour
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Unit system the speed is expressed in
    #[must_use]
    pub const fn unit(&self) -> UnitSystem {
        self.unit
    }

    /// Same speed in another unit system
    #[must_use]
    pub fn in_unit(&self, unit: UnitSystem) -> Self {
        Self::new(convert_unit(self.value, self.unit, unit), unit)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_speed(self.value))
    }
}

/// Total elapsed race time
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct FinishTime {
    total_seconds: f64,
}

impl FinishTime {
    /// Finish time from total seconds
    #[must_use]
    pub const fn from_seconds(total_seconds: f64) -> Self {
        Self { total_seconds }
    }

    /// Finish time from total minutes
    #[must_use]
    pub fn from_minutes(total_minutes: f64) -> Self {
        Self::from_seconds(total_minutes * SECONDS_PER_MINUTE)
    }

    /// Finish time from separate hour and minute fields
    #[must_use]
    pub fn from_hours_minutes(hours: u32, minutes: u32) -> Self {
        Self::from_minutes(f64::from(hours) * 60.0 + f64::from(minutes))
    }

    /// Total seconds, unrounded
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.total_seconds
    }

    /// Total minutes, unrounded
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.total_seconds / SECONDS_PER_MINUTE
    }

    /// Total seconds rounded to whole seconds
    #[must_use]
    pub fn rounded_seconds(&self) -> u32 {
        round_seconds(self.total_seconds)
    }

    /// Whole minutes, with the seconds part dropped after rounding
    #[must_use]
    pub fn whole_minutes(&self) -> u32 {
        self.rounded_seconds() / 60
    }

    /// `H:MM` rendering without seconds
    #[must_use]
    pub fn to_hm(&self) -> String {
        format_minutes_to_hm(self.whole_minutes())
    }
}

impl fmt::Display for FinishTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_seconds_to_hms(self.rounded_seconds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_unit_conversion_scales_up_for_miles() {
        let pace = Pace::from_seconds(300.0, UnitSystem::Kilometer);
        let per_mile = pace.in_unit(UnitSystem::Mile);
        assert!((per_mile.seconds() - 482.803_2).abs() < 1e-9);
        assert_eq!(per_mile.to_string(), "8:03");
    }

    #[test]
    fn test_finish_time_from_hours_minutes() {
        let finish = FinishTime::from_hours_minutes(3, 30);
        assert_eq!(finish.whole_minutes(), 210);
        assert_eq!(finish.to_string(), "3:30:00");
        assert_eq!(finish.to_hm(), "3:30");
    }

    #[test]
    fn test_speed_display_one_decimal() {
        let speed = Speed::new(10.0, UnitSystem::Kilometer).in_unit(UnitSystem::Mile);
        assert_eq!(speed.to_string(), "6.2");
    }
}
