// ABOUTME: Race distance selection (full marathon, half marathon, 10K) and its distance table
// ABOUTME: Maps each race to tabulated metric and imperial lengths and to its finish time range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{fields, limits, race_distances};
use crate::errors::{AppError, AppResult};
use crate::models::Distance;
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Target race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RaceDistance {
    /// 42.195 km / 26.2 mi
    #[default]
    #[serde(rename = "full")]
    FullMarathon,
    /// 21.0975 km / 13.1 mi
    #[serde(rename = "half")]
    HalfMarathon,
    /// 10 km / 6.2 mi
    #[serde(rename = "10k")]
    TenK,
}

impl RaceDistance {
    /// All races, longest first
    pub const ALL: [Self; 3] = [Self::FullMarathon, Self::HalfMarathon, Self::TenK];

    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullMarathon => "full",
            Self::HalfMarathon => "half",
            Self::TenK => "10k",
        }
    }

    /// Race length in kilometers
    #[must_use]
    pub const fn kilometers(&self) -> f64 {
        match self {
            Self::FullMarathon => race_distances::FULL_MARATHON_KM,
            Self::HalfMarathon => race_distances::HALF_MARATHON_KM,
            Self::TenK => race_distances::TEN_K_KM,
        }
    }

    /// Race length in miles, as tabulated rather than converted
    #[must_use]
    pub const fn miles(&self) -> f64 {
        match self {
            Self::FullMarathon => race_distances::FULL_MARATHON_MI,
            Self::HalfMarathon => race_distances::HALF_MARATHON_MI,
            Self::TenK => race_distances::TEN_K_MI,
        }
    }

    /// Race length in the given unit system
    #[must_use]
    pub const fn distance(&self, unit: UnitSystem) -> Distance {
        let value = match unit {
            UnitSystem::Kilometer => self.kilometers(),
            UnitSystem::Mile => self.miles(),
        };
        Distance::new(value, unit)
    }

    /// Finish times (whole minutes) the input layer accepts for this race
    #[must_use]
    pub const fn finish_time_range_minutes(&self) -> RangeInclusive<u32> {
        let (min, max) = match self {
            Self::FullMarathon => limits::FULL_MARATHON_MINUTES,
            Self::HalfMarathon => limits::HALF_MARATHON_MINUTES,
            Self::TenK => limits::TEN_K_MINUTES,
        };
        min..=max
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RaceDistance {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" | "marathon" | "full-marathon" | "full_marathon" => Ok(Self::FullMarathon),
            "half" | "half-marathon" | "half_marathon" => Ok(Self::HalfMarathon),
            "10k" | "10km" | "ten-k" => Ok(Self::TenK),
            _ => Err(AppError::invalid_format(fields::RACE, s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_table() {
        assert_eq!(
            RaceDistance::FullMarathon
                .distance(UnitSystem::Kilometer)
                .value(),
            42.195
        );
        assert_eq!(RaceDistance::HalfMarathon.distance(UnitSystem::Mile).value(), 13.1);
        assert_eq!(RaceDistance::TenK.distance(UnitSystem::Mile).value(), 6.2);
    }

    #[test]
    fn test_imperial_table_is_not_derived() {
        let derived = RaceDistance::FullMarathon
            .distance(UnitSystem::Kilometer)
            .in_unit(UnitSystem::Mile)
            .value();
        assert!((derived - 26.2).abs() > 0.01);
    }

    #[test]
    fn test_parse_race() {
        assert_eq!(
            "Marathon".parse::<RaceDistance>().unwrap(),
            RaceDistance::FullMarathon
        );
        assert_eq!("10KM".parse::<RaceDistance>().unwrap(), RaceDistance::TenK);
        assert!("5k".parse::<RaceDistance>().is_err());
    }

    #[test]
    fn test_finish_time_ranges() {
        assert_eq!(
            RaceDistance::FullMarathon.finish_time_range_minutes(),
            120..=360
        );
        assert!(RaceDistance::TenK.finish_time_range_minutes().contains(&40));
    }
}
