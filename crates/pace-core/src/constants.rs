// ABOUTME: Fixed numeric constants for pace, distance and treadmill conversions
// ABOUTME: Race distance tables, unit factors, and the input ranges enforced before calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Every number the engine multiplies or divides by lives here. Nothing is
//! read from the environment; these values are part of the calculator's
//! definition.

/// Unit conversion factors
pub mod conversions {
    /// Kilometers in one international mile
    pub const KM_PER_MILE: f64 = 1.609_344;
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Race distances
///
/// The imperial values are tabulated course lengths as runners quote them,
/// not exact conversions of the metric ones (42.195 km is 26.219 mi).
pub mod race_distances {
    /// Full marathon in kilometers
    pub const FULL_MARATHON_KM: f64 = 42.195;
    /// Half marathon in kilometers
    pub const HALF_MARATHON_KM: f64 = 21.0975;
    /// 10K in kilometers
    pub const TEN_K_KM: f64 = 10.0;

    /// Full marathon in miles
    pub const FULL_MARATHON_MI: f64 = 26.2;
    /// Half marathon in miles
    pub const HALF_MARATHON_MI: f64 = 13.1;
    /// 10K in miles
    pub const TEN_K_MI: f64 = 6.2;
}

/// Treadmill adjustment
pub mod treadmill {
    /// Treadmill speed must be raised by about 4% to match the effort of road
    /// running at the same speed, since there is no air resistance indoors.
    pub const ROAD_EQUIVALENT_FACTOR: f64 = 1.04;
}

/// Accepted input ranges, enforced by the validation layer
pub mod limits {
    /// Fastest pace on the slider, seconds per kilometer
    pub const MIN_PACE_SECONDS_PER_KM: u32 = 150;
    /// Slowest pace on the slider, seconds per kilometer
    pub const MAX_PACE_SECONDS_PER_KM: u32 = 420;

    /// Slowest treadmill speed in km/h
    pub const MIN_TREADMILL_SPEED_KMH: f64 = 4.0;
    /// Fastest treadmill speed in km/h
    pub const MAX_TREADMILL_SPEED_KMH: f64 = 20.0;

    /// Full marathon finish time bounds in minutes
    pub const FULL_MARATHON_MINUTES: (u32, u32) = (120, 360);
    /// Half marathon finish time bounds in minutes
    pub const HALF_MARATHON_MINUTES: (u32, u32) = (60, 180);
    /// 10K finish time bounds in minutes
    pub const TEN_K_MINUTES: (u32, u32) = (25, 90);
}

/// Defaults for a freshly opened calculator
pub mod defaults {
    /// Initial pace slider position, seconds per kilometer
    pub const PACE_SECONDS_PER_KM: u32 = 300;
    /// Initial treadmill speed in km/h
    pub const TREADMILL_SPEED_KMH: f64 = 10.0;
}

/// Input field names reported in `AppError::field`
pub mod fields {
    /// Target finish time as a whole
    pub const FINISH_TIME: &str = "finish_time";
    /// Hour part of a finish time
    pub const HOURS: &str = "hours";
    /// Minute part of a finish time
    pub const MINUTES: &str = "minutes";
    /// Pace per unit
    pub const PACE: &str = "pace";
    /// Treadmill speed
    pub const SPEED: &str = "speed";
    /// Plain quantity to convert
    pub const VALUE: &str = "value";
    /// Unit system name
    pub const UNIT: &str = "unit";
    /// Race name
    pub const RACE: &str = "race";
    /// Display language name
    pub const LANGUAGE: &str = "language";
}
