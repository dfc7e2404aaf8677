// ABOUTME: Pure conversion functions between finish time, pace, treadmill speed and units
// ABOUTME: Applies the fixed 4% treadmill-to-road adjustment; has no error path and no state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Conversion Engine
//!
//! Pure functions mapping a race distance and one primary input (finish time,
//! pace or treadmill speed) to the derived quantities. Callers validate their
//! input first; every distance used here comes from the fixed race table and
//! is nonzero, so nothing can fail.
//!
//! ## Example
//!
//! ```rust
//! use pace_core::{engine, RaceDistance, UnitSystem};
//!
//! let distance = RaceDistance::HalfMarathon.distance(UnitSystem::Kilometer);
//! let pace = engine::pace_from_duration(90.0, distance);
//! assert_eq!(pace.to_string(), "4:16");
//! ```

use crate::constants::conversions::{MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use crate::constants::treadmill::ROAD_EQUIVALENT_FACTOR;
use crate::models::{Distance, FinishTime, Pace, Speed};

pub use crate::formatting::{format_minutes_to_hm, format_seconds_to_ms, split_minutes};
pub use crate::units::convert_unit;

/// Pace needed to finish `distance` in `duration_minutes`
///
/// The pace is `duration_minutes / distance` minutes per unit, in the
/// distance's unit system.
#[must_use]
pub fn pace_from_duration(duration_minutes: f64, distance: Distance) -> Pace {
    Pace::from_minutes(duration_minutes / distance.value(), distance.unit())
}

/// Finish time over `distance` when running at `pace_seconds` per unit
///
/// Computes `(pace_seconds / 60) × distance` minutes.
#[must_use]
pub fn duration_from_pace(pace_seconds: f64, distance: Distance) -> FinishTime {
    FinishTime::from_minutes(pace_seconds / SECONDS_PER_MINUTE * distance.value())
}

/// Pace shown by the treadmill itself: `60 / speed` minutes per unit
#[must_use]
pub fn treadmill_actual_pace(speed: Speed) -> Pace {
    Pace::from_minutes(MINUTES_PER_HOUR / speed.value(), speed.unit())
}

/// Outdoor pace that costs the same effort as running at `speed` on a treadmill
///
/// The speed is raised by the 4% adjustment before converting:
/// `60 / (speed × 1.04)` minutes per unit.
#[must_use]
pub fn treadmill_to_road_pace(speed: Speed) -> Pace {
    treadmill_actual_pace(road_equivalent_speed(speed))
}

/// Outdoor speed equivalent in effort to `speed` on a treadmill (`speed × 1.04`)
#[must_use]
pub fn road_equivalent_speed(speed: Speed) -> Speed {
    Speed::new(speed.value() * ROAD_EQUIVALENT_FACTOR, speed.unit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RaceDistance, UnitSystem};

    #[test]
    fn test_full_marathon_finish_from_pace() {
        let distance = RaceDistance::FullMarathon.distance(UnitSystem::Kilometer);
        let finish = duration_from_pace(300.0, distance);
        assert!((finish.minutes() - 210.975).abs() < 1e-9);
        // 58.5 s rounds away from zero
        assert_eq!(finish.to_string(), "3:30:59");
    }

    #[test]
    fn test_treadmill_paces() {
        let speed = Speed::new(10.0, UnitSystem::Kilometer);
        assert_eq!(treadmill_actual_pace(speed).to_string(), "6:00");
        assert_eq!(treadmill_to_road_pace(speed).to_string(), "5:46");
        assert_eq!(road_equivalent_speed(speed).to_string(), "10.4");
    }

    #[test]
    fn test_pace_keeps_distance_unit() {
        let distance = RaceDistance::FullMarathon.distance(UnitSystem::Mile);
        let pace = pace_from_duration(240.0, distance);
        assert_eq!(pace.unit(), UnitSystem::Mile);
        // 240 / 26.2 = 9.1603 min/mi
        assert_eq!(pace.to_string(), "9:10");
    }
}
