// ABOUTME: Immutable calculator state passed explicitly into every recomputation
// ABOUTME: Holds race, unit, primary race input and treadmill speed; evaluate() derives all outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calculator State
//!
//! The front end owns one [`CalculatorState`] value and replaces it on every
//! interaction (`with_race`, `with_unit`, ...). Nothing is cached: each call
//! to [`CalculatorState::evaluate`] recomputes every derived quantity from the
//! current race, unit and primary input.

use crate::constants::defaults;
use pace_core::engine::{
    duration_from_pace, pace_from_duration, road_equivalent_speed, treadmill_actual_pace,
    treadmill_to_road_pace,
};
use pace_core::{Distance, FinishTime, Pace, RaceDistance, Speed, UnitSystem};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The value the runner set on the pace tab
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RaceInput {
    /// Target finish time; the pace is derived
    FinishTime(FinishTime),
    /// Target pace; the finish time is derived
    Pace(Pace),
}

/// Complete input state of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    race: RaceDistance,
    unit: UnitSystem,
    race_input: RaceInput,
    treadmill_speed: Speed,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(RaceDistance::default(), UnitSystem::default())
    }
}

impl CalculatorState {
    /// Fresh state with the default pace (5:00/km) and treadmill speed (10 km/h)
    /// expressed in `unit`
    #[must_use]
    pub fn new(race: RaceDistance, unit: UnitSystem) -> Self {
        let pace = Pace::from_seconds(
            f64::from(defaults::PACE_SECONDS_PER_KM),
            UnitSystem::Kilometer,
        );
        let speed = Speed::new(defaults::TREADMILL_SPEED_KMH, UnitSystem::Kilometer);
        Self {
            race,
            unit,
            race_input: RaceInput::Pace(pace.in_unit(unit)),
            treadmill_speed: speed.in_unit(unit),
        }
    }

    /// Selected race
    #[must_use]
    pub const fn race(&self) -> RaceDistance {
        self.race
    }

    /// Active unit system
    #[must_use]
    pub const fn unit(&self) -> UnitSystem {
        self.unit
    }

    /// Primary race input
    #[must_use]
    pub const fn race_input(&self) -> RaceInput {
        self.race_input
    }

    /// Treadmill speed in the active unit
    #[must_use]
    pub const fn treadmill_speed(&self) -> Speed {
        self.treadmill_speed
    }

    /// Same state for another race; the primary input is kept as entered
    #[must_use]
    pub const fn with_race(self, race: RaceDistance) -> Self {
        Self { race, ..self }
    }

    /// Same state in another unit system
    ///
    /// A stored pace and the treadmill speed are converted so they describe the
    /// same effort; a finish time is unit independent and kept as is.
    #[must_use]
    pub fn with_unit(self, unit: UnitSystem) -> Self {
        if unit == self.unit {
            return self;
        }
        let race_input = match self.race_input {
            RaceInput::Pace(pace) => RaceInput::Pace(pace.in_unit(unit)),
            finish @ RaceInput::FinishTime(_) => finish,
        };
        debug!(from = %self.unit, to = %unit, "unit system switched");
        Self {
            unit,
            race_input,
            treadmill_speed: self.treadmill_speed.in_unit(unit),
            ..self
        }
    }

    /// Same state with a new primary race input
    #[must_use]
    pub const fn with_race_input(self, race_input: RaceInput) -> Self {
        Self { race_input, ..self }
    }

    /// Same state with a new target finish time
    #[must_use]
    pub const fn with_finish_time(self, finish_time: FinishTime) -> Self {
        self.with_race_input(RaceInput::FinishTime(finish_time))
    }

    /// Same state with a new target pace
    #[must_use]
    pub fn with_pace(self, pace: Pace) -> Self {
        self.with_race_input(RaceInput::Pace(pace))
    }

    /// Same state with a new treadmill speed
    #[must_use]
    pub fn with_treadmill_speed(self, speed: Speed) -> Self {
        Self {
            treadmill_speed: speed.in_unit(self.unit),
            ..self
        }
    }

    /// Recompute every derived quantity from the current state
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        let distance = self.race.distance(self.unit);
        let (pace, finish_time) = match self.race_input {
            RaceInput::FinishTime(finish) => {
                (pace_from_duration(finish.minutes(), distance), finish)
            }
            RaceInput::Pace(pace) => {
                let pace = pace.in_unit(self.unit);
                (pace, duration_from_pace(pace.seconds(), distance))
            }
        };

        let speed = self.treadmill_speed.in_unit(self.unit);
        let treadmill = TreadmillEvaluation {
            speed,
            actual_pace: treadmill_actual_pace(speed),
            road_pace: treadmill_to_road_pace(speed),
            road_speed: road_equivalent_speed(speed),
        };

        debug!(
            race = %self.race,
            unit = %self.unit,
            pace = %pace,
            finish_time = %finish_time,
            "calculator state evaluated"
        );

        Evaluation {
            race: self.race,
            unit: self.unit,
            distance,
            pace,
            finish_time,
            treadmill,
        }
    }
}

/// Derived values for the pace tab and the treadmill tab
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Race the values refer to
    pub race: RaceDistance,
    /// Unit system of every distance, pace and speed below
    pub unit: UnitSystem,
    /// Race distance in `unit`
    pub distance: Distance,
    /// Pace per `unit`
    pub pace: Pace,
    /// Total race time
    pub finish_time: FinishTime,
    /// Treadmill conversion
    pub treadmill: TreadmillEvaluation,
}

/// Treadmill tab values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreadmillEvaluation {
    /// Speed set on the treadmill
    pub speed: Speed,
    /// Pace the treadmill shows, no adjustment
    pub actual_pace: Pace,
    /// Outdoor pace with the same effort
    pub road_pace: Pace,
    /// Outdoor speed with the same effort
    pub road_speed: Speed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = CalculatorState::default();
        assert_eq!(state.race(), RaceDistance::FullMarathon);
        assert_eq!(state.unit(), UnitSystem::Kilometer);
        assert_eq!(state.evaluate().pace.to_string(), "5:00");
    }

    #[test]
    fn test_with_unit_same_unit_is_noop() {
        let state = CalculatorState::default();
        assert_eq!(state.with_unit(UnitSystem::Kilometer), state);
    }

    #[test]
    fn test_new_in_miles_converts_defaults() {
        let state = CalculatorState::new(RaceDistance::TenK, UnitSystem::Mile);
        assert_eq!(state.treadmill_speed().to_string(), "6.2");
        assert_eq!(state.evaluate().pace.to_string(), "8:03");
    }
}
