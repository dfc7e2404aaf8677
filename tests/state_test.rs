// ABOUTME: Integration tests for the immutable calculator state
// ABOUTME: Covers race switching, unit toggling, primary input handling and evaluation output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pace_assistant::state::{CalculatorState, RaceInput};
use pace_assistant::{FinishTime, Pace, RaceDistance, Speed, UnitSystem};

#[test]
fn test_finish_time_drives_pace() {
    let evaluation = CalculatorState::new(RaceDistance::HalfMarathon, UnitSystem::Kilometer)
        .with_finish_time(FinishTime::from_minutes(90.0))
        .evaluate();

    assert_eq!(evaluation.distance.value(), 21.0975);
    assert_eq!(evaluation.pace.to_string(), "4:16");
    assert_eq!(evaluation.finish_time.to_hm(), "1:30");
}

#[test]
fn test_pace_drives_finish_time() {
    let evaluation = CalculatorState::default()
        .with_pace(Pace::from_seconds(300.0, UnitSystem::Kilometer))
        .evaluate();
    assert_eq!(evaluation.finish_time.to_string(), "3:30:59");
}

#[test]
fn test_switching_race_keeps_pace() {
    let state = CalculatorState::default().with_pace(Pace::from_seconds(270.0, UnitSystem::Kilometer));
    let ten_k = state.with_race(RaceDistance::TenK).evaluate();

    assert_eq!(ten_k.pace.to_string(), "4:30");
    assert_eq!(ten_k.finish_time.to_string(), "0:45:00");
}

#[test]
fn test_switching_race_keeps_finish_time() {
    let state = CalculatorState::default().with_finish_time(FinishTime::from_minutes(240.0));
    let full = state.evaluate();
    let half = state.with_race(RaceDistance::HalfMarathon).evaluate();

    assert_eq!(full.finish_time, half.finish_time);
    assert!(half.pace.seconds() > full.pace.seconds());
}

#[test]
fn test_unit_toggle_converts_pace_and_speed() {
    let metric = CalculatorState::default()
        .with_pace(Pace::from_seconds(300.0, UnitSystem::Kilometer))
        .with_treadmill_speed(Speed::new(10.0, UnitSystem::Kilometer));
    let imperial = metric.with_unit(UnitSystem::Mile);

    assert_eq!(imperial.unit(), UnitSystem::Mile);
    assert_eq!(imperial.treadmill_speed().unit(), UnitSystem::Mile);
    assert_eq!(imperial.treadmill_speed().to_string(), "6.2");

    let evaluation = imperial.evaluate();
    assert_eq!(evaluation.pace.unit(), UnitSystem::Mile);
    assert_eq!(evaluation.pace.to_string(), "8:03");
    assert_eq!(evaluation.distance.value(), 26.2);
}

#[test]
fn test_unit_toggle_round_trip_restores_values() {
    let metric = CalculatorState::default()
        .with_pace(Pace::from_seconds(287.0, UnitSystem::Kilometer))
        .with_treadmill_speed(Speed::new(11.5, UnitSystem::Kilometer));
    let back = metric
        .with_unit(UnitSystem::Mile)
        .with_unit(UnitSystem::Kilometer);

    let RaceInput::Pace(pace) = back.race_input() else {
        panic!("pace input should survive a unit toggle");
    };
    assert!((pace.seconds() - 287.0).abs() < 1e-9);
    assert!((back.treadmill_speed().value() - 11.5).abs() < 1e-9);
}

#[test]
fn test_unit_toggle_keeps_finish_time() {
    let state = CalculatorState::default().with_finish_time(FinishTime::from_minutes(240.0));
    let imperial = state.with_unit(UnitSystem::Mile);

    assert_eq!(imperial.race_input(), state.race_input());
    assert_eq!(imperial.evaluate().pace.to_string(), "9:10");
}

#[test]
fn test_treadmill_speed_is_stored_in_active_unit() {
    let state = CalculatorState::new(RaceDistance::FullMarathon, UnitSystem::Mile)
        .with_treadmill_speed(Speed::new(16.09344, UnitSystem::Kilometer));
    assert!((state.treadmill_speed().value() - 10.0).abs() < 1e-9);
    assert_eq!(state.treadmill_speed().unit(), UnitSystem::Mile);
}

#[test]
fn test_treadmill_evaluation() {
    let treadmill = CalculatorState::default()
        .with_treadmill_speed(Speed::new(10.0, UnitSystem::Kilometer))
        .evaluate()
        .treadmill;

    assert_eq!(treadmill.actual_pace.to_string(), "6:00");
    assert_eq!(treadmill.road_pace.to_string(), "5:46");
    assert_eq!(treadmill.road_speed.to_string(), "10.4");
}

#[test]
fn test_state_serializes() {
    let state = CalculatorState::default().with_finish_time(FinishTime::from_minutes(210.0));
    let json = serde_json::to_value(state).unwrap();

    assert_eq!(json["race"], "full");
    assert_eq!(json["unit"], "km");
    assert_eq!(json["race_input"]["kind"], "finish_time");

    let parsed: CalculatorState = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, state);
}
