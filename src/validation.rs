// ABOUTME: Input validation layer that parses free-form user input before the engine is called
// ABOUTME: Rejects missing, unparsable and out-of-range finish times, paces and treadmill speeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Input Validation
//!
//! The conversion engine assumes well-formed, range-valid input and never
//! re-validates. Everything a user types passes through this module first;
//! on failure the caller shows a notice and does not invoke the engine.

use crate::constants::limits;
use pace_core::{
    convert_unit, AppError, AppResult, FinishTime, Pace, RaceDistance, Speed, UnitSystem,
    ValueRange,
};
use std::ops::RangeInclusive;
use tracing::debug;

pub use pace_core::constants::fields;

/// Accepted pace slider range in whole seconds per unit
///
/// The metric bounds are scaled by 1.609344 for miles and rounded outward, so
/// every metric pace in range is also in range once converted.
#[must_use]
pub fn pace_range_seconds(unit: UnitSystem) -> RangeInclusive<u32> {
    let scale = convert_unit(1.0, unit, UnitSystem::Kilometer);
    let min = (f64::from(limits::MIN_PACE_SECONDS_PER_KM) * scale).floor() as u32;
    let max = (f64::from(limits::MAX_PACE_SECONDS_PER_KM) * scale).ceil() as u32;
    min..=max
}

/// Accepted treadmill speed range in units per hour
#[must_use]
pub fn speed_range(unit: UnitSystem) -> RangeInclusive<f64> {
    let min = convert_unit(
        limits::MIN_TREADMILL_SPEED_KMH,
        UnitSystem::Kilometer,
        unit,
    );
    let max = convert_unit(
        limits::MAX_TREADMILL_SPEED_KMH,
        UnitSystem::Kilometer,
        unit,
    );
    min..=max
}

fn non_empty(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|s| !s.is_empty())
}

fn finish_range(race: RaceDistance) -> ValueRange {
    let range = race.finish_time_range_minutes();
    ValueRange::new(f64::from(*range.start()), f64::from(*range.end()))
}

fn parse_whole(field: &str, raw: &str) -> AppResult<u32> {
    raw.parse::<u32>()
        .map_err(|e| AppError::invalid_format(field, raw).with_source(e))
}

/// Parse the hour and minute fields of a target finish time
///
/// An empty field counts as zero, but at least one must be filled in and the
/// total must be nonzero. The total is checked against the race's range.
///
/// # Errors
///
/// - `MissingRequiredField` when both fields are empty
/// - `InvalidFormat` when a field is not a whole number
/// - `InvalidInput` when both fields are zero
/// - `ValueOutOfRange` when the total is outside the race's range
pub fn parse_finish_time(
    race: RaceDistance,
    hours: Option<&str>,
    minutes: Option<&str>,
) -> AppResult<FinishTime> {
    let hours = non_empty(hours);
    let minutes = non_empty(minutes);
    if hours.is_none() && minutes.is_none() {
        return Err(AppError::missing_field(fields::FINISH_TIME));
    }

    let hours = hours.map_or(Ok(0), |raw| parse_whole(fields::HOURS, raw))?;
    let minutes = minutes.map_or(Ok(0), |raw| parse_whole(fields::MINUTES, raw))?;
    if hours == 0 && minutes == 0 {
        return Err(
            AppError::invalid_input("Enter hours or minutes").with_field(fields::FINISH_TIME)
        );
    }

    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| {
            AppError::out_of_range(fields::FINISH_TIME, "Finish time is too large")
                .with_range(finish_range(race))
        })?;
    validate_finish_minutes(race, total)?;

    debug!(race = %race, total_minutes = total, "finish time accepted");
    Ok(FinishTime::from_minutes(f64::from(total)))
}

/// Check a whole-minute finish time against the race's range
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the value is outside the race's range
pub fn validate_finish_minutes(race: RaceDistance, total_minutes: u32) -> AppResult<()> {
    let range = race.finish_time_range_minutes();
    if range.contains(&total_minutes) {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            fields::FINISH_TIME,
            format!(
                "Finish time of {total_minutes} minutes is outside {}-{} minutes for the {race} race",
                range.start(),
                range.end()
            ),
        )
        .with_range(finish_range(race)))
    }
}

/// Parse a pace as whole seconds (`300`) or as minutes and seconds (`5:00`)
///
/// # Errors
///
/// - `MissingRequiredField` when the input is empty
/// - `InvalidFormat` when it is neither form, or the seconds part is 60 or more
/// - `ValueOutOfRange` when the pace is outside the slider range for `unit`
pub fn parse_pace(input: Option<&str>, unit: UnitSystem) -> AppResult<Pace> {
    let raw = non_empty(input).ok_or_else(|| AppError::missing_field(fields::PACE))?;

    let seconds = match raw.split_once(':') {
        Some((min, sec)) => {
            let min = parse_whole(fields::PACE, min.trim())?;
            let sec = parse_whole(fields::PACE, sec.trim())?;
            if sec >= 60 {
                return Err(AppError::invalid_format(fields::PACE, raw));
            }
            min.saturating_mul(60).saturating_add(sec)
        }
        None => parse_whole(fields::PACE, raw)?,
    };

    validate_pace_seconds(seconds, unit)?;
    Ok(Pace::from_seconds(f64::from(seconds), unit))
}

/// Check whole pace seconds against the slider range for `unit`
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the value is outside the range
pub fn validate_pace_seconds(seconds: u32, unit: UnitSystem) -> AppResult<()> {
    let range = pace_range_seconds(unit);
    if range.contains(&seconds) {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            fields::PACE,
            format!(
                "Pace of {seconds} s/{} is outside {}-{} s/{}",
                unit.distance_label(),
                range.start(),
                range.end(),
                unit.distance_label()
            ),
        )
        .with_range(ValueRange::in_unit(
            f64::from(*range.start()),
            f64::from(*range.end()),
            unit,
        )))
    }
}

/// Parse a treadmill speed in units per hour
///
/// # Errors
///
/// - `MissingRequiredField` when the input is empty
/// - `InvalidFormat` when it is not a finite number
/// - `ValueOutOfRange` when it is outside the speed range for `unit`
pub fn parse_treadmill_speed(input: Option<&str>, unit: UnitSystem) -> AppResult<Speed> {
    let raw = non_empty(input).ok_or_else(|| AppError::missing_field(fields::SPEED))?;
    let value = raw
        .parse::<f64>()
        .map_err(|e| AppError::invalid_format(fields::SPEED, raw).with_source(e))?;
    if !value.is_finite() {
        return Err(AppError::invalid_format(fields::SPEED, raw));
    }

    let range = speed_range(unit);
    if !range.contains(&value) {
        return Err(AppError::out_of_range(
            fields::SPEED,
            format!(
                "Speed of {value} {} is outside {:.1}-{:.1} {}",
                unit.speed_label(),
                range.start(),
                range.end(),
                unit.speed_label()
            ),
        )
        .with_range(ValueRange::in_unit(*range.start(), *range.end(), unit)));
    }
    Ok(Speed::new(value, unit))
}

/// Parse a plain non-negative number for unit conversion
///
/// # Errors
///
/// Returns `MissingRequiredField` for empty input and `InvalidFormat` for
/// anything that is not a finite, non-negative number
pub fn parse_quantity(input: Option<&str>) -> AppResult<f64> {
    let raw = non_empty(input).ok_or_else(|| AppError::missing_field(fields::VALUE))?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Ok(_) => Err(AppError::invalid_format(fields::VALUE, raw)),
        Err(e) => Err(AppError::invalid_format(fields::VALUE, raw).with_source(e)),
    }
}
