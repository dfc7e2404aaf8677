// ABOUTME: Minute/second and hour/minute/second splitting and rendering for paces and finish times
// ABOUTME: Rounds once to whole seconds and carries into minutes so "X:60" never appears
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Time Formatting
//!
//! Every display in the calculator goes through [`split_minutes`] or one of
//! the integer formatters below. Fractional values are rounded to the nearest
//! whole second exactly once (half-second ties round away from zero) and only
//! then split, so a remainder can never render as 60 seconds: 3.999 minutes
//! is `4:00`, not `3:60`.

use crate::constants::conversions::SECONDS_PER_MINUTE;

/// Round a non-negative number of seconds to whole seconds
///
/// Negative and NaN inputs clamp to zero.
#[must_use]
pub fn round_seconds(seconds: f64) -> u32 {
    if seconds.is_nan() || seconds <= 0.0 {
        return 0;
    }
    seconds.round() as u32
}

/// Split fractional minutes into whole minutes and remaining seconds
#[must_use]
pub fn split_minutes(minutes: f64) -> (u32, u32) {
    let total = round_seconds(minutes * SECONDS_PER_MINUTE);
    (total / 60, total % 60)
}

/// Render seconds as `M:SS`
#[must_use]
pub fn format_seconds_to_ms(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Render minutes as `H:MM`, without seconds
#[must_use]
pub fn format_minutes_to_hm(total_minutes: u32) -> String {
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Render seconds as `H:MM:SS`
#[must_use]
pub fn format_seconds_to_hms(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

/// Render a speed with one decimal place
#[must_use]
pub fn format_speed(value: f64) -> String {
    format!("{value:.1}")
}
