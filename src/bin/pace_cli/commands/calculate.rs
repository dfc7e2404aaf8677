// ABOUTME: Calculation commands for pace-cli: pace, finish time, treadmill and unit conversion
// ABOUTME: Validates raw arguments, evaluates a calculator state and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_assistant::{
    formatters::{RaceReport, TreadmillReport},
    state::CalculatorState,
    validation, AppResult, Distance, RaceDistance, Speed, UnitSystem,
};
use serde::Serialize;
use tracing::info;

use crate::helpers::{context::Context, display::emit};

/// Target pace from a finish time
pub fn pace(
    ctx: &Context,
    race: &str,
    hours: Option<&str>,
    minutes: Option<&str>,
) -> AppResult<()> {
    let race: RaceDistance = race.parse()?;
    let finish = validation::parse_finish_time(race, hours, minutes)?;
    let evaluation = CalculatorState::new(race, ctx.unit)
        .with_finish_time(finish)
        .evaluate();
    info!(%race, finish_time = %finish, pace = %evaluation.pace, "pace calculated");

    let renderer = ctx.renderer();
    let mut lines = vec![renderer.pace_result(&evaluation).to_string()];
    lines.extend(renderer.pace_tab(&evaluation));
    emit(ctx.format, &lines, &RaceReport::from(&evaluation))
}

/// Finish time from a pace
pub fn finish(ctx: &Context, race: &str, pace: Option<&str>) -> AppResult<()> {
    let race: RaceDistance = race.parse()?;
    let pace = validation::parse_pace(pace, ctx.unit)?;
    let evaluation = CalculatorState::new(race, ctx.unit)
        .with_pace(pace)
        .evaluate();
    info!(%race, %pace, finish_time = %evaluation.finish_time, "finish time calculated");

    let lines = ctx.renderer().pace_tab(&evaluation);
    emit(ctx.format, &lines, &RaceReport::from(&evaluation))
}

/// Actual and road-equivalent pace for a treadmill speed
pub fn treadmill(ctx: &Context, speed: Option<&str>, explain: bool) -> AppResult<()> {
    let speed = validation::parse_treadmill_speed(speed, ctx.unit)?;
    let evaluation = CalculatorState::new(RaceDistance::default(), ctx.unit)
        .with_treadmill_speed(speed)
        .evaluate();
    info!(
        %speed,
        road_pace = %evaluation.treadmill.road_pace,
        "treadmill speed converted"
    );

    let renderer = ctx.renderer();
    let mut lines = vec![renderer.speed_result(&evaluation).to_string()];
    lines.extend(renderer.treadmill_tab(&evaluation));
    if explain {
        lines.push(String::new());
        lines.push(ctx.language.translations().treadmill_tooltip.to_owned());
    }
    emit(ctx.format, &lines, &TreadmillReport::from(&evaluation))
}

/// What kind of quantity `convert` is scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    /// Units per hour
    Speed,
    /// Length
    Distance,
    /// Seconds (`300`) or minutes:seconds (`5:00`) per unit
    Pace,
}

#[derive(Debug, Serialize)]
struct ConvertReport {
    kind: QuantityKind,
    from: UnitSystem,
    to: UnitSystem,
    input: f64,
    output: f64,
    display: String,
}

/// Convert a speed, distance or pace between kilometers and miles
pub fn convert(
    ctx: &Context,
    kind: QuantityKind,
    value: Option<&str>,
    from: &str,
    to: &str,
) -> AppResult<()> {
    let from: UnitSystem = from.parse()?;
    let to: UnitSystem = to.parse()?;
    let renderer = ctx.renderer();

    let (input, output, display) = match kind {
        QuantityKind::Speed => {
            let speed = Speed::new(validation::parse_quantity(value)?, from);
            let converted = speed.in_unit(to);
            (
                speed.value(),
                converted.value(),
                format!("{} = {}", renderer.speed(speed), renderer.speed(converted)),
            )
        }
        QuantityKind::Distance => {
            let distance = Distance::new(validation::parse_quantity(value)?, from);
            let converted = distance.in_unit(to);
            (
                distance.value(),
                converted.value(),
                format!(
                    "{:.3} {} = {:.3} {}",
                    distance.value(),
                    from.distance_label(),
                    converted.value(),
                    to.distance_label()
                ),
            )
        }
        QuantityKind::Pace => {
            let pace = validation::parse_pace(value, from)?;
            let converted = pace.in_unit(to);
            (
                pace.seconds(),
                converted.seconds(),
                format!("{} = {}", renderer.pace(pace), renderer.pace(converted)),
            )
        }
    };

    let report = ConvertReport {
        kind,
        from,
        to,
        input,
        output,
        display,
    };
    emit(ctx.format, std::slice::from_ref(&report.display), &report)
}
