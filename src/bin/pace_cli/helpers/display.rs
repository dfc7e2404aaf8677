// ABOUTME: Output helpers for pace-cli
// ABOUTME: Prints localized text or JSON depending on the selected output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_assistant::{
    errors::ErrorResponse,
    formatters::{to_json, OutputFormat},
    render::Renderer,
    AppError, AppResult,
};
use serde::Serialize;

/// Print text lines, or the JSON form of `report`
pub fn emit<T: Serialize>(format: OutputFormat, lines: &[String], report: &T) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for line in lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", to_json(report)?),
    }
    Ok(())
}

/// Print a failed command to stderr
pub fn report_error(format: OutputFormat, renderer: Renderer, error: &AppError) {
    match format {
        OutputFormat::Text => eprintln!("{}", renderer.error(error)),
        OutputFormat::Json => match to_json(&ErrorResponse::from(error)) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("{error}"),
        },
    }
}
