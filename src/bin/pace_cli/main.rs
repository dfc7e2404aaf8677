// ABOUTME: pace-cli - command-line front end of the marathon pace assistant
// ABOUTME: Calculates race pace and finish time, converts treadmill speed, manages preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Pace needed for a 3:30 marathon
//! pace-cli pace --race full --hours 3 --minutes 30
//!
//! # Half marathon finish time at 4:30/km
//! pace-cli finish --race half --pace 4:30
//!
//! # Road-equivalent pace for 12 km/h on the treadmill
//! pace-cli treadmill --speed 12 --explain
//!
//! # Convert 10 km/h to mi/h
//! pace-cli convert 10 --from km --to mile
//!
//! # Switch to miles and English for future runs
//! pace-cli unit mile
//! pace-cli language en
//!
//! # Back to the other unit system
//! pace-cli unit toggle
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use commands::calculate::QuantityKind;
use helpers::{context::Context, display::report_error};
use pace_assistant::{
    config::AppConfig, constants::service_names, formatters::OutputFormat, i18n::Language,
    logging::LoggingConfig, render::Renderer, AppResult,
};
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "pace-cli",
    version,
    about = "Marathon Pace Assistant",
    long_about = "Race pace, finish time and treadmill-to-road conversion for runners, in kilometers or miles."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Unit system for this run (km or mile); overrides the stored preference
    #[arg(long, global = true)]
    unit: Option<String>,

    /// Display language for this run (zh or en); overrides the stored preference
    #[arg(long = "lang", global = true)]
    language: Option<String>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Pace needed to finish a race in a target time
    Pace {
        /// Race: full, half or 10k
        #[arg(long, default_value = "full")]
        race: String,

        /// Hours of the target finish time
        #[arg(long)]
        hours: Option<String>,

        /// Minutes of the target finish time
        #[arg(long)]
        minutes: Option<String>,
    },

    /// Finish time when running a race at a given pace
    Finish {
        /// Race: full, half or 10k
        #[arg(long, default_value = "full")]
        race: String,

        /// Pace per unit, as seconds (300) or minutes:seconds (5:00)
        #[arg(long)]
        pace: Option<String>,
    },

    /// Actual and road-equivalent pace for a treadmill speed
    Treadmill {
        /// Treadmill speed in units per hour
        #[arg(long)]
        speed: Option<String>,

        /// Explain the 4% adjustment
        #[arg(long)]
        explain: bool,
    },

    /// Convert a speed, distance or pace between kilometers and miles
    Convert {
        /// Value to convert
        value: Option<String>,

        /// Source unit (km or mile)
        #[arg(long, default_value = "km")]
        from: String,

        /// Target unit (km or mile)
        #[arg(long, default_value = "mile")]
        to: String,

        /// Kind of quantity
        #[arg(long, value_enum, default_value_t = QuantityKind::Speed)]
        kind: QuantityKind,
    },

    /// Show or set the stored unit system
    Unit {
        /// New unit system (km, mile or toggle)
        value: Option<String>,
    },

    /// Show or set the stored display language
    Language {
        /// New language (zh or en)
        value: Option<String>,
    },
}

fn run(ctx: &mut Context, command: Command) -> AppResult<()> {
    match command {
        Command::Pace {
            race,
            hours,
            minutes,
        } => commands::calculate::pace(ctx, &race, hours.as_deref(), minutes.as_deref()),
        Command::Finish { race, pace } => {
            commands::calculate::finish(ctx, &race, pace.as_deref())
        }
        Command::Treadmill { speed, explain } => {
            commands::calculate::treadmill(ctx, speed.as_deref(), explain)
        }
        Command::Convert {
            value,
            from,
            to,
            kind,
        } => commands::calculate::convert(ctx, kind, value.as_deref(), &from, &to),
        Command::Unit { value } => commands::settings::unit(ctx, value.as_deref()),
        Command::Language { value } => commands::settings::language(ctx, value.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::from_str_param(&cli.format);

    let config = AppConfig::from_env();
    let logging = config
        .as_ref()
        .map_or_else(|_| LoggingConfig::default(), LoggingConfig::from_config)
        .with_service_name(service_names::PACE_CLI);
    let logging = if cli.verbose { logging.verbose() } else { logging };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let context = config.and_then(|config| {
        debug!(config = %config.summary(), "configuration loaded");
        Context::resolve(
            config,
            cli.unit.as_deref(),
            cli.language.as_deref(),
            format,
        )
    });
    let mut ctx = match context {
        Ok(ctx) => ctx,
        Err(e) => {
            report_error(format, Renderer::new(Language::default()), &e);
            return ExitCode::FAILURE;
        }
    };

    match run(&mut ctx, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.code.is_user_error() {
                warn!(error = %e, "command failed");
            }
            report_error(ctx.format, ctx.renderer(), &e);
            ExitCode::FAILURE
        }
    }
}
