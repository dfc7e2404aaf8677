// ABOUTME: Core conversion engine for the marathon pace assistant
// ABOUTME: Foundation crate with unit systems, race distances, pace math, formatting and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pace Core
//!
//! Pure, synchronous conversion engine for runners. Given a race distance and
//! either a finish time or a pace, it derives the other; it also converts
//! treadmill speed into the equivalent outdoor pace and switches values
//! between kilometers and miles.
//!
//! ## Modules
//!
//! - **engine**: pace/finish time/treadmill conversion functions
//! - **models**: unit-tagged value types (`Pace`, `Speed`, `FinishTime`, `Distance`)
//! - **formatting**: `M:SS`, `H:MM` and `H:MM:SS` rendering
//! - **units** / **race**: unit system and race distance tables
//! - **errors**: `AppError` and `ErrorCode` shared with the application crate

/// Unified error handling with standard error codes
pub mod errors;

/// Fixed numeric constants (race distances, conversion factors, input ranges)
pub mod constants;

/// Unit systems and distance-like unit conversion
pub mod units;

/// Race distance table
pub mod race;

/// Unit-tagged value types
pub mod models;

/// Time and speed rendering
pub mod formatting;

/// Pure conversion functions
pub mod engine;

pub use errors::{AppError, AppResult, ErrorCode, ValueRange};
pub use models::{Distance, FinishTime, Pace, Speed};
pub use race::RaceDistance;
pub use units::{convert_unit, UnitSystem};
