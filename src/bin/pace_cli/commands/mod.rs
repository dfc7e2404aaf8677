// ABOUTME: Re-exports command modules for pace-cli
// ABOUTME: Provides access to calculation and preference commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculate;
pub mod settings;
