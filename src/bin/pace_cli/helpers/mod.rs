// ABOUTME: Helper modules for pace-cli
// ABOUTME: Provides invocation context and output utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod context;
pub mod display;
