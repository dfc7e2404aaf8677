// ABOUTME: Preference commands for pace-cli: show or persist the unit system and language
// ABOUTME: Prints the localized "switched to" notice after a change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_assistant::{i18n::Language, render::Renderer, AppResult, UnitSystem};
use serde_json::json;
use tracing::info;

use crate::helpers::{context::Context, display::emit};

const TOGGLE: &str = "toggle";

/// Show the active unit system, or persist a new one
///
/// `toggle` switches to the other unit system.
pub fn unit(ctx: &mut Context, value: Option<&str>) -> AppResult<()> {
    let Some(raw) = value else {
        let t = ctx.language.translations();
        let line = format!("{} ({})", t.unit_name(ctx.unit), ctx.unit);
        return emit(ctx.format, &[line], &json!({ "unit": ctx.unit }));
    };

    let unit: UnitSystem = if raw.trim().eq_ignore_ascii_case(TOGGLE) {
        ctx.unit.toggled()
    } else {
        raw.parse()?
    };
    ctx.preferences.set_unit(unit)?;
    ctx.unit = unit;
    info!(%unit, "unit preference saved");

    let line = ctx.renderer().unit_switched(unit);
    emit(ctx.format, &[line], &json!({ "unit": unit }))
}

/// Show the active language, or persist a new one
pub fn language(ctx: &mut Context, value: Option<&str>) -> AppResult<()> {
    let Some(raw) = value else {
        let line = format!("{} ({})", ctx.language.native_name(), ctx.language);
        return emit(ctx.format, &[line], &json!({ "language": ctx.language }));
    };

    let language: Language = raw.parse()?;
    ctx.preferences.set_language(language)?;
    ctx.language = language;
    info!(%language, "language preference saved");

    let line = Renderer::new(language).language_switched();
    emit(ctx.format, &[line], &json!({ "language": language }))
}
