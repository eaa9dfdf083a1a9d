//! Autocomplete handlers for Discord slash command parameters.
//!
//! This module provides autocomplete functionality for the gun, skin, and
//! field parameters of `/value` and `/set`. Suggestions come from the
//! advisory cache snapshot, never from a live store query; a stale list
//! only degrades suggestions, it never affects what resolves.

use crate::{bot::BotData, core::fields::VALUE_FIELDS, errors::Error};
use poise::serenity_prelude as serenity;

/// Discord caps autocomplete responses at 25 choices.
const AUTOCOMPLETE_MAX: usize = 25;

/// Provides autocomplete suggestions for gun names.
///
/// Matches the user's partial input as a case-insensitive substring against
/// the cached gun list.
pub async fn autocomplete_gun(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial = partial.trim().to_lowercase();
    let data = ctx.data().suggestions.read().await;

    data.guns
        .iter()
        .filter(|gun| partial.is_empty() || gun.contains(&partial))
        .take(AUTOCOMPLETE_MAX)
        .cloned()
        .collect()
}

/// Provides autocomplete suggestions for skin names.
///
/// Suggestions are scoped to the gun the user has already picked in the
/// same interaction; with no gun selected there is nothing sensible to
/// suggest and the list is empty.
pub async fn autocomplete_skin(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Some(gun) = selected_gun(&ctx) else {
        return Vec::new();
    };

    let partial = partial.trim().to_lowercase();
    let data = ctx.data().suggestions.read().await;
    let Some(skins) = data.skins_by_gun.get(&gun) else {
        return Vec::new();
    };

    skins
        .iter()
        .filter(|skin| partial.is_empty() || skin.to_lowercase().contains(&partial))
        .take(AUTOCOMPLETE_MAX)
        .cloned()
        .collect()
}

/// Provides autocomplete suggestions for the value field parameter.
pub async fn autocomplete_field(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial = partial.trim().to_lowercase();

    VALUE_FIELDS
        .iter()
        .map(|field| field.key)
        .filter(|key| partial.is_empty() || key.contains(&partial))
        .map(ToString::to_string)
        .collect()
}

/// Reads the already-entered `gun` option out of the in-flight interaction.
fn selected_gun(ctx: &poise::Context<'_, BotData, Error>) -> Option<String> {
    let poise::Context::Application(app_ctx) = ctx else {
        return None;
    };

    app_ctx.interaction.data.options.iter().find_map(|option| {
        if option.name != "gun" {
            return None;
        }
        if let serenity::CommandDataOptionValue::String(value) = &option.value {
            let gun = value.trim().to_lowercase();
            (!gun.is_empty()).then_some(gun)
        } else {
            None
        }
    })
}
