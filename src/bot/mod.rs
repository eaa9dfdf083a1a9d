//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the value-list bot,
//! including all slash commands, autocomplete handlers, and bot context
//! management. The core protocol lives in [`crate::core`]; commands only
//! translate its outcomes into user-facing replies.

/// Discord command implementations (value lookup, set, admin management)
pub mod commands;
/// Discord interaction handlers (autocomplete)
pub mod handlers;

use crate::{
    cache::{self, SuggestionCache, SuggestionData},
    config::AppSettings,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Database connection for all store operations
    pub database: DatabaseConnection,
    /// Owner id and other deploy-time settings
    pub settings: Arc<AppSettings>,
    /// Advisory autocomplete suggestion snapshot
    pub suggestions: SuggestionCache,
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                tracing::error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {e}");
            }
        }
    }
}

/// Builds the poise framework, registers the slash commands globally, and
/// runs the client until shutdown.
///
/// # Errors
/// Returns an error if the client cannot be created or exits with a
/// gateway error.
pub async fn run_bot(
    token: String,
    settings: Arc<AppSettings>,
    database: DatabaseConnection,
) -> Result<()> {
    let suggestions: SuggestionCache = Arc::new(RwLock::new(SuggestionData::default()));
    // Autocomplete is advisory; a failed initial load only degrades suggestions
    if let Err(e) = cache::refresh_suggestions(&database, &suggestions).await {
        warn!("Could not load autocomplete data: {e}");
    }

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::value(),
                commands::set(),
                commands::addadmin(),
                commands::removeadmin(),
                commands::listadmins(),
                commands::ping(),
                commands::help(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData {
                    database,
                    settings,
                    suggestions,
                })
            })
        })
        .build();

    // Slash commands only; no privileged intents needed
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await.map_err(Into::into)
}
