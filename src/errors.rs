//! Unified error types for the value-list bot.
//!
//! Domain outcomes that callers are expected to handle (item not found,
//! already an admin, invalid field, ...) are not errors; they are modeled as
//! outcome enums in [`crate::core`]. This enum covers infrastructure and
//! configuration failures only.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing or malformed settings)
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Database error from the backing store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (catalog export, file writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// JSON parse error in the catalog export
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
