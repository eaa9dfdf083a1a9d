//! Application settings loaded from environment variables.
//!
//! The owner id is the root of the authorization model and must be set;
//! everything else has a sensible default. `.env` loading happens in main
//! before these are read.

use crate::errors::{Error, Result};

/// Public value-list website linked from lookup embeds.
pub const DEFAULT_VALUE_LIST_URL: &str = "https://snaekvaluelist.netlify.app/";

/// Settings shared across all commands.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Discord user id of the owner; the only principal who can manage admins
    pub owner_id: String,
    /// Website the lookup embed's link button points at
    pub value_list_url: String,
}

/// Loads settings from the environment.
///
/// # Errors
/// Returns a configuration error if `BOT_OWNER_ID` is unset or blank.
pub fn load_settings() -> Result<AppSettings> {
    settings_from(
        std::env::var("BOT_OWNER_ID").ok(),
        std::env::var("VALUE_LIST_URL").ok(),
    )
}

/// Builds settings from raw environment values. Split out of
/// [`load_settings`] so validation is testable without touching the process
/// environment.
fn settings_from(owner_id: Option<String>, value_list_url: Option<String>) -> Result<AppSettings> {
    let owner_id = owner_id.map(|id| id.trim().to_string()).unwrap_or_default();
    if owner_id.is_empty() {
        return Err(Error::Config {
            message: "BOT_OWNER_ID must be set to the owner's Discord user id".to_string(),
        });
    }

    let value_list_url = value_list_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_VALUE_LIST_URL.to_string());

    Ok(AppSettings {
        owner_id,
        value_list_url,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_settings_require_owner_id() {
        assert!(matches!(
            settings_from(None, None),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            settings_from(Some("   ".to_string()), None),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = settings_from(Some("470431863316414465".to_string()), None).unwrap();
        assert_eq!(settings.owner_id, "470431863316414465");
        assert_eq!(settings.value_list_url, DEFAULT_VALUE_LIST_URL);
    }

    #[test]
    fn test_settings_overrides() {
        let settings = settings_from(
            Some(" 470431863316414465 ".to_string()),
            Some("https://example.test/list".to_string()),
        )
        .unwrap();
        assert_eq!(settings.owner_id, "470431863316414465");
        assert_eq!(settings.value_list_url, "https://example.test/list");
    }
}
