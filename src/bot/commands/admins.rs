//! Admin management Discord commands - `/addadmin`, `/removeadmin`, `/listadmins`.
//!
//! All three are owner-only; the checks live in [`crate::core::access`] so
//! these commands only translate outcomes into replies. Replies are always
//! ephemeral - admin management is not channel content.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::access::{self, GrantOutcome, ListOutcome, RevokeOutcome},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    /// Adds an admin who can use `/set` (owner only).
    #[poise::command(slash_command)]
    pub async fn addadmin(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "User to grant admin (they will be able to set values)"]
        user: serenity::User,
    ) -> Result<()> {
        let data = ctx.data();
        let caller_id = ctx.author().id.to_string();

        if user.bot {
            say_ephemeral(ctx, "Cannot add bots as admins.".to_string()).await?;
            return Ok(());
        }

        let outcome = access::grant(
            &data.database,
            &data.settings.owner_id,
            &caller_id,
            &user.id.to_string(),
        )
        .await?;

        let reply = match outcome {
            GrantOutcome::Granted(entry) => format!(
                "**{}** (`{}`) is now an admin and can use `/set`.",
                user.display_name(),
                entry.user_id
            ),
            GrantOutcome::AlreadyOwner => {
                "The owner is already allowed; no need to add.".to_string()
            }
            GrantOutcome::AlreadyAdmin => {
                format!("**{}** is already an admin.", user.display_name())
            }
            GrantOutcome::Denied => "Only the owner can add admins.".to_string(),
        };
        say_ephemeral(ctx, reply).await?;
        Ok(())
    }

    /// Removes an admin (owner only).
    #[poise::command(slash_command)]
    pub async fn removeadmin(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "User to remove admin from"] user: serenity::User,
    ) -> Result<()> {
        let data = ctx.data();
        let caller_id = ctx.author().id.to_string();

        let outcome = access::revoke(
            &data.database,
            &data.settings.owner_id,
            &caller_id,
            &user.id.to_string(),
        )
        .await?;

        let reply = match outcome {
            RevokeOutcome::Revoked => {
                format!("**{}** is no longer an admin.", user.display_name())
            }
            RevokeOutcome::NotAnAdmin => {
                format!("**{}** was not in the admin list.", user.display_name())
            }
            RevokeOutcome::Denied => "Only the owner can remove admins.".to_string(),
        };
        say_ephemeral(ctx, reply).await?;
        Ok(())
    }

    /// Lists users who can use `/set` (owner only).
    #[poise::command(slash_command)]
    pub async fn listadmins(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let caller_id = ctx.author().id.to_string();

        let outcome =
            access::list_admins(&data.database, &data.settings.owner_id, &caller_id).await?;

        let reply = match outcome {
            ListOutcome::Admins(entries) => {
                let mut lines =
                    vec!["**Owner** (you): can use `/set`, add/remove admins.".to_string()];
                for entry in &entries {
                    lines.push(format!(
                        "• Admin: `{}` (added by `{}`)",
                        entry.user_id, entry.added_by
                    ));
                }
                if entries.is_empty() {
                    lines.push("_No other admins._".to_string());
                }
                lines.join("\n")
            }
            ListOutcome::Denied => "Only the owner can list admins.".to_string(),
        };
        say_ephemeral(ctx, reply).await?;
        Ok(())
    }

    async fn say_ephemeral(ctx: poise::Context<'_, BotData, Error>, content: String) -> Result<()> {
        ctx.send(
            poise::CreateReply::default()
                .content(content)
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
