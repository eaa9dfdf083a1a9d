//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require database operations
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    ///
    /// This is a simple health check command that doesn't require any database operations.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Snaek Value List Help**\n\
        Here is a summary of all available commands.\n\n\
        **Lookup**\n\
        • `/value <gun> <skin>` - Looks up values for a gun skin.\n\n\
        **Editing** (owner and admins)\n\
        • `/set <gun> <skin> <field> <value>` - Sets base, dg, ck, upg, or status.\n\n\
        **Admin Management** (owner only)\n\
        • `/addadmin <user>` - Grants a user permission to use `/set`.\n\
        • `/removeadmin <user>` - Revokes that permission.\n\
        • `/listadmins` - Lists everyone who can use `/set`.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
