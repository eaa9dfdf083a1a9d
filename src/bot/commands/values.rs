//! Value Discord commands - `/value` lookup and `/set` edit.
//!
//! `/value` renders an item's value fields as an embed with a link button
//! to the public website. `/set` runs the authorize/coerce/resolve/update
//! protocol from [`crate::core::items`] and maps every outcome to a
//! distinct ephemeral reply.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::items::{self, SetOutcome},
        entities::item,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    /// Looks up the values for a gun skin (e.g. AK47 Glo).
    #[poise::command(slash_command)]
    pub async fn value(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Gun or item type (e.g. ak47, awp, karambit)"]
        #[autocomplete = "autocomplete::autocomplete_gun"]
        gun: String,
        #[description = "Skin name (e.g. glo, ace)"]
        #[autocomplete = "autocomplete::autocomplete_skin"]
        skin: String,
    ) -> Result<()> {
        ctx.defer().await?;
        let db = &ctx.data().database;

        let Some(item) = items::resolve(db, &gun, &skin).await? else {
            ctx.say(format!(
                "No item found for **{gun}** / **{skin}**. Check spelling and try again.",
            ))
            .await?;
            return Ok(());
        };

        let embed = build_value_embed(&item);
        let link_button =
            serenity::CreateButton::new_link(ctx.data().settings.value_list_url.clone())
                .label("Snaek's Value List (Website)");
        ctx.send(
            poise::CreateReply::default()
                .embed(embed)
                .components(vec![serenity::CreateActionRow::Buttons(vec![link_button])]),
        )
        .await?;
        Ok(())
    }

    /// Sets a value field for a gun skin (base/dg/ck/upg/status).
    #[poise::command(slash_command)]
    pub async fn set(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Gun or item type (e.g. ak47)"]
        #[autocomplete = "autocomplete::autocomplete_gun"]
        gun: String,
        #[description = "Skin name (e.g. glo)"]
        #[autocomplete = "autocomplete::autocomplete_skin"]
        skin: String,
        #[description = "Which value to set: base, dg, ck, upg, or status"]
        #[autocomplete = "autocomplete::autocomplete_field"]
        field: String,
        #[description = "New value (number or text; empty text clears)"] value: String,
    ) -> Result<()> {
        ctx.defer_ephemeral().await?;
        let data = ctx.data();
        let caller_id = ctx.author().id.to_string();

        let outcome = items::set_value(
            &data.database,
            &data.settings.owner_id,
            &caller_id,
            &gun,
            &skin,
            &field,
            &value,
        )
        .await?;

        let reply = match outcome {
            SetOutcome::Updated {
                item,
                field: desc,
                value,
            } => format!(
                "Updated **{}** · **{}** — **{}** = `{}`.",
                item.gun, item.skin_name, desc.key, value
            ),
            SetOutcome::NotAuthorized => {
                "You don't have permission to set values. \
                 Only the owner and added admins can use `/set`."
                    .to_string()
            }
            SetOutcome::InvalidField => {
                "Invalid field. Use one of: base, dg, ck, upg, status.".to_string()
            }
            SetOutcome::InvalidValue { field: desc } => {
                format!("For **{}** use a number.", desc.key)
            }
            SetOutcome::ItemNotFound => format!("No item found for **{gun}** / **{skin}**."),
            SetOutcome::UpdateFailed => {
                "Update may have failed; check the database.".to_string()
            }
        };
        ctx.say(reply).await?;
        Ok(())
    }

    /// Builds the lookup embed with one field per value column.
    fn build_value_embed(item: &item::Model) -> serenity::CreateEmbed {
        let title = format!("{} · {}", item.gun.trim().to_uppercase(), item.skin_name.trim());
        let mut embed = serenity::CreateEmbed::default()
            .title(title)
            .description("Value lookup from SNAEK's demand list")
            .color(0x0034_98DB)
            .field("Base", format_base(item.base_value), true)
            .field("DG", format_text(item.dg_value.as_deref()), true)
            .field("CK", format_text(item.ck_value.as_deref()), true)
            .field("Upg", format_text(item.upg_value.as_deref()), true)
            .field("Status", format_text(item.status.as_deref()), true)
            .field("Last updated", format_updated_at(item.updated_at), true)
            .footer(serenity::CreateEmbedFooter::new(
                "DM mythiipanda for features/bugs",
            ));
        if let Some(url) = item
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
        {
            embed = embed.thumbnail(url);
        }
        embed
    }

    pub(super) fn format_text(value: Option<&str>) -> String {
        value.map_or_else(|| "—".to_string(), ToString::to_string)
    }

    pub(super) fn format_base(value: Option<f64>) -> String {
        value.map_or_else(
            || "—".to_string(),
            |n| {
                if n.fract() == 0.0 {
                    format!("{n:.0}")
                } else {
                    n.to_string()
                }
            },
        )
    }

    pub(super) fn format_updated_at(updated_at: chrono::NaiveDateTime) -> String {
        updated_at.format("%b %d, %Y").to_string()
    }
}

// Re-export all commands
pub use inner::*;
