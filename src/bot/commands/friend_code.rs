//! Friend-code slash commands.
//!
//! Every command turns its options into a [`Command`] and hands it to the
//! dispatcher; the returned reply is sent public or ephemeral as it asks.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, handlers::autocomplete, membership::GuildDirectory},
        core::dispatch::Command,
        errors::Result,
    };
    use tracing::instrument;

    /// Dispatches `command` for the invoking user and sends the reply.
    async fn respond(ctx: Context<'_>, command: Command) -> Result<()> {
        let data = ctx.data();
        let guild_id = ctx.guild_id().unwrap_or(data.guild_id);
        let directory = GuildDirectory::new(ctx.serenity_context(), guild_id);
        let account_id = ctx.author().id.to_string();

        // Member lookups can outlast the interaction deadline, so acknowledge first
        if command.defers_reply() {
            ctx.defer_ephemeral().await?;
        }

        let reply = data
            .dispatcher
            .dispatch(&account_id, command, &directory)
            .await?;

        let ephemeral = reply.is_ephemeral();
        ctx.send(
            poise::CreateReply::default()
                .content(reply.content)
                .ephemeral(ephemeral),
        )
        .await?;
        Ok(())
    }

    /// Show all friend codes stored by everyone
    #[poise::command(slash_command, guild_only)]
    #[instrument(skip(ctx))]
    pub async fn showcodes(ctx: Context<'_>) -> Result<()> {
        respond(ctx, Command::ShowCodes).await
    }

    /// Add a new friend code
    #[poise::command(slash_command, guild_only)]
    #[instrument(skip(ctx))]
    pub async fn addcode(
        ctx: Context<'_>,
        #[description = "Trainer name"] trainer: String,
        #[description = "Friend code"] code: String,
    ) -> Result<()> {
        respond(ctx, Command::AddCode { trainer, code }).await
    }

    /// Update an existing friend code
    #[poise::command(slash_command, guild_only)]
    #[instrument(skip(ctx))]
    pub async fn updatecode(
        ctx: Context<'_>,
        #[description = "Trainer name"]
        #[autocomplete = "autocomplete::autocomplete_trainer_name"]
        trainer: String,
        #[description = "New friend code"]
        #[rename = "newcode"]
        new_code: String,
    ) -> Result<()> {
        respond(ctx, Command::UpdateCode { trainer, new_code }).await
    }

    /// Delete a friend code
    #[poise::command(slash_command, guild_only)]
    #[instrument(skip(ctx))]
    pub async fn deletecode(
        ctx: Context<'_>,
        #[description = "Trainer name"]
        #[autocomplete = "autocomplete::autocomplete_trainer_name"]
        trainer: String,
    ) -> Result<()> {
        respond(ctx, Command::DeleteCode { trainer }).await
    }

    /// Every command the bot registers, in registration order.
    pub fn all() -> Vec<poise::Command<crate::bot::BotData, crate::errors::Error>> {
        vec![showcodes(), addcode(), updatecode(), deletecode()]
    }
}

// Re-export all commands
pub use inner::*;
