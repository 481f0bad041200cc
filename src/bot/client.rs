//! Serenity client and poise framework setup.

use crate::{
    bot::{BotData, commands},
    config::AppConfig,
    core::dispatch::Dispatcher,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::{error, info, instrument, warn};

#[allow(clippy::panic)] // Startup cannot continue without registered commands
async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            let reply = poise::CreateReply::default()
                .content("Something went wrong while handling that command.")
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error message: {}", e);
            }
        }
        poise::FrameworkError::UnknownInteraction { interaction, .. } => {
            warn!(
                command = %interaction.data.name,
                "Ignoring interaction for an unregistered command"
            );
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to Discord and serves commands until the client stops.
///
/// Commands are (re-)registered in the configured guild every time the session
/// becomes ready; registration overwrites, so repeating it is harmless.
#[instrument(skip_all, fields(guild_id = config.guild_id))]
pub async fn run_bot(token: String, config: AppConfig, dispatcher: Dispatcher) -> Result<()> {
    let guild_id = serenity::GuildId::new(config.guild_id);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                    .await?;
                info!("Registered guild-specific application commands in {}", guild_id);
                Ok(BotData::new(dispatcher, guild_id))
            })
        })
        .build();

    // Member lookups need the privileged members intent
    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::GUILD_MEMBERS;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
