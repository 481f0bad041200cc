use dotenvy::dotenv;
use friendcode_buddy::{
    bot,
    config::{AppConfig, discord},
    core::{dispatch::Dispatcher, persistence::SnapshotFile, store::FriendCodeStore},
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env first so RUST_LOG from it applies; env vars can also be set externally
    let dotenv_loaded = dotenv().is_ok();

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!(dotenv_loaded, "Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = AppConfig::from_env()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Load persisted friend codes; a corrupt file stops startup rather than being overwritten
    let store = FriendCodeStore::load(SnapshotFile::new(&app_config.data_path))
        .await
        .inspect_err(|e| error!("Failed to load friend codes: {}", e))?;
    let dispatcher = Dispatcher::new(store);
    let (accounts, entries) = dispatcher
        .with_store(|store| {
            let all = store.list_all();
            (all.len(), all.values().map(Vec::len).sum::<usize>())
        })
        .await;
    info!(accounts, entries, "Friend code store ready");

    // 5. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in AppConfig
    let token = discord::get_token()
        .inspect_err(|e| error!("{} not found: {}", discord::TOKEN_VAR, e))?;

    bot::run_bot(token, app_config, dispatcher).await
}
