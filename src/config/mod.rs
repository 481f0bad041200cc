/// Discord connection settings (guild id) from environment variables
pub mod discord;

/// Location of the persisted friend-code file
pub mod storage;

use crate::errors::Result;
use std::path::PathBuf;
use tracing::info;

/// Startup configuration shared with the bot.
///
/// The bot token is deliberately absent: it is read directly before the client
/// is built and never kept around.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Guild the slash commands are registered in
    pub guild_id: u64,
    /// Path of the JSON file holding every stored friend code
    pub data_path: PathBuf,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let guild_id = discord::get_guild_id()?;
        let data_path = storage::get_data_path();
        info!(guild_id, data_path = %data_path.display(), "Loaded application configuration");
        Ok(Self {
            guild_id,
            data_path,
        })
    }
}
