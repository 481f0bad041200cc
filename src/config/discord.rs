//! Discord settings read from environment variables.
//!
//! `DISCORD_GUILD_ID` names the single server the bot serves. It is required:
//! commands are registered per guild so they show up immediately.

use crate::errors::{Error, Result};

/// Environment variable holding the bot token.
pub const TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

/// Environment variable holding the target guild id.
pub const GUILD_ID_VAR: &str = "DISCORD_GUILD_ID";

/// Parses a guild id, rejecting anything that is not a non-zero integer.
pub fn parse_guild_id(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(0) => Err(Error::Config {
            message: format!("{GUILD_ID_VAR} must not be zero"),
        }),
        Ok(id) => Ok(id),
        Err(e) => Err(Error::Config {
            message: format!("{GUILD_ID_VAR} is not a valid id ({trimmed:?}): {e}"),
        }),
    }
}

/// Reads and parses `DISCORD_GUILD_ID`.
pub fn get_guild_id() -> Result<u64> {
    let raw = std::env::var(GUILD_ID_VAR).map_err(|e| Error::Config {
        message: format!("{GUILD_ID_VAR} not set: {e}"),
    })?;
    parse_guild_id(&raw)
}

/// Reads the bot token. A missing token is fatal.
pub fn get_token() -> Result<String> {
    std::env::var(TOKEN_VAR).map_err(Into::into)
}
