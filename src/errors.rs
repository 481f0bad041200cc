//! Unified error type for the bot.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure the crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup configuration is missing or invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description of the problem
        message: String,
    },

    /// The persisted friend-code file exists but cannot be parsed.
    #[error("Persisted state at {} is malformed: {source}", .path.display())]
    CorruptState {
        /// Location of the offending file
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// An account id that cannot name a Discord user.
    #[error("Invalid account id: {account_id}")]
    InvalidAccountId {
        /// The raw id as stored
        account_id: String,
    },

    /// Filesystem failure while reading or writing the data file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Building a reply string failed.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// A required environment variable is missing or not unicode.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Anything raised by serenity or poise.
    #[error("Discord error: {0}")]
    Discord(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Discord(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
