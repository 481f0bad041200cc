//! Bot layer - Discord-specific interface and command handlers
//!
//! This module connects the framework-agnostic dispatcher to Discord: slash
//! commands, trainer-name autocomplete, member lookups and the client itself.

/// Serenity client setup, command registration and framework error handling
pub mod client;
/// Discord command implementations
pub mod commands;
/// Discord interaction handlers (autocomplete)
pub mod handlers;
/// Guild member and role lookups backed by serenity
pub mod membership;

use crate::core::dispatch::Dispatcher;
use poise::serenity_prelude as serenity;

/// Shared data available to all bot commands.
pub struct BotData {
    /// Owns the friend-code store
    pub dispatcher: Dispatcher,
    /// Guild used when an interaction carries no guild context
    pub guild_id: serenity::GuildId,
}

impl BotData {
    /// Creates a new `BotData` instance.
    #[must_use]
    pub const fn new(dispatcher: Dispatcher, guild_id: serenity::GuildId) -> Self {
        Self {
            dispatcher,
            guild_id,
        }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, crate::errors::Error>;

pub use client::run_bot;
pub use commands::*;
