//! Guild membership lookups for the `showcodes` listing.
//!
//! Role names are fetched once per [`GuildDirectory`] and only if a member is
//! actually resolved, so commands other than `showcodes` never hit the API.

use crate::{
    core::listing::{MemberLookup, Membership},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::collections::HashMap;
use tokio::sync::OnceCell;
use tracing::warn;

/// Parses a stored account id into a Discord user id.
pub fn parse_user_id(account_id: &str) -> Result<serenity::UserId> {
    account_id
        .parse::<u64>()
        .ok()
        .filter(|&id| id != 0)
        .map(serenity::UserId::new)
        .ok_or_else(|| Error::InvalidAccountId {
            account_id: account_id.to_string(),
        })
}

/// Resolves members of one guild through serenity's cache and HTTP client.
pub struct GuildDirectory<'a> {
    ctx: &'a serenity::Context,
    guild_id: serenity::GuildId,
    role_names: OnceCell<HashMap<serenity::RoleId, String>>,
}

impl<'a> GuildDirectory<'a> {
    /// Creates a directory for `guild_id`. No request is made yet.
    #[must_use]
    pub fn new(ctx: &'a serenity::Context, guild_id: serenity::GuildId) -> Self {
        Self {
            ctx,
            guild_id,
            role_names: OnceCell::new(),
        }
    }

    async fn role_names(&self) -> &HashMap<serenity::RoleId, String> {
        self.role_names
            .get_or_init(|| async {
                match self.guild_id.roles(self.ctx).await {
                    Ok(roles) => roles
                        .into_iter()
                        .map(|(id, role)| (id, role.name))
                        .collect(),
                    Err(e) => {
                        warn!(guild_id = %self.guild_id, error = %e, "Could not fetch guild roles, treating members as teamless");
                        HashMap::new()
                    }
                }
            })
            .await
    }
}

impl MemberLookup for GuildDirectory<'_> {
    async fn lookup(&self, account_id: &str) -> Result<Membership> {
        let user_id = parse_user_id(account_id)?;
        let member = self.guild_id.member(self.ctx, user_id).await?;
        let roles = self.role_names().await;

        let role_names = member
            .roles
            .iter()
            .filter_map(|role_id| roles.get(role_id).cloned())
            .collect();

        Ok(Membership {
            username: member.user.name,
            role_names,
        })
    }
}
