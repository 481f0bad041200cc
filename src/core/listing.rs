//! The `showcodes` aggregate view.
//!
//! Lists every account that has at least one entry, resolving a username and team
//! through a [`MemberLookup`]. A failed lookup only degrades that account's heading
//! to "Unknown User"; it never fails the listing.

use crate::{
    core::{
        persistence::{FriendCodeEntry, Snapshot},
        team::Team,
    },
    errors::Result,
};
use std::{fmt::Write, future::Future};
use tracing::warn;

/// Reply when no account holds any entry.
pub const NO_CODES_MESSAGE: &str = "No friend codes have been added by anyone.";

/// First line of a non-empty listing.
pub const LISTING_HEADER: &str = "All stored friend codes from everyone:";

/// What the server knows about one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    /// Platform username
    pub username: String,
    /// Names of every role the member holds
    pub role_names: Vec<String>,
}

/// Resolves account ids to server memberships.
pub trait MemberLookup {
    /// Looks up `account_id` in the server the command was issued from.
    fn lookup(&self, account_id: &str) -> impl Future<Output = Result<Membership>> + Send;
}

/// Heading owner of one listing section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Owner {
    /// Resolved member
    Member {
        /// Platform username
        username: String,
        /// Team derived from roles
        team: Team,
    },
    /// Lookup failed
    Unknown {
        /// Raw stored id
        account_id: String,
    },
}

impl Owner {
    /// Resolves `account_id`, degrading to [`Owner::Unknown`] on any failure.
    pub async fn resolve<L: MemberLookup + Sync>(lookup: &L, account_id: &str) -> Self {
        match lookup.lookup(account_id).await {
            Ok(membership) => Self::Member {
                team: Team::classify(membership.role_names.as_slice()),
                username: membership.username,
            },
            Err(e) => {
                warn!(account_id, error = %e, "Could not resolve member for listing");
                Self::Unknown {
                    account_id: account_id.to_string(),
                }
            }
        }
    }

    fn heading(&self) -> String {
        match self {
            Self::Member { username, team } => format!("{username} ({team})"),
            Self::Unknown { account_id } => format!("Unknown User (ID: {account_id})"),
        }
    }
}

/// Writes the numbered entry lines of one account.
pub fn write_entries(out: &mut String, entries: &[FriendCodeEntry]) -> Result<()> {
    for (index, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{}. Trainer: {}, Code: {}",
            index + 1,
            entry.trainer,
            entry.code
        )?;
    }
    Ok(())
}

/// Builds the full `showcodes` text for `snapshot`.
///
/// Accounts with no entries are skipped. If that leaves nothing,
/// [`NO_CODES_MESSAGE`] is returned instead of an empty listing.
pub async fn render_listing<L: MemberLookup + Sync>(
    snapshot: &Snapshot,
    lookup: &L,
) -> Result<String> {
    let mut listing = String::new();
    writeln!(listing, "{LISTING_HEADER}")?;

    let mut sections = 0_usize;
    for (account_id, entries) in snapshot.iter().filter(|(_, entries)| !entries.is_empty()) {
        let owner = Owner::resolve(lookup, account_id).await;
        writeln!(listing, "\n**{}'s codes:**", owner.heading())?;
        write_entries(&mut listing, entries)?;
        sections += 1;
    }

    if sections == 0 {
        return Ok(NO_CODES_MESSAGE.to_string());
    }
    Ok(listing)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::FakeDirectory;

    fn snapshot_of(accounts: Vec<(&str, Vec<(&str, &str)>)>) -> Snapshot {
        accounts
            .into_iter()
            .map(|(id, entries)| {
                (
                    id.to_string(),
                    entries
                        .into_iter()
                        .map(|(trainer, code)| FriendCodeEntry::new(trainer, code))
                        .collect(),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_store_gives_fixed_message() -> Result<()> {
        let directory = FakeDirectory::default();

        assert_eq!(
            render_listing(&Snapshot::new(), &directory).await?,
            NO_CODES_MESSAGE
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_only_empty_accounts_gives_fixed_message() -> Result<()> {
        let directory = FakeDirectory::default().with_member("1", "ash", &["Team Valor"]);
        let snapshot = snapshot_of(vec![("1", vec![]), ("2", vec![])]);

        assert_eq!(render_listing(&snapshot, &directory).await?, NO_CODES_MESSAGE);
        Ok(())
    }

    #[tokio::test]
    async fn test_listing_shows_member_and_team() -> Result<()> {
        let directory = FakeDirectory::default()
            .with_member("1", "ash", &["Member", "Team Valor"])
            .with_member("2", "misty", &[]);
        let snapshot = snapshot_of(vec![
            ("1", vec![("Red", "1111-2222-3333"), ("Blue", "4444-5555-6666")]),
            ("2", vec![("Gold", "7777-8888-9999")]),
            ("3", vec![]),
        ]);

        let listing = render_listing(&snapshot, &directory).await?;
        assert_eq!(
            listing,
            "All stored friend codes from everyone:\n\
             \n**ash (Team Valor)'s codes:**\n\
             1. Trainer: Red, Code: 1111-2222-3333\n\
             2. Trainer: Blue, Code: 4444-5555-6666\n\
             \n**misty (No team)'s codes:**\n\
             1. Trainer: Gold, Code: 7777-8888-9999\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_listing_keeps_account_order() -> Result<()> {
        let directory = FakeDirectory::default()
            .with_member("20", "second", &[])
            .with_member("3", "third", &[])
            .with_member("1", "first", &[]);
        let snapshot = snapshot_of(vec![
            ("20", vec![("B", "2")]),
            ("3", vec![("C", "3")]),
            ("1", vec![("A", "1")]),
        ]);

        let listing = render_listing(&snapshot, &directory).await?;
        let second = listing.find("**second").unwrap();
        let third = listing.find("**third").unwrap();
        let first = listing.find("**first").unwrap();
        assert!(second < third && third < first);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_lookup_degrades_to_unknown_user() -> Result<()> {
        let directory = FakeDirectory::default().with_member("1", "ash", &["Team Mystic"]);
        let snapshot = snapshot_of(vec![
            ("1", vec![("Red", "1")]),
            ("999", vec![("Left", "2"), ("Server", "3")]),
        ]);

        let listing = render_listing(&snapshot, &directory).await?;
        assert!(listing.contains("**ash (Team Mystic)'s codes:**"));
        assert!(listing.contains(
            "\n**Unknown User (ID: 999)'s codes:**\n1. Trainer: Left, Code: 2\n2. Trainer: Server, Code: 3\n"
        ));
        Ok(())
    }
}
