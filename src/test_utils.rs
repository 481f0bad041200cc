//! Shared test utilities for `FriendcodeBuddy`.
//!
//! Stores are backed by a fresh temporary directory; keep the returned
//! [`TempDir`] alive for as long as the store is used.

use crate::{
    core::{
        dispatch::Dispatcher,
        listing::{MemberLookup, Membership},
        persistence::SnapshotFile,
        store::FriendCodeStore,
    },
    errors::{Error, Result},
};
use std::collections::HashMap;
use tempfile::TempDir;

/// Creates an empty store writing to `<tempdir>/friendcodes.json`.
pub async fn setup_test_store() -> Result<(TempDir, FriendCodeStore)> {
    let dir = TempDir::new()?;
    let store = FriendCodeStore::load(SnapshotFile::new(dir.path().join("friendcodes.json"))).await?;
    Ok((dir, store))
}

/// Creates a dispatcher around an empty temp-backed store.
pub async fn setup_test_dispatcher() -> Result<(TempDir, Dispatcher)> {
    let (dir, store) = setup_test_store().await?;
    Ok((dir, Dispatcher::new(store)))
}

/// In-memory member directory. Unknown ids fail like a member who left the server.
#[derive(Debug, Default)]
pub struct FakeDirectory {
    members: HashMap<String, Membership>,
}

impl FakeDirectory {
    /// Registers a member holding `roles`.
    #[must_use]
    pub fn with_member(mut self, account_id: &str, username: &str, roles: &[&str]) -> Self {
        self.members.insert(
            account_id.to_string(),
            Membership {
                username: username.to_string(),
                role_names: roles.iter().map(ToString::to_string).collect(),
            },
        );
        self
    }
}

impl MemberLookup for FakeDirectory {
    async fn lookup(&self, account_id: &str) -> Result<Membership> {
        self.members
            .get(account_id)
            .cloned()
            .ok_or_else(|| Error::InvalidAccountId {
                account_id: account_id.to_string(),
            })
    }
}
