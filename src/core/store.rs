//! Friend-code store - the in-process mapping from account id to trainer entries.
//!
//! Every mutating operation that changes something writes the full snapshot
//! through the [`SnapshotFile`] before returning. Operations that change nothing
//! (an update or delete without a matching trainer) never touch the file.

use crate::{
    core::persistence::{FriendCodeEntry, Snapshot, SnapshotFile},
    errors::Result,
};
use tracing::info;

/// Compares two trainer names ignoring case.
///
/// Used by both [`FriendCodeStore::update`] and [`FriendCodeStore::delete`].
#[must_use]
pub fn trainer_matches(stored: &str, requested: &str) -> bool {
    stored.to_lowercase() == requested.to_lowercase()
}

/// Owns the friend codes of every account and the file they are mirrored to.
#[derive(Debug)]
pub struct FriendCodeStore {
    accounts: Snapshot,
    file: SnapshotFile,
}

impl FriendCodeStore {
    /// Builds the store from whatever `file` currently holds.
    pub async fn load(file: SnapshotFile) -> Result<Self> {
        let accounts = file.load().await?;
        Ok(Self { accounts, file })
    }

    /// Guarantees `account_id` has a record, creating an empty one if needed.
    ///
    /// This does not persist: an empty record only reaches disk alongside the
    /// next real mutation.
    pub fn ensure(&mut self, account_id: &str) {
        if !self.accounts.contains_key(account_id) {
            self.accounts.insert(account_id.to_string(), Vec::new());
        }
    }

    /// Whether `account_id` has been seen at all, even with no entries.
    #[must_use]
    pub fn contains(&self, account_id: &str) -> bool {
        self.accounts.contains_key(account_id)
    }

    /// Entries of `account_id` in insertion order, empty if there are none.
    #[must_use]
    pub fn list(&self, account_id: &str) -> &[FriendCodeEntry] {
        self.accounts
            .get(account_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every account and its entries.
    #[must_use]
    pub const fn list_all(&self) -> &Snapshot {
        &self.accounts
    }

    /// Appends a new entry. Duplicate trainer names are allowed.
    pub async fn add(&mut self, account_id: &str, trainer: &str, code: &str) -> Result<()> {
        self.accounts
            .entry(account_id.to_string())
            .or_default()
            .push(FriendCodeEntry::new(trainer, code));
        self.persist().await?;

        info!(account_id, trainer, "Added friend code");
        Ok(())
    }

    /// Overwrites the code of every entry whose trainer matches.
    ///
    /// Returns `false`, leaving the store and file untouched, when nothing matched.
    pub async fn update(&mut self, account_id: &str, trainer: &str, new_code: &str) -> Result<bool> {
        let Some(entries) = self.accounts.get_mut(account_id) else {
            return Ok(false);
        };

        let mut updated = 0_usize;
        for entry in entries
            .iter_mut()
            .filter(|entry| trainer_matches(&entry.trainer, trainer))
        {
            entry.code = new_code.to_string();
            updated += 1;
        }

        if updated == 0 {
            return Ok(false);
        }
        self.persist().await?;

        info!(account_id, trainer, updated, "Updated friend code");
        Ok(true)
    }

    /// Removes every entry whose trainer matches.
    ///
    /// Returns whether anything was removed; the file is only written if so.
    pub async fn delete(&mut self, account_id: &str, trainer: &str) -> Result<bool> {
        let Some(entries) = self.accounts.get_mut(account_id) else {
            return Ok(false);
        };

        let before = entries.len();
        entries.retain(|entry| !trainer_matches(&entry.trainer, trainer));
        let removed = before - entries.len();

        if removed == 0 {
            return Ok(false);
        }
        self.persist().await?;

        info!(account_id, trainer, removed, "Deleted friend code");
        Ok(true)
    }

    async fn persist(&self) -> Result<()> {
        self.file.save(&self.accounts).await
    }
}
