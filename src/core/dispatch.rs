//! Command dispatcher - applies one slash command to the store and builds the reply.
//!
//! Each invocation is independent: the invoker's record is ensured first, then the
//! command runs to completion (including its persist) while holding the store lock.
//! `showcodes` is the exception; it copies the snapshot and releases the lock before
//! resolving members.

use crate::{
    core::{
        listing::{self, MemberLookup},
        store::FriendCodeStore,
    },
    errors::Result,
};
use tokio::sync::Mutex;
use tracing::debug;

/// The closed set of commands the bot registers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every stored code from everyone
    ShowCodes,
    /// Append a trainer and code for the invoker
    AddCode {
        /// Trainer name
        trainer: String,
        /// Friend code
        code: String,
    },
    /// Replace the code of the invoker's matching trainers
    UpdateCode {
        /// Trainer name, matched ignoring case
        trainer: String,
        /// Replacement code
        new_code: String,
    },
    /// Remove the invoker's matching trainers
    DeleteCode {
        /// Trainer name, matched ignoring case
        trainer: String,
    },
}

impl Command {
    /// Slash command name as registered.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ShowCodes => "showcodes",
            Self::AddCode { .. } => "addcode",
            Self::UpdateCode { .. } => "updatecode",
            Self::DeleteCode { .. } => "deletecode",
        }
    }

    /// Whether the reply should be deferred (privately) before dispatching.
    ///
    /// Only `showcodes` resolves members over the network, one request per account.
    #[must_use]
    pub const fn defers_reply(&self) -> bool {
        matches!(self, Self::ShowCodes)
    }
}

/// Who gets to see a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Posted in the channel
    Public,
    /// Only shown to the invoker
    Private,
}

/// Text and visibility of a command response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message body
    pub content: String,
    /// Public or ephemeral
    pub visibility: Visibility,
}

impl Reply {
    /// A reply everyone in the channel sees.
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            visibility: Visibility::Public,
        }
    }

    /// A reply only the invoker sees.
    pub fn private(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            visibility: Visibility::Private,
        }
    }

    /// Whether the reply should be sent as ephemeral.
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

fn not_found(trainer: &str) -> Reply {
    Reply::private(format!("No friend code found for trainer {trainer}."))
}

/// Owns the store for the lifetime of the process and runs commands against it.
#[derive(Debug)]
pub struct Dispatcher {
    store: Mutex<FriendCodeStore>,
}

impl Dispatcher {
    /// Takes ownership of a loaded store.
    #[must_use]
    pub fn new(store: FriendCodeStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Runs `command` on behalf of `account_id`.
    ///
    /// `lookup` is only consulted by `showcodes`. Errors are limited to persistence
    /// failures; a missing trainer is a normal, private reply.
    pub async fn dispatch<L: MemberLookup + Sync>(
        &self,
        account_id: &str,
        command: Command,
        lookup: &L,
    ) -> Result<Reply> {
        debug!(account_id, command = command.name(), "Dispatching command");
        let mut store = self.store.lock().await;
        store.ensure(account_id);

        match command {
            Command::ShowCodes => {
                let snapshot = store.list_all().clone();
                drop(store);
                let listing = listing::render_listing(&snapshot, lookup).await?;
                Ok(Reply::private(listing))
            }
            Command::AddCode { trainer, code } => {
                store.add(account_id, &trainer, &code).await?;
                Ok(Reply::public(format!(
                    "Friend code for trainer {trainer} added successfully!"
                )))
            }
            Command::UpdateCode { trainer, new_code } => {
                if store.list(account_id).is_empty() {
                    return Ok(Reply::private("You have no stored friend codes to update."));
                }
                if store.update(account_id, &trainer, &new_code).await? {
                    Ok(Reply::public(format!(
                        "Friend code for trainer {trainer} updated successfully!"
                    )))
                } else {
                    Ok(not_found(&trainer))
                }
            }
            Command::DeleteCode { trainer } => {
                if store.list(account_id).is_empty() {
                    return Ok(Reply::private("You have no stored friend codes to delete."));
                }
                if store.delete(account_id, &trainer).await? {
                    Ok(Reply::public(format!(
                        "Friend code for trainer {trainer} deleted successfully!"
                    )))
                } else {
                    Ok(not_found(&trainer))
                }
            }
        }
    }

    /// Runs `f` with shared access to the store.
    pub async fn with_store<T>(&self, f: impl FnOnce(&FriendCodeStore) -> T) -> T {
        let store = self.store.lock().await;
        f(&store)
    }
}
