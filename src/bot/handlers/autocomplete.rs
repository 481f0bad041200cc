//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggests the invoker's own trainer names while they type the `trainer` option
//! of `updatecode` and `deletecode`. Suggestions are a convenience only; any
//! string is still accepted.

use crate::{bot::Context, core::persistence::FriendCodeEntry};

/// Discord's cap on autocomplete choices.
const MAX_CHOICES: usize = 25;

/// Filters `entries` down to distinct trainer names containing `partial`, ignoring case.
#[must_use]
pub fn matching_trainers(entries: &[FriendCodeEntry], partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    let mut matching: Vec<String> = Vec::new();

    for entry in entries {
        if !entry.trainer.to_lowercase().contains(&partial_lower) {
            continue;
        }
        if matching
            .iter()
            .any(|seen| seen.to_lowercase() == entry.trainer.to_lowercase())
        {
            continue;
        }
        matching.push(entry.trainer.clone());
        if matching.len() == MAX_CHOICES {
            break;
        }
    }

    matching
}

/// Provides autocomplete suggestions for the invoker's trainer names.
pub async fn autocomplete_trainer_name(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let account_id = ctx.author().id.to_string();
    ctx.data()
        .dispatcher
        .with_store(|store| matching_trainers(store.list(&account_id), partial))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(trainers: &[&str]) -> Vec<FriendCodeEntry> {
        trainers
            .iter()
            .map(|trainer| FriendCodeEntry::new(*trainer, "0000"))
            .collect()
    }

    #[test]
    fn test_matching_trainers_filters_case_insensitively() {
        let entries = entries(&["Ash", "Misty", "Brock", "ASHLEY"]);
        assert_eq!(matching_trainers(&entries, "as"), vec!["Ash", "ASHLEY"]);
        assert_eq!(matching_trainers(&entries, ""), vec!["Ash", "Misty", "Brock", "ASHLEY"]);
        assert!(matching_trainers(&entries, "gary").is_empty());
    }

    #[test]
    fn test_matching_trainers_skips_duplicates() {
        let entries = entries(&["Ash", "ash", "Ash"]);
        assert_eq!(matching_trainers(&entries, "a"), vec!["Ash"]);
    }

    #[test]
    fn test_matching_trainers_caps_choices() {
        let names: Vec<String> = (0..40).map(|i| format!("Trainer{i}")).collect();
        let entries: Vec<FriendCodeEntry> = names
            .iter()
            .map(|name| FriendCodeEntry::new(name.as_str(), "0000"))
            .collect();
        assert_eq!(matching_trainers(&entries, "trainer").len(), MAX_CHOICES);
    }
}
