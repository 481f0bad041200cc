//! Discord interaction handlers
//!
//! Handlers for interactions that are not command invocations themselves.

/// Autocomplete handlers for trainer names
pub mod autocomplete;
