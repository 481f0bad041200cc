//! Storage location configuration.

use std::path::PathBuf;

/// Environment variable overriding the data file location.
pub const DATA_PATH_VAR: &str = "FRIEND_CODES_PATH";

/// Used when `FRIEND_CODES_PATH` is unset or blank.
pub const DEFAULT_DATA_PATH: &str = "friendcodes.json";

/// Gets the data file path from the environment or returns the default.
#[must_use]
pub fn get_data_path() -> PathBuf {
    resolve_data_path(std::env::var(DATA_PATH_VAR).ok().as_deref())
}

fn resolve_data_path(raw: Option<&str>) -> PathBuf {
    match raw.map(str::trim) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}
