//! Discord command implementations.

/// Friend-code commands: showcodes, addcode, updatecode, deletecode
pub mod friend_code;

pub use friend_code::*;
