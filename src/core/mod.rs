/// Slash command dispatch and reply model
pub mod dispatch;
/// Aggregate `showcodes` listing and the membership lookup seam
pub mod listing;
/// Loading and saving the friend-code JSON file
pub mod persistence;
/// In-memory friend-code store
pub mod store;
/// Team classification from server roles
pub mod team;
