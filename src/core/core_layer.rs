// The core module contains all business logic.
// Nothing in here knows about Discord or reqwest.

#[path = "twitch_status/mod.rs"]
pub mod twitch_status;
