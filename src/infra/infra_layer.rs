// The infra module contains implementations of core traits.

#[path = "twitch/mod.rs"]
pub mod twitch;
