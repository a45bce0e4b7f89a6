// Discord layer - commands and event handlers.

#[path = "twitch/mod.rs"]
pub mod twitch;

use std::sync::Arc;

use crate::core::twitch_status::TwitchStatusService;
use crate::infra::twitch::KrakenTransport;
use self::twitch::DiscordReplySink;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Data that's shared across all commands and event handlers.
pub struct Data {
    pub twitch_status: Arc<TwitchStatusService<KrakenTransport, DiscordReplySink>>,
}
