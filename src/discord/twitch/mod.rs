// Discord glue for the Twitch status plugin.
// - `links.rs` finds twitch.tv links in message text.
// - `reply_sink.rs` posts status lines back into the channel.
// - `events.rs` and `commands.rs` feed links into the core service.

#[path = "links.rs"]
pub mod links;

#[path = "reply_sink.rs"]
pub mod reply_sink;

#[path = "events.rs"]
pub mod events;

#[path = "commands.rs"]
pub mod commands;

pub use reply_sink::DiscordReplySink;
