// This is the entry point of the Twitch status bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (link parsing, request building, rendering)
// - `infra/` = Implementations of core traits (HTTP transport, config file)
// - `discord/` = Discord-specific adapters (commands, events, replies)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;

use crate::core::twitch_status::TwitchStatusService;
use crate::discord::twitch::events as twitch_events;
use crate::discord::twitch::DiscordReplySink;
use crate::discord::{Data, Error};
use crate::infra::twitch::kraken_transport::DEFAULT_TIMEOUT;
use crate::infra::twitch::{JsonConfigFile, KrakenTransport};

const DEFAULT_CONFIG_PATH: &str = "data/twitch_status.json";

/// Event handler for non-command Discord events.
/// Messages are scanned for twitch.tv links.
async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        twitch_events::handle_message(data, new_message);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let token = std::env::var("DISCORD_TOKEN").context(
        "Missing DISCORD_TOKEN environment variable! Create a .env file with your bot token.",
    )?;

    // A bad responseFormat stops the bot here rather than on the first link.
    let config_path =
        std::env::var("TWITCH_STATUS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match JsonConfigFile::new(&config_path).load().await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                path = %config_path,
                code = e.code(),
                error = %e,
                "Invalid Twitch status config"
            );
            return Err(e.into());
        }
    };
    let config =
        config.with_response_format(std::env::var("TWITCH_STATUS_RESPONSE_FORMAT").ok());

    let timeout = std::env::var("TWITCH_STATUS_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    tracing::info!(
        response_format = config.response_format.as_str(),
        timeout_secs = timeout.as_secs(),
        "Twitch status plugin configured"
    );

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![discord::twitch::commands::twitch()],
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                tracing::info!("Bot is starting up...");

                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                // ====================================================================
                // DEPENDENCY INJECTION
                // ====================================================================
                // The reply sink needs the gateway's HTTP client, so the service is
                // wired here instead of before the framework is built.
                let transport = KrakenTransport::new(timeout)?;
                let sink = Arc::new(DiscordReplySink::new(ctx.http.clone()));
                let twitch_status = Arc::new(TwitchStatusService::new(config, transport, sink));

                tracing::info!("Bot is ready");
                Ok(Data { twitch_status })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;
    Ok(())
}
