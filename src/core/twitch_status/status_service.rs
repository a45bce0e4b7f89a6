use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::channel_name::{extract_channel_name, ChannelName};
use super::response_format::{Resolution, ResponseRenderer};
use super::status_config::TwitchStatusConfig;
use super::status_request::{
    continuation, StatusRequest, StatusRequestBuilder, StatusTransport, TransportError,
};

/// Where a reply should go. Platform ids are kept as primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Conversation {
    pub channel_id: u64,
}

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("Failed to send reply: {0}")]
    Send(String),
}

/// Posts a line of text into a conversation.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_reply(&self, conversation: Conversation, text: &str) -> Result<(), ReplyError>;
}

/// Answers twitch.tv links with the channel's live status.
pub struct TwitchStatusService<T: StatusTransport, R: ReplySink + 'static> {
    builder: StatusRequestBuilder,
    renderer: Arc<ResponseRenderer>,
    transport: T,
    sink: Arc<R>,
}

impl<T: StatusTransport, R: ReplySink + 'static> TwitchStatusService<T, R> {
    pub fn new(config: TwitchStatusConfig, transport: T, sink: Arc<R>) -> Self {
        Self::with_builder(StatusRequestBuilder::new(), config, transport, sink)
    }

    pub fn with_builder(
        builder: StatusRequestBuilder,
        config: TwitchStatusConfig,
        transport: T,
        sink: Arc<R>,
    ) -> Self {
        Self {
            builder,
            renderer: Arc::new(ResponseRenderer::new(config.response_format)),
            transport,
            sink,
        }
    }

    /// Look up the channel a link points at and reply with its status later.
    ///
    /// Returns `true` if a request was submitted. Links that don't name a
    /// channel are ignored silently.
    pub fn handle_url(&self, url: &str, conversation: Conversation) -> bool {
        tracing::info!(url = %url, "Handling Twitch URL");

        let Some(channel) = extract_channel_name(url) else {
            tracing::debug!(url = %url, "Not a channel link, skipping");
            return false;
        };

        tracing::debug!(channel = %channel, "Requesting stream status");
        let request = self.request_for(&channel, conversation);
        self.transport.submit(request);
        true
    }

    fn request_for(
        &self,
        channel: &ChannelName,
        conversation: Conversation,
    ) -> StatusRequest {
        let api_url = self.builder.api_url_for(channel);

        let renderer = Arc::clone(&self.renderer);
        let sink = Arc::clone(&self.sink);
        let resolve_url = api_url.clone();
        let on_success = continuation(move |body: Vec<u8>| async move {
            let resolution = renderer.resolve(&body);
            deliver(sink.as_ref(), &resolve_url, conversation, resolution).await;
        });

        let reject_url = api_url;
        let on_failure = continuation(move |error: TransportError| async move {
            reject(&reject_url, &error);
        });

        self.builder.build(channel, on_success, on_failure)
    }
}

async fn deliver<R: ReplySink + ?Sized>(
    sink: &R,
    url: &str,
    conversation: Conversation,
    resolution: Resolution,
) {
    match &resolution {
        Resolution::RemoteError { error, message } => {
            tracing::warn!(
                url = %url,
                error = %error,
                message = message.as_deref().unwrap_or(""),
                "Twitch response error"
            );
            return;
        }
        Resolution::DecodeError(reason) => {
            tracing::warn!(url = %url, error = %reason, "Could not decode Twitch response");
            return;
        }
        Resolution::Offline | Resolution::Rendered(_) => {
            tracing::info!(url = %url, ?resolution, "Resolved Twitch status");
        }
    }

    if let Some(text) = resolution.reply() {
        if let Err(err) = sink.send_reply(conversation, text).await {
            tracing::warn!(
                channel_id = conversation.channel_id,
                error = %err,
                "Failed to send Twitch status"
            );
        }
    }
}

fn reject(url: &str, error: &TransportError) {
    tracing::warn!(url = %url, error = %error, "Request for channel data failed");
}
