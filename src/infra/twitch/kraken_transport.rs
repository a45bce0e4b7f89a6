use std::time::Duration;

use reqwest::Client;
use tokio::runtime::Handle;

use crate::core::twitch_status::{StatusOutcome, StatusRequest, StatusTransport, TransportError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs status requests with reqwest, one spawned task per request.
pub struct KrakenTransport {
    client: Client,
    runtime: Handle,
}

impl KrakenTransport {
    /// Must be called from inside a tokio runtime; requests are spawned onto it.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let runtime = Handle::try_current().map_err(|e| TransportError::Setup(e.to_string()))?;

        let client = Client::builder()
            .user_agent("TwitchStatusBot/1.0")
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self { client, runtime })
    }

    async fn fetch(client: &Client, url: &str, headers: &[(&str, &str)]) -> StatusOutcome {
        let mut req = client.get(url);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return StatusOutcome::Failure(TransportError::Network(e.to_string())),
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return StatusOutcome::Failure(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        match resp.bytes().await {
            Ok(bytes) => StatusOutcome::Success(bytes.to_vec()),
            Err(e) => StatusOutcome::Failure(TransportError::Network(e.to_string())),
        }
    }
}

impl StatusTransport for KrakenTransport {
    fn submit(&self, request: StatusRequest) {
        let client = self.client.clone();
        let url = request.url().to_string();
        let headers = request.headers().to_vec();
        tracing::debug!(url = %url, "Submitting Twitch status request");

        self.runtime.spawn(async move {
            let outcome = Self::fetch(&client, &url, &headers).await;
            request.complete(outcome).await;
        });
    }
}
