use std::fmt;
use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use super::channel_name::ChannelName;

/// Kraken streams endpoint. The channel name is appended as-is.
pub const DEFAULT_API_URL: &str = "https://api.twitch.tv/kraken/streams/";

/// Media type for the v3 Kraken API.
pub const ACCEPT_V3: &str = "application/vnd.twitchtv.v3+json";

/// Why a request never produced a response body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Twitch returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Transport setup failed: {0}")]
    Setup(String),
}

pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Callback run once a request has resolved.
pub type Continuation<T> = Box<dyn FnOnce(T) -> BoxFuture + Send + 'static>;

/// Box an async closure into a [`Continuation`].
pub fn continuation<T, F, Fut>(f: F) -> Continuation<T>
where
    T: Send + 'static,
    F: FnOnce(T) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Box::new(move |value: T| -> BoxFuture { Box::pin(f(value)) })
}

/// How a submitted request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    Success(Vec<u8>),
    Failure(TransportError),
}

/// A ready-to-send GET against the streams API.
///
/// The transport owns the request once submitted and finishes it with
/// [`StatusRequest::complete`]. Completing consumes the request, so only one
/// of the two continuations can ever run.
pub struct StatusRequest {
    url: String,
    headers: Vec<(&'static str, &'static str)>,
    on_success: Continuation<Vec<u8>>,
    on_failure: Continuation<TransportError>,
}

impl StatusRequest {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[(&'static str, &'static str)] {
        &self.headers
    }

    /// Hand the outcome to the matching continuation and wait for it.
    pub async fn complete(self, outcome: StatusOutcome) {
        match outcome {
            StatusOutcome::Success(body) => (self.on_success)(body).await,
            StatusOutcome::Failure(error) => (self.on_failure)(error).await,
        }
    }
}

impl fmt::Debug for StatusRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusRequest")
            .field("url", &self.url)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Assembles [`StatusRequest`]s. Performs no I/O.
#[derive(Debug, Clone)]
pub struct StatusRequestBuilder {
    api_url: String,
}

impl Default for StatusRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusRequestBuilder {
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Returns the API URL for a channel.
    pub fn api_url_for(&self, channel: &ChannelName) -> String {
        format!("{}{}", self.api_url, channel.as_str())
    }

    pub fn build(
        &self,
        channel: &ChannelName,
        on_success: Continuation<Vec<u8>>,
        on_failure: Continuation<TransportError>,
    ) -> StatusRequest {
        StatusRequest {
            url: self.api_url_for(channel),
            headers: vec![("Accept", ACCEPT_V3)],
            on_success,
            on_failure,
        }
    }
}

/// Something that can perform a [`StatusRequest`].
///
/// `submit` must return without waiting on the network and must complete the
/// request exactly once, some time later.
pub trait StatusTransport: Send + Sync {
    fn submit(&self, request: StatusRequest);
}

// Lets a shared transport be handed to several services.
impl<T: StatusTransport + ?Sized> StatusTransport for std::sync::Arc<T> {
    fn submit(&self, request: StatusRequest) {
        (**self).submit(request)
    }
}
