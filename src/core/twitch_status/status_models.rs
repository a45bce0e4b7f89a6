use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /kraken/streams/:channel`.
///
/// Kraken reports failures inside a 2xx body as well, so `error` and
/// `message` are checked before `stream`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPayload {
    /// Usually a string, but any JSON value counts as an error report.
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    /// `None` when the channel is offline.
    #[serde(default)]
    pub stream: Option<LiveStream>,
}

/// Render a loosely typed error field for logs, without JSON quotes on strings.
pub fn error_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveStream {
    pub game: Option<String>,
    pub viewers: u64,
    pub channel: StreamChannel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamChannel {
    pub mature: Option<bool>,
    pub status: Option<String>,
    pub display_name: String,
    pub name: String,
    pub partner: Option<bool>,
    pub url: Option<String>,
    pub views: u64,
    pub followers: u64,
}
