use super::status_models::{error_text, LiveStream, StatusPayload};

pub const DEFAULT_RESPONSE_FORMAT: &str =
    "%viewers% viewers watching %display_name% play %game% - %status%";

pub const OFFLINE_MESSAGE: &str = "Stream is offline";

/// Tokens understood by [`ResponseFormat`].
pub const TOKENS: [&str; 10] = [
    "%game%",
    "%viewers%",
    "%mature%",
    "%status%",
    "%display_name%",
    "%name%",
    "%partner%",
    "%url%",
    "%views%",
    "%followers%",
];

/// Template used to describe a live stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFormat(String);

impl ResponseFormat {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ResponseFormat {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSE_FORMAT)
    }
}

/// What a successful response body turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Offline,
    Rendered(String),
    RemoteError {
        error: String,
        message: Option<String>,
    },
    DecodeError(String),
}

impl Resolution {
    /// Text to post back into the conversation, if any.
    pub fn reply(&self) -> Option<&str> {
        match self {
            Resolution::Offline => Some(OFFLINE_MESSAGE),
            Resolution::Rendered(text) => Some(text.as_str()),
            Resolution::RemoteError { .. } | Resolution::DecodeError(_) => None,
        }
    }
}

pub struct ResponseRenderer {
    format: ResponseFormat,
}

impl ResponseRenderer {
    pub fn new(format: ResponseFormat) -> Self {
        Self { format }
    }

    /// Decode a response body and decide what to say about it.
    pub fn resolve(&self, body: &[u8]) -> Resolution {
        let payload: StatusPayload = match serde_json::from_slice(body) {
            Ok(payload) => payload,
            Err(e) => return Resolution::DecodeError(e.to_string()),
        };

        if let Some(error) = payload.error {
            return Resolution::RemoteError {
                error: error_text(&error),
                message: payload.message.as_ref().map(error_text),
            };
        }

        match payload.stream {
            None => Resolution::Offline,
            Some(stream) => Resolution::Rendered(self.render(&stream)),
        }
    }

    /// Substitute every known token in one left-to-right pass.
    ///
    /// Replacement values are never scanned again, so a stream title that
    /// happens to contain `%game%` comes out unchanged.
    pub fn render(&self, stream: &LiveStream) -> String {
        let replacements = replacements(stream);
        let template = self.format.as_str();
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('%') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match replacements
                .iter()
                .find(|(token, _)| tail.starts_with(token))
            {
                Some((token, value)) => {
                    out.push_str(value);
                    rest = &tail[token.len()..];
                }
                None => {
                    out.push('%');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

fn yes_no(flag: Option<bool>) -> String {
    let word = if flag.unwrap_or(false) { "yes" } else { "no" };
    word.to_string()
}

fn replacements(stream: &LiveStream) -> [(&'static str, String); 10] {
    let channel = &stream.channel;
    [
        (TOKENS[0], stream.game.clone().unwrap_or_default()),
        (TOKENS[1], stream.viewers.to_string()),
        (TOKENS[2], yes_no(channel.mature)),
        (TOKENS[3], channel.status.clone().unwrap_or_default()),
        (TOKENS[4], channel.display_name.clone()),
        (TOKENS[5], channel.name.clone()),
        (TOKENS[6], yes_no(channel.partner)),
        (TOKENS[7], channel.url.clone().unwrap_or_default()),
        (TOKENS[8], channel.views.to_string()),
        (TOKENS[9], channel.followers.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIVE: &str = r#"{
        "stream": {
            "game": "Foo",
            "viewers": 42,
            "channel": {
                "mature": true,
                "status": "Playing",
                "display_name": "Bar",
                "name": "bar",
                "partner": false,
                "url": "https://www.twitch.tv/bar",
                "views": 1000,
                "followers": 250
            }
        }
    }"#;

    fn default_renderer() -> ResponseRenderer {
        ResponseRenderer::new(ResponseFormat::default())
    }

    #[test]
    fn test_default_format() {
        assert_eq!(
            default_renderer().resolve(LIVE.as_bytes()),
            Resolution::Rendered("42 viewers watching Bar play Foo - Playing".to_string())
        );
    }

    #[test]
    fn test_all_tokens_are_replaced() {
        let renderer = ResponseRenderer::new(ResponseFormat::new(
            "%name%|%display_name%|%game%|%viewers%|%mature%|%partner%|%status%|%url%|%views%|%followers%",
        ));
        assert_eq!(
            renderer.resolve(LIVE.as_bytes()).reply(),
            Some("bar|Bar|Foo|42|yes|no|Playing|https://www.twitch.tv/bar|1000|250")
        );
    }

    #[test]
    fn test_unknown_text_is_untouched() {
        let renderer = ResponseRenderer::new(ResponseFormat::new(
            "100% %unknown% %name %viewers%%",
        ));
        assert_eq!(
            renderer.resolve(LIVE.as_bytes()).reply(),
            Some("100% %unknown% %name 42%")
        );
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let body = LIVE.replace("\"Playing\"", "\"%game% speedrun\"");
        assert_eq!(
            default_renderer().resolve(body.as_bytes()).reply(),
            Some("42 viewers watching Bar play Foo - %game% speedrun")
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let renderer = default_renderer();
        assert_eq!(
            renderer.resolve(LIVE.as_bytes()),
            renderer.resolve(LIVE.as_bytes())
        );
    }

    #[test]
    fn test_null_fields_render_empty() {
        let body = LIVE
            .replace("\"Foo\"", "null")
            .replace("\"mature\": true", "\"mature\": null");
        let renderer = ResponseRenderer::new(ResponseFormat::new("[%game%] mature=%mature%"));
        assert_eq!(
            renderer.resolve(body.as_bytes()).reply(),
            Some("[] mature=no")
        );
    }

    #[test]
    fn test_offline_ignores_format() {
        let renderer = ResponseRenderer::new(ResponseFormat::new("%name% is live"));
        let resolution = renderer.resolve(br#"{"stream": null}"#);
        assert_eq!(resolution, Resolution::Offline);
        assert_eq!(resolution.reply(), Some("Stream is offline"));
    }

    #[test]
    fn test_missing_stream_is_offline() {
        let resolution = default_renderer().resolve(b"{}");
        assert_eq!(resolution, Resolution::Offline);
        assert_eq!(resolution.reply(), Some("Stream is offline"));
    }

    #[test]
    fn test_non_string_error_is_still_a_remote_error() {
        let resolution =
            default_renderer().resolve(br#"{"error": {"code": 500}, "message": 42}"#);
        assert_eq!(
            resolution,
            Resolution::RemoteError {
                error: r#"{"code":500}"#.to_string(),
                message: Some("42".to_string()),
            }
        );
        assert_eq!(resolution.reply(), None);
    }

    #[test]
    fn test_remote_error_has_no_reply() {
        let resolution = default_renderer()
            .resolve(br#"{"error": "Not Found", "status": 404, "message": "Channel 'nope' does not exist"}"#);
        assert_eq!(
            resolution,
            Resolution::RemoteError {
                error: "Not Found".to_string(),
                message: Some("Channel 'nope' does not exist".to_string()),
            }
        );
        assert_eq!(resolution.reply(), None);
    }

    #[test]
    fn test_malformed_json_is_a_decode_error() {
        let resolution = default_renderer().resolve(b"<html>oops</html>");
        assert!(matches!(resolution, Resolution::DecodeError(_)));
        assert_eq!(resolution.reply(), None);
    }
}
