// Turns a twitch.tv link into the channel it points at.
//
// The parser is intentionally literal: no percent-decoding, no case folding
// and no query/fragment stripping. Whatever follows the host is the channel.

use std::fmt;

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Path segments that look like channels but are Twitch site pages.
const RESERVED_WORDS: [&str; 1] = ["directory"];

/// Name of a broadcaster on Twitch. Never empty and never contains `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelName(String);

impl ChannelName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Get the channel name from a twitch.tv URL.
///
/// Returns `None` when the link is not a channel page: a deeper path
/// (`/directory/following`, `/channel/videos`), a reserved page, or a bare
/// host without any path.
pub fn extract_channel_name(url: &str) -> Option<ChannelName> {
    let stripped = SCHEMES
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
        .unwrap_or(url);

    let parts: Vec<&str> = stripped.split('/').collect();
    if parts.len() > 2 {
        return None;
    }

    // A bare host has no second segment at all.
    let segment = *parts.get(1)?;
    if segment.is_empty() || RESERVED_WORDS.contains(&segment) {
        return None;
    }

    Some(ChannelName(segment.to_string()))
}
