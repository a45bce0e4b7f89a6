use url::Url;

/// Host whose links we answer. `www.` is accepted in front of it.
pub const TWITCH_HOST: &str = "twitch.tv";

pub fn is_twitch_host(host: &str) -> bool {
    let host = host.strip_prefix("www.").unwrap_or(host);
    host.eq_ignore_ascii_case(TWITCH_HOST)
}

/// Every twitch.tv link in a message, exactly as the user typed it.
///
/// Discord lets people wrap links in `<...>` to suppress embeds, so those
/// brackets are dropped before parsing.
pub fn find_twitch_links(content: &str) -> Vec<&str> {
    content.split_whitespace().filter_map(twitch_link).collect()
}

/// The link itself if `token` is an http(s) URL on twitch.tv.
pub fn twitch_link(token: &str) -> Option<&str> {
    let token = token.trim().trim_start_matches('<').trim_end_matches('>');
    if !(token.starts_with("http://") || token.starts_with("https://")) {
        return None;
    }

    let url = Url::parse(token).ok()?;
    if url.host_str().map(is_twitch_host).unwrap_or(false) {
        Some(token)
    } else {
        None
    }
}
