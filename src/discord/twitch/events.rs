use poise::serenity_prelude as serenity;

use super::links::find_twitch_links;
use crate::core::twitch_status::Conversation;
use crate::discord::Data;

/// Check a new message for twitch.tv links and look each one up.
pub fn handle_message(data: &Data, message: &serenity::Message) {
    let conversation = Conversation {
        channel_id: message.channel_id.get(),
    };

    for link in links_to_check(message.author.bot, &message.content) {
        data.twitch_status.handle_url(link, conversation);
    }
}

/// Links worth looking up. Bot messages (including our own status lines)
/// are ignored.
pub fn links_to_check(author_is_bot: bool, content: &str) -> Vec<&str> {
    if author_is_bot {
        return Vec::new();
    }
    find_twitch_links(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_messages_are_ignored() {
        assert!(links_to_check(true, "https://www.twitch.tv/test_channel").is_empty());
    }

    #[test]
    fn test_user_messages_are_scanned() {
        assert_eq!(
            links_to_check(false, "look https://www.twitch.tv/test_channel"),
            vec!["https://www.twitch.tv/test_channel"]
        );
    }
}
