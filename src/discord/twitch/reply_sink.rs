use std::sync::Arc;

use async_trait::async_trait;
use poise::serenity_prelude as serenity;

use crate::core::twitch_status::{Conversation, ReplyError, ReplySink};

/// Discord rejects messages longer than this.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

pub struct DiscordReplySink {
    http: Arc<serenity::Http>,
}

impl DiscordReplySink {
    pub fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReplySink for DiscordReplySink {
    async fn send_reply(&self, conversation: Conversation, text: &str) -> Result<(), ReplyError> {
        let channel_id = serenity::ChannelId::new(conversation.channel_id);
        for chunk in split_message(text, DISCORD_MESSAGE_LIMIT) {
            channel_id
                .say(self.http.as_ref(), chunk)
                .await
                .map_err(|e| ReplyError::Send(e.to_string()))?;
        }
        Ok(())
    }
}

/// Split on character boundaries so no piece exceeds `limit` characters.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    text.chars()
        .collect::<Vec<char>>()
        .chunks(limit)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_one_chunk() {
        assert_eq!(split_message("Stream is offline", 2000), vec!["Stream is offline"]);
    }

    #[test]
    fn test_long_message_is_split_by_chars() {
        let text = "é".repeat(2500);
        let chunks = split_message(&text, DISCORD_MESSAGE_LIMIT);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 2000);
        assert_eq!(chunks[1].chars().count(), 500);
    }
}
