use super::links::twitch_link;
use crate::core::twitch_status::Conversation;
use crate::discord::{Context, Error};

/// Check whether a Twitch channel is live.
#[poise::command(slash_command)]
pub async fn twitch(
    ctx: Context<'_>,
    #[description = "Link to a Twitch channel, e.g. https://www.twitch.tv/name"] url: String,
) -> Result<(), Error> {
    let conversation = Conversation {
        channel_id: ctx.channel_id().get(),
    };

    // The status itself arrives as a separate message once Twitch answers.
    let submitted = match twitch_link(&url) {
        Some(link) => ctx.data().twitch_status.handle_url(link, conversation),
        None => false,
    };

    if submitted {
        ctx.say("Checking the stream...").await?;
    } else {
        ctx.send(
            poise::CreateReply::default()
                .content("That link doesn't point at a Twitch channel.")
                .ephemeral(true),
        )
        .await?;
    }

    Ok(())
}
