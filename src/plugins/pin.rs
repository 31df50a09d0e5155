//! Pin management commands.

use teloxide::prelude::*;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::plugins::is_authorized;

/// Handle /pin command - pin the replied-to message.
pub async fn pin_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    if !is_authorized(&msg, &state).await {
        return Ok(());
    }

    let Some(reply) = msg.reply_to_message() else {
        return Ok(());
    };

    bot.pin_chat_message(msg.chat.id, reply.id).await?;

    Ok(())
}

/// Handle /unpin command - unpin every pinned message in the chat.
pub async fn unpin_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    if !is_authorized(&msg, &state).await {
        return Ok(());
    }

    bot.unpin_all_chat_messages(msg.chat.id).await?;

    Ok(())
}
