//! Start command.

use teloxide::prelude::*;
use teloxide::types::ReplyParameters;

use crate::bot::dispatcher::ThrottledBot;

/// Handle /start command.
pub async fn start_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    bot.send_message(msg.chat.id, "Group management bot is up and running.")
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    Ok(())
}
