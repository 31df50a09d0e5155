//! User info and group statistics commands.

use teloxide::prelude::*;
use teloxide::types::ReplyParameters;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::utils::reply_target;

/// Handle /info command - report the replied-to user's identity.
pub async fn info_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let Some(target) = reply_target(&msg) else {
        return Ok(());
    };

    let username = match target.username.as_deref() {
        Some(u) => format!("@{}", u),
        None => "-".to_string(),
    };

    let text = format!(
        "ID: {}\nUsername: {}\nName: {}",
        target.id, username, target.first_name
    );

    bot.send_message(msg.chat.id, text)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    Ok(())
}

/// Handle /stats command - logged-user and warned-user counts.
pub async fn stats_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    let chat_id = msg.chat.id;

    let logged_users = state.messages.distinct_users(chat_id.0).await?.len();
    let warned_users = state.warns.warned_user_count(chat_id.0).await?;

    let text = format!(
        "Logged users: {}\nUsers with warns: {}",
        logged_users, warned_users
    );

    bot.send_message(chat_id, text)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    Ok(())
}
