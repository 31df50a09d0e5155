//! Administrator listing and mass-tag commands.

use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters};

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::plugins::is_authorized;
use crate::utils::{format_username, mention_links};

/// How many users a single /tagall sweep mentions at most.
pub const TAGALL_CAP: usize = 30;

/// Handle /admins command - list current administrators.
pub async fn admins_command(bot: ThrottledBot, msg: Message) -> anyhow::Result<()> {
    let admins = bot.get_chat_administrators(msg.chat.id).await?;

    let mut text = String::from("Administrators:\n");
    for member in &admins {
        let user = &member.user;
        text.push_str(&format_username(user.username.as_deref(), &user.first_name));
        text.push('\n');
    }

    bot.send_message(msg.chat.id, text)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    Ok(())
}

/// Handle /tagall command - mention logged users as compact links.
pub async fn tagall_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    if !is_authorized(&msg, &state).await {
        return Ok(());
    }

    let users = state.messages.distinct_users(msg.chat.id.0).await?;
    if users.is_empty() {
        return Ok(());
    }

    bot.send_message(msg.chat.id, mention_links(&users, TAGALL_CAP))
        .parse_mode(ParseMode::Html)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    Ok(())
}
