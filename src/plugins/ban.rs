//! Ban management commands.
//!
//! Commands for banning, unbanning, and kicking users.

use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters};
use tracing::info;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::plugins::is_authorized;
use crate::utils::{mention, reply_target};

/// Handle /ban command.
pub async fn ban_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    removal_action(bot, msg, state, RemovalMode::Ban).await
}

/// Handle /unban command.
pub async fn unban_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    removal_action(bot, msg, state, RemovalMode::Unban).await
}

/// Handle /kick command.
pub async fn kick_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    removal_action(bot, msg, state, RemovalMode::Kick).await
}

#[derive(Clone, Copy)]
enum RemovalMode {
    Ban,
    Unban,
    Kick,
}

async fn removal_action(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
    mode: RemovalMode,
) -> anyhow::Result<()> {
    if !is_authorized(&msg, &state).await {
        return Ok(());
    }

    let Some(target) = reply_target(&msg) else {
        return Ok(());
    };
    let (target_id, target_name) = (target.id, target.first_name.clone());

    let chat_id = msg.chat.id;

    let past_tense = match mode {
        RemovalMode::Ban => {
            bot.ban_chat_member(chat_id, target_id).await?;
            info!("Banned user {} in chat {}", target_id, chat_id);
            "banned"
        }
        RemovalMode::Unban => {
            bot.unban_chat_member(chat_id, target_id).await?;
            info!("Unbanned user {} in chat {}", target_id, chat_id);
            "unbanned"
        }
        RemovalMode::Kick => {
            // Ban then unban removes the user without a permanent block
            bot.ban_chat_member(chat_id, target_id).await?;
            bot.unban_chat_member(chat_id, target_id).await?;
            info!("Kicked user {} in chat {}", target_id, chat_id);
            "kicked"
        }
    };

    bot.send_message(
        chat_id,
        format!("{} was {}.", mention(target_id.0, &target_name), past_tense),
    )
    .parse_mode(ParseMode::Html)
    .reply_parameters(ReplyParameters::new(msg.id))
    .await?;

    Ok(())
}
