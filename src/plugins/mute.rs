//! Mute management commands.
//!
//! Commands for muting and unmuting users, indefinitely or for a
//! number of minutes.

use chrono::{Duration, Utc};
use teloxide::prelude::*;
use teloxide::types::{ChatPermissions, ParseMode, ReplyParameters};
use tracing::info;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::plugins::is_authorized;
use crate::utils::{mention, reply_target};

/// Handle /mute command - indefinite mute.
pub async fn mute_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    if !is_authorized(&msg, &state).await {
        return Ok(());
    }

    let Some(target) = reply_target(&msg) else {
        return Ok(());
    };
    let (target_id, target_name) = (target.id, target.first_name.clone());

    let chat_id = msg.chat.id;

    bot.restrict_chat_member(chat_id, target_id, ChatPermissions::empty())
        .await?;
    info!("Muted user {} in chat {}", target_id, chat_id);

    bot.send_message(
        chat_id,
        format!("{} was muted.", mention(target_id.0, &target_name)),
    )
    .parse_mode(ParseMode::Html)
    .reply_parameters(ReplyParameters::new(msg.id))
    .await?;

    Ok(())
}

/// Handle /unmute command.
pub async fn unmute_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    if !is_authorized(&msg, &state).await {
        return Ok(());
    }

    let Some(target) = reply_target(&msg) else {
        return Ok(());
    };
    let (target_id, target_name) = (target.id, target.first_name.clone());

    let chat_id = msg.chat.id;

    bot.restrict_chat_member(chat_id, target_id, full_permissions())
        .await?;
    info!("Unmuted user {} in chat {}", target_id, chat_id);

    bot.send_message(
        chat_id,
        format!("{} was unmuted.", mention(target_id.0, &target_name)),
    )
    .parse_mode(ParseMode::Html)
    .reply_parameters(ReplyParameters::new(msg.id))
    .await?;

    Ok(())
}

/// Handle /tmute command - mute for N minutes.
pub async fn tmute_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    if !is_authorized(&msg, &state).await {
        return Ok(());
    }

    let Some(target) = reply_target(&msg) else {
        return Ok(());
    };
    let (target_id, target_name) = (target.id, target.first_name.clone());

    let chat_id = msg.chat.id;

    // A missing, malformed or out-of-range minute count is a usage error,
    // not a silent abort.
    let Some(minutes) = msg.text().and_then(parse_tmute_minutes) else {
        bot.send_message(chat_id, "Usage: /tmute <minutes>, as a reply to the target.")
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    };

    let until = Utc::now() + Duration::minutes(minutes);

    bot.restrict_chat_member(chat_id, target_id, ChatPermissions::empty())
        .until_date(until)
        .await?;
    info!(
        "Muted user {} in chat {} for {} minutes",
        target_id, chat_id, minutes
    );

    bot.send_message(
        chat_id,
        format!(
            "{} was muted for {} minutes.",
            mention(target_id.0, &target_name),
            minutes
        ),
    )
    .parse_mode(ParseMode::Html)
    .reply_parameters(ReplyParameters::new(msg.id))
    .await?;

    Ok(())
}

/// Longest span `/tmute` accepts, in minutes. Telegram caps restrictions
/// at 366 days; anything longer is treated as permanent.
const MAX_TMUTE_MINUTES: i64 = 366 * 24 * 60;

/// Parses the minute argument out of the full `/tmute` command text.
/// Only values in `1..=MAX_TMUTE_MINUTES` are accepted.
fn parse_tmute_minutes(text: &str) -> Option<i64> {
    text.split_whitespace()
        .nth(1)?
        .parse::<i64>()
        .ok()
        .filter(|minutes| (1..=MAX_TMUTE_MINUTES).contains(minutes))
}

/// Every permission a regular member can hold; granting this set undoes
/// a mute.
fn full_permissions() -> ChatPermissions {
    ChatPermissions::empty()
        | ChatPermissions::SEND_MESSAGES
        | ChatPermissions::SEND_AUDIOS
        | ChatPermissions::SEND_DOCUMENTS
        | ChatPermissions::SEND_PHOTOS
        | ChatPermissions::SEND_VIDEOS
        | ChatPermissions::SEND_VIDEO_NOTES
        | ChatPermissions::SEND_VOICE_NOTES
        | ChatPermissions::SEND_POLLS
        | ChatPermissions::SEND_OTHER_MESSAGES
        | ChatPermissions::ADD_WEB_PAGE_PREVIEWS
        | ChatPermissions::CHANGE_INFO
        | ChatPermissions::INVITE_USERS
        | ChatPermissions::PIN_MESSAGES
        | ChatPermissions::MANAGE_TOPICS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minute_argument_is_parsed() {
        assert_eq!(parse_tmute_minutes("/tmute 5"), Some(5));
        assert_eq!(parse_tmute_minutes("/tmute 527040"), Some(MAX_TMUTE_MINUTES));
    }

    #[test]
    fn missing_or_malformed_minutes_are_rejected() {
        assert_eq!(parse_tmute_minutes("/tmute"), None);
        assert_eq!(parse_tmute_minutes("/tmute soon"), None);
        assert_eq!(parse_tmute_minutes("/tmute 0"), None);
        assert_eq!(parse_tmute_minutes("/tmute -5"), None);
    }

    #[test]
    fn oversized_minutes_are_rejected() {
        assert_eq!(parse_tmute_minutes("/tmute 527041"), None);
        assert_eq!(parse_tmute_minutes("/tmute 200000000000"), None);
    }

    #[test]
    fn deadline_fits_for_every_accepted_span() {
        // The cap itself must stay representable when added to the clock.
        let farthest = Utc::now().checked_add_signed(Duration::minutes(MAX_TMUTE_MINUTES));
        assert!(farthest.is_some());
    }
}
