//! Warning system commands.
//!
//! Warns accumulate per user. Reaching the group's limit bans the user
//! and resets the counter in the same step, so a counter never survives
//! a ban.

use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters};
use tracing::info;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::plugins::is_authorized;
use crate::utils::{mention, reply_target};

/// Handle /warn command.
pub async fn warn_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    if !is_authorized(&msg, &state).await {
        return Ok(());
    }

    let Some(target) = reply_target(&msg) else {
        return Ok(());
    };
    let (target_id, target_name) = (target.id, target.first_name.clone());

    let chat_id = msg.chat.id;

    let count = state.warns.register_warn(chat_id.0, target_id.0).await?;
    let limit = state.groups.effective_warn_limit(chat_id.0).await?;

    if escalates(count, limit) {
        // Ban first; the ledger is only cleared once the ban went through.
        bot.ban_chat_member(chat_id, target_id).await?;
        state.warns.clear_warns(chat_id.0, target_id.0).await?;
        info!(
            "User {} reached the warn limit in chat {} and was banned",
            target_id, chat_id
        );

        bot.send_message(
            chat_id,
            format!(
                "{} was banned for reaching the warn limit.",
                mention(target_id.0, &target_name)
            ),
        )
        .parse_mode(ParseMode::Html)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;
    } else {
        bot.send_message(chat_id, format!("Warn {}/{}", count, limit))
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
    }

    Ok(())
}

/// Handle /unwarn command.
pub async fn unwarn_command(
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

    state.warns.clear_warns(msg.chat.id.0, target_id.0).await?;

    bot.send_message(
        msg.chat.id,
        format!("Warns cleared for {}.", mention(target_id.0, &target_name)),
    )
    .parse_mode(ParseMode::Html)
    .reply_parameters(ReplyParameters::new(msg.id))
    .await?;

    Ok(())
}

/// Handle /setwarn command.
pub async fn setwarn_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    if !is_authorized(&msg, &state).await {
        return Ok(());
    }

    let chat_id = msg.chat.id;

    // A missing or malformed limit is a usage error, not a silent abort.
    // Zero is rejected: the limit must be at least 1.
    let limit = msg
        .text()
        .and_then(|text| text.split_whitespace().nth(1))
        .and_then(|arg| arg.parse::<u32>().ok())
        .filter(|l| *l >= 1);

    let Some(limit) = limit else {
        bot.send_message(
            chat_id,
            "Usage: /setwarn <limit>, where limit is a positive number.",
        )
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;
        return Ok(());
    };

    state.groups.set_warn_limit(chat_id.0, limit).await?;
    info!("Warn limit for chat {} set to {}", chat_id, limit);

    bot.send_message(chat_id, format!("Warn limit set to {}.", limit))
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    Ok(())
}

/// Whether a warn count has reached the group's limit. Counts above the
/// limit escalate too: lowering the limit below a standing count makes
/// the next warn ban the user.
fn escalates(count: u32, limit: u32) -> bool {
    count >= limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{DEFAULT_WARN_LIMIT, WarnLedger};

    #[test]
    fn warn_matching_the_limit_escalates() {
        assert!(escalates(3, 3));
        assert!(escalates(1, 1));
    }

    #[test]
    fn warns_below_the_limit_do_not_escalate() {
        assert!(!escalates(2, 3));
        assert!(!escalates(1, 3));
    }

    #[test]
    fn warns_above_a_lowered_limit_escalate() {
        // A /setwarn below a user's standing count bans on their next warn.
        assert!(escalates(5, 3));
    }

    #[test]
    fn default_limit_bans_on_the_third_warn_and_starts_over() {
        let mut ledger = WarnLedger::new(100);

        assert!(!escalates(ledger.register(7), DEFAULT_WARN_LIMIT));
        assert!(!escalates(ledger.register(7), DEFAULT_WARN_LIMIT));
        assert!(escalates(ledger.register(7), DEFAULT_WARN_LIMIT));

        // The handler clears the record on escalation; the next warn
        // starts from one again.
        assert!(ledger.clear(7));
        assert_eq!(ledger.register(7), 1);
    }
}
