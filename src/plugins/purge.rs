//! Bulk message deletion commands.
//!
//! Both loops are best-effort: every id is attempted once, failures are
//! counted and logged but never reported to the chat.

use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId, ReplyParameters};
use tracing::{info, warn};

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::plugins::is_authorized;
use crate::utils::reply_target;

/// Handle /purge command - delete the inclusive id range from the
/// replied-to message down to the invoking command.
pub async fn purge_command(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    if !is_authorized(&msg, &state).await {
        return Ok(());
    }

    let Some(reply) = msg.reply_to_message() else {
        return Ok(());
    };

    let chat_id = msg.chat.id;
    let ids = range_ids(reply.id.0, msg.id.0);

    let (deleted, failed) = delete_each(&bot, chat_id, ids).await;

    if failed > 0 {
        warn!(
            "Purge in chat {} deleted {} messages, {} could not be deleted",
            chat_id, deleted, failed
        );
    } else {
        info!("Purge in chat {} deleted {} messages", chat_id, deleted);
    }

    Ok(())
}

/// Handle /delall command - delete every logged message of the target,
/// then drop the log rows.
pub async fn delall_command(
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
    let target_id = target.id;

    let chat_id = msg.chat.id;

    let ids = state.messages.user_message_ids(chat_id.0, target_id.0).await?;
    let (deleted, failed) = delete_each(&bot, chat_id, ids).await;

    state
        .messages
        .remove_user_entries(chat_id.0, target_id.0)
        .await?;

    if failed > 0 {
        warn!(
            "Delall for user {} in chat {} deleted {} messages, {} could not be deleted",
            target_id, chat_id, deleted, failed
        );
    }

    bot.send_message(chat_id, format!("Deleted {} logged messages.", deleted))
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    Ok(())
}

/// The inclusive id range from the replied-to message to the invoking
/// command. Empty when the reply is newer than the command.
fn range_ids(from: i32, to: i32) -> Vec<i32> {
    (from..=to).collect()
}

/// Attempt to delete each id, one request at a time.
/// Returns (deleted, failed); per-id failures are swallowed.
async fn delete_each(bot: &ThrottledBot, chat_id: ChatId, ids: Vec<i32>) -> (usize, usize) {
    let mut deleted = 0;
    let mut failed = 0;

    for id in ids {
        if bot.delete_message(chat_id, MessageId(id)).await.is_ok() {
            deleted += 1;
        } else {
            failed += 1;
        }
    }

    (deleted, failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive_on_both_ends() {
        assert_eq!(range_ids(5, 8), vec![5, 6, 7, 8]);
    }

    #[test]
    fn range_of_one_message() {
        assert_eq!(range_ids(9, 9), vec![9]);
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(range_ids(10, 4).is_empty());
    }
}
