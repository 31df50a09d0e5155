//! Explicit message-log commands.
//!
//! `/log` and `/message` push the invoking message into the per-chat log,
//! the same path every ordinary group message takes through the observer.

use teloxide::prelude::*;

use crate::bot::dispatcher::AppState;

/// Handle /log and /message - record the invoking message.
pub async fn log_command(msg: Message, state: AppState) -> anyhow::Result<()> {
    let Some(from) = msg.from.as_ref() else {
        return Ok(());
    };

    state
        .messages
        .append(msg.chat.id.0, from.id.0, msg.id.0)
        .await?;

    Ok(())
}
