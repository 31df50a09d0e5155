//! Message log observer.
//!
//! Records (chat, user, message id) for every group message that reaches
//! it. The log feeds /delall, /tagall and /stats.

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::debug;

use crate::bot::dispatcher::AppState;

/// Build the message observer handler.
pub fn message_event_handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter(|msg: Message| msg.chat.is_group() || msg.chat.is_supergroup())
        .endpoint(observe_message)
}

/// Append one log entry for an observed group message.
async fn observe_message(msg: Message, state: AppState) -> anyhow::Result<()> {
    let Some(from) = msg.from.as_ref() else {
        return Ok(());
    };

    debug!(
        "Logging message {} from user {} in chat {}",
        msg.id, from.id, msg.chat.id
    );

    state
        .messages
        .append(msg.chat.id.0, from.id.0, msg.id.0)
        .await?;

    Ok(())
}
