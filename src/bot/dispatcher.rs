//! Message dispatcher setup.
//!
//! Builds the dispatcher with the command handlers and the message
//! observer.

use std::sync::Arc;

use teloxide::adaptors::Throttle;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::database::Database;
use crate::database::repository::{GroupSettingsRepo, MessageLogRepository, WarnsRepository};
use crate::events;
use crate::permissions::Permissions;
use crate::plugins;

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Permission checker (live admin lookups).
    pub permissions: Permissions,

    /// Per-chat settings repository.
    pub groups: Arc<GroupSettingsRepo>,

    /// Warn ledger repository.
    pub warns: Arc<WarnsRepository>,

    /// Message log repository.
    pub messages: Arc<MessageLogRepository>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(bot: ThrottledBot, db: &Database, owner_ids: Vec<u64>) -> Self {
        // Permissions needs the inner Bot for API calls
        let permissions = Permissions::with_owners(bot.inner().clone(), owner_ids);

        Self {
            permissions,
            groups: Arc::new(GroupSettingsRepo::new(db)),
            warns: Arc::new(WarnsRepository::new(db)),
            messages: Arc::new(MessageLogRepository::new(db)),
        }
    }
}

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(
    bot: ThrottledBot,
    db: &Database,
    owner_ids: Vec<u64>,
) -> Dispatcher<ThrottledBot, anyhow::Error, teloxide::dispatching::DefaultKey> {
    let state = AppState::new(bot.clone(), db, owner_ids);

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
///
/// Commands are tried first; group messages that no command consumed fall
/// through to the message observer, so every update is logged at most once.
fn schema() -> UpdateHandler<anyhow::Error> {
    use teloxide::dispatching::UpdateFilterExt;

    let message_handler = Update::filter_message()
        .branch(plugins::command_handler())
        .branch(events::message_event_handler());

    dptree::entry().branch(message_handler)
}
