//! Live permission checks.

use teloxide::prelude::*;
use teloxide::types::{ChatId, ChatMemberKind, UserId};
use tracing::debug;

/// Admin gate for moderation commands.
///
/// Bot owners (from OWNER_IDS env) automatically bypass all permission checks.
/// Everyone else is resolved against the platform on every call, so a demoted
/// admin loses access with the next command rather than after a cache expiry.
#[derive(Clone)]
pub struct Permissions {
    bot: Bot,
    /// Bot owner IDs - these users pass every check in every chat.
    owner_ids: Vec<u64>,
}

impl Permissions {
    /// Create a new permission checker with bot owner IDs.
    pub fn with_owners(bot: Bot, owner_ids: Vec<u64>) -> Self {
        Self { bot, owner_ids }
    }

    /// Check if a user is a bot owner.
    #[inline]
    pub fn is_bot_owner(&self, user_id: UserId) -> bool {
        self.owner_ids.contains(&user_id.0)
    }

    /// Check if a user is an admin (including the chat owner).
    /// Bot owners always return true.
    pub async fn is_admin(&self, chat_id: ChatId, user_id: UserId) -> anyhow::Result<bool> {
        if self.is_bot_owner(user_id) {
            debug!("User {} is bot owner, granting all permissions", user_id);
            return Ok(true);
        }

        let member = self.bot.get_chat_member(chat_id, user_id).await?;

        Ok(matches!(
            member.kind,
            ChatMemberKind::Owner(_) | ChatMemberKind::Administrator(_)
        ))
    }
}
