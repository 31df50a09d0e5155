//! Message log model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One observed message, stored append-only in the `messages` collection.
///
/// Read back to drive per-user bulk deletion and the tag-all sweep;
/// a user's entries are removed after a successful delete-all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLogEntry {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Telegram chat ID (indexed)
    pub chat_id: i64,

    /// Author of the message.
    pub user_id: u64,

    /// Telegram message ID, unique only within its chat.
    pub message_id: i32,
}

impl MessageLogEntry {
    /// Create a log entry for one message.
    pub fn new(chat_id: i64, user_id: u64, message_id: i32) -> Self {
        Self {
            id: None,
            chat_id,
            user_id,
            message_id,
        }
    }
}
