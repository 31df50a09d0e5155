//! Group settings model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Warn limit applied to chats that never configured one.
pub const DEFAULT_WARN_LIMIT: u32 = 3;

/// Per-chat moderation settings, one document in the `groups` collection.
///
/// Materialized lazily: the first read for an unknown chat writes a
/// document carrying the defaults. Never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSettings {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Telegram chat ID (indexed)
    pub chat_id: i64,

    /// Warns tolerated before the warn command escalates to a ban.
    #[serde(default = "default_warn_limit")]
    pub warn_limit: u32,
}

fn default_warn_limit() -> u32 {
    DEFAULT_WARN_LIMIT
}

impl GroupSettings {
    /// Create settings for a chat with the default warn limit.
    pub fn new(chat_id: i64) -> Self {
        Self {
            id: None,
            chat_id,
            warn_limit: DEFAULT_WARN_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_settings_carry_default_limit() {
        let settings = GroupSettings::new(100);
        assert_eq!(settings.chat_id, 100);
        assert_eq!(settings.warn_limit, DEFAULT_WARN_LIMIT);
        assert_eq!(settings.warn_limit, 3);
    }

    #[test]
    fn missing_limit_field_falls_back_to_default() {
        // Documents written before the field existed deserialize with the
        // default limit instead of failing.
        let doc = mongodb::bson::doc! { "chat_id": 100_i64 };
        let settings: GroupSettings = mongodb::bson::from_document(doc).unwrap();

        assert_eq!(settings.warn_limit, DEFAULT_WARN_LIMIT);
    }
}
