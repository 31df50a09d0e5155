//! Message log repository.
//!
//! Append-heavy and rarely read, so unlike the other repositories this one
//! talks straight to the collection without a cache in front.

use anyhow::Result;
use futures::StreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use mongodb::options::FindOptions;
use tracing::debug;

use crate::database::Database;
use crate::database::models::MessageLogEntry;

/// Repository for the per-chat message log.
pub struct MessageLogRepository {
    collection: Collection<MessageLogEntry>,
}

impl MessageLogRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("messages"),
        }
    }

    /// Record one message for a user in a chat.
    pub async fn append(&self, chat_id: i64, user_id: u64, message_id: i32) -> Result<()> {
        let entry = MessageLogEntry::new(chat_id, user_id, message_id);
        self.collection.insert_one(&entry).await?;
        Ok(())
    }

    /// All logged message ids for a user in a chat, in insertion order.
    pub async fn user_message_ids(&self, chat_id: i64, user_id: u64) -> Result<Vec<i32>> {
        let filter = doc! { "chat_id": chat_id, "user_id": user_id as i64 };
        let options = FindOptions::builder()
            .projection(doc! { "message_id": 1, "_id": 0 })
            .build();

        let raw_coll = self.collection.clone_with_type::<Document>();
        let mut cursor = raw_coll.find(filter).with_options(options).await?;

        let mut ids = Vec::new();
        while let Some(result) = cursor.next().await {
            if let Ok(doc) = result {
                if let Ok(id) = doc.get_i32("message_id") {
                    ids.push(id);
                }
            }
        }

        Ok(ids)
    }

    /// Drop every log entry for a user in a chat. Returns how many went away.
    pub async fn remove_user_entries(&self, chat_id: i64, user_id: u64) -> Result<u64> {
        let filter = doc! { "chat_id": chat_id, "user_id": user_id as i64 };
        let result = self.collection.delete_many(filter).await?;

        debug!(
            "Removed {} log entries for user {} in chat {}",
            result.deleted_count, user_id, chat_id
        );

        Ok(result.deleted_count)
    }

    /// Distinct users with at least one logged message in a chat.
    pub async fn distinct_users(&self, chat_id: i64) -> Result<Vec<u64>> {
        let filter = doc! { "chat_id": chat_id };
        let values = self.collection.distinct("user_id", filter).await?;

        Ok(values
            .iter()
            .filter_map(|v| v.as_i64())
            .map(|id| id as u64)
            .collect())
    }
}
