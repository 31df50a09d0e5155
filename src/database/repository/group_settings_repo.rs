//! Group settings repository with write-through caching.
//!
//! Settings are read on every warn and written rarely, so a medium TTL
//! keeps the hot path off the database.

use std::time::Duration;

use anyhow::Result;
use mongodb::Collection;
use mongodb::bson::doc;
use tracing::debug;

use crate::cache::{CacheConfig, TypedCache};
use crate::database::Database;
use crate::database::models::GroupSettings;

/// Repository for per-chat settings.
pub struct GroupSettingsRepo {
    collection: Collection<GroupSettings>,
    cache: TypedCache<i64, GroupSettings>,
}

impl GroupSettingsRepo {
    pub fn new(db: &Database) -> Self {
        let cache = TypedCache::new(
            "group_settings",
            CacheConfig::with_capacity(2_000).ttl(Duration::from_secs(300)),
        );

        Self {
            collection: db.collection("groups"),
            cache,
        }
    }

    /// Get settings, returning None if the chat has none yet.
    pub async fn get(&self, chat_id: i64) -> Result<Option<GroupSettings>> {
        if let Some(settings) = self.cache.get(&chat_id) {
            return Ok(Some(settings));
        }

        let filter = doc! { "chat_id": chat_id };
        let result = self.collection.find_one(filter).await?;

        if let Some(s) = &result {
            self.cache.insert(chat_id, s.clone());
        }

        Ok(result)
    }

    /// Get settings, materializing a document with defaults on first read.
    pub async fn get_or_create(&self, chat_id: i64) -> Result<GroupSettings> {
        if let Some(settings) = self.get(chat_id).await? {
            return Ok(settings);
        }

        let settings = GroupSettings::new(chat_id);
        self.save(&settings).await?;
        Ok(settings)
    }

    /// Save settings (upsert).
    pub async fn save(&self, settings: &GroupSettings) -> Result<()> {
        let filter = doc! { "chat_id": settings.chat_id };
        let options = mongodb::options::ReplaceOptions::builder()
            .upsert(true)
            .build();

        self.collection
            .replace_one(filter, settings)
            .with_options(options)
            .await?;

        self.cache.insert(settings.chat_id, settings.clone());
        debug!("Saved GroupSettings for chat {}", settings.chat_id);

        Ok(())
    }

    /// The warn limit in effect for a chat; creates the settings document
    /// with the default limit when none exists.
    pub async fn effective_warn_limit(&self, chat_id: i64) -> Result<u32> {
        Ok(self.get_or_create(chat_id).await?.warn_limit)
    }

    /// Overwrite the warn limit for a chat.
    pub async fn set_warn_limit(&self, chat_id: i64, limit: u32) -> Result<()> {
        let mut settings = self.get_or_create(chat_id).await?;
        settings.warn_limit = limit;
        self.save(&settings).await
    }
}
