//! Warn ledger repository with write-through caching.

use std::time::Duration;

use anyhow::Result;
use mongodb::Collection;
use mongodb::bson::doc;
use tracing::debug;

use crate::cache::{CacheConfig, TypedCache};
use crate::database::Database;
use crate::database::models::WarnLedger;

/// Repository for per-chat warn ledgers.
pub struct WarnsRepository {
    collection: Collection<WarnLedger>,
    cache: TypedCache<i64, WarnLedger>,
}

impl WarnsRepository {
    pub fn new(db: &Database) -> Self {
        let cache = TypedCache::new(
            "warns",
            CacheConfig::with_capacity(2_000).ttl(Duration::from_secs(300)),
        );

        Self {
            collection: db.collection("warns"),
            cache,
        }
    }

    /// Get the ledger for a chat, returning None if nobody was ever warned.
    pub async fn get(&self, chat_id: i64) -> Result<Option<WarnLedger>> {
        if let Some(ledger) = self.cache.get(&chat_id) {
            return Ok(Some(ledger));
        }

        let filter = doc! { "chat_id": chat_id };
        let result = self.collection.find_one(filter).await?;

        if let Some(l) = &result {
            self.cache.insert(chat_id, l.clone());
        }

        Ok(result)
    }

    async fn get_or_create(&self, chat_id: i64) -> Result<WarnLedger> {
        if let Some(ledger) = self.get(chat_id).await? {
            return Ok(ledger);
        }

        Ok(WarnLedger::new(chat_id))
    }

    /// Save a ledger (upsert).
    pub async fn save(&self, ledger: &WarnLedger) -> Result<()> {
        let filter = doc! { "chat_id": ledger.chat_id };
        let options = mongodb::options::ReplaceOptions::builder()
            .upsert(true)
            .build();

        self.collection
            .replace_one(filter, ledger)
            .with_options(options)
            .await?;

        self.cache.insert(ledger.chat_id, ledger.clone());
        debug!("Saved WarnLedger for chat {}", ledger.chat_id);

        Ok(())
    }

    /// Increment the warn counter for a user and return the new count.
    pub async fn register_warn(&self, chat_id: i64, user_id: u64) -> Result<u32> {
        let mut ledger = self.get_or_create(chat_id).await?;
        let count = ledger.register(user_id);
        self.save(&ledger).await?;
        Ok(count)
    }

    /// Drop the warn counter for a user. Returns whether a record existed.
    pub async fn clear_warns(&self, chat_id: i64, user_id: u64) -> Result<bool> {
        let mut ledger = self.get_or_create(chat_id).await?;
        let removed = ledger.clear(user_id);

        if removed {
            self.save(&ledger).await?;
        }

        Ok(removed)
    }

    /// Number of users currently holding at least one warn in a chat.
    pub async fn warned_user_count(&self, chat_id: i64) -> Result<usize> {
        Ok(self
            .get(chat_id)
            .await?
            .map(|ledger| ledger.warned_users())
            .unwrap_or(0))
    }
}
