//! Warn ledger model.
//!
//! One document per chat in the `warns` collection; per-user counters are
//! embedded records. A record exists only while its user holds at least
//! one warn: clearing (or escalating) removes the record outright, so the
//! next warn starts again at 1.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A user's warn counter within one chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarnRecord {
    /// Telegram user ID
    pub user_id: u64,

    /// Warns accumulated since the last reset.
    pub count: u32,
}

/// Warn counters for a chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarnLedger {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Telegram chat ID (indexed)
    pub chat_id: i64,

    /// Per-user counters; absence means zero warns.
    #[serde(default)]
    pub records: Vec<WarnRecord>,
}

impl WarnLedger {
    /// Create an empty ledger for a chat.
    pub fn new(chat_id: i64) -> Self {
        Self {
            id: None,
            chat_id,
            records: Vec::new(),
        }
    }

    /// Increment a user's counter, creating the record on the first warn.
    /// Returns the new count.
    pub fn register(&mut self, user_id: u64) -> u32 {
        if let Some(record) = self.records.iter_mut().find(|r| r.user_id == user_id) {
            record.count += 1;
            record.count
        } else {
            self.records.push(WarnRecord { user_id, count: 1 });
            1
        }
    }

    /// Drop a user's record entirely. Returns whether one existed.
    pub fn clear(&mut self, user_id: u64) -> bool {
        if let Some(idx) = self.records.iter().position(|r| r.user_id == user_id) {
            self.records.remove(idx);
            true
        } else {
            false
        }
    }

    /// Current count for a user, 0 when no record exists.
    pub fn count(&self, user_id: u64) -> u32 {
        self.records
            .iter()
            .find(|r| r.user_id == user_id)
            .map(|r| r.count)
            .unwrap_or(0)
    }

    /// Number of users currently holding at least one warn.
    pub fn warned_users(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_counts_up_from_one() {
        let mut ledger = WarnLedger::new(100);
        assert_eq!(ledger.register(7), 1);
        assert_eq!(ledger.register(7), 2);
        assert_eq!(ledger.register(7), 3);
        assert_eq!(ledger.count(7), 3);
    }

    #[test]
    fn counters_are_scoped_per_user() {
        let mut ledger = WarnLedger::new(100);
        ledger.register(7);
        ledger.register(7);
        assert_eq!(ledger.register(8), 1);
        assert_eq!(ledger.count(7), 2);
        assert_eq!(ledger.count(8), 1);
    }

    #[test]
    fn clear_removes_the_record() {
        let mut ledger = WarnLedger::new(100);
        ledger.register(7);
        ledger.register(7);

        assert!(ledger.clear(7));
        assert_eq!(ledger.count(7), 0);
        assert_eq!(ledger.warned_users(), 0);

        // Idempotent: clearing an absent record is a no-op.
        assert!(!ledger.clear(7));
    }

    #[test]
    fn register_after_clear_starts_over() {
        let mut ledger = WarnLedger::new(100);
        ledger.register(7);
        ledger.register(7);
        ledger.clear(7);

        // Full reset, not a decrement.
        assert_eq!(ledger.register(7), 1);
    }

    #[test]
    fn warned_users_counts_users_not_warns() {
        let mut ledger = WarnLedger::new(100);
        ledger.register(1);
        ledger.register(1);
        ledger.register(1);
        ledger.register(2);
        assert_eq!(ledger.warned_users(), 2);
    }
}
