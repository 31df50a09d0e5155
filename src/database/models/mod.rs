//! Database model exports.

pub mod group;
pub mod message_log;
pub mod warn;

pub use group::{DEFAULT_WARN_LIMIT, GroupSettings};
pub use message_log::MessageLogEntry;
pub use warn::{WarnLedger, WarnRecord};
