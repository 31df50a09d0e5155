//! Event handler system.
//!
//! Handlers here observe group messages that no command consumed.

mod logger;

pub use logger::message_event_handler;
