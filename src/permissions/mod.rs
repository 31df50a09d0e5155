//! Permission system for checking user roles.
//!
//! Admin status is asked of the platform on every check rather than cached,
//! so promotions and demotions take effect on the very next command.

mod checker;

pub use checker::Permissions;
