//! Target resolution for user commands.

use teloxide::types::{Message, User};

/// The author of the replied-to message, if the command was sent as a reply.
///
/// Moderation commands take their target exclusively from the reply; there is
/// no id or @username fallback.
pub fn reply_target(msg: &Message) -> Option<&User> {
    msg.reply_to_message().and_then(|reply| reply.from.as_ref())
}
