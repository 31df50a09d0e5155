//! Utility functions.
//!
//! Collection of helper functions used across the bot.

mod target;

pub use target::reply_target;

/// Escape special characters for HTML messages.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Format a username for display.
///
/// If the user has a username, returns @username.
/// Otherwise, returns the first name.
pub fn format_username(username: Option<&str>, first_name: &str) -> String {
    match username {
        Some(u) => format!("@{}", u),
        None => first_name.to_string(),
    }
}

/// Clickable HTML mention of a user by display text.
pub fn mention(user_id: u64, text: &str) -> String {
    format!("<a href=\"tg://user?id={}\">{}</a>", user_id, html_escape(text))
}

/// Render user ids as compact clickable mention dots, at most `cap` of them.
///
/// Used for mass tags, where a wall of names would dwarf the notification
/// value; each link still pings its user.
pub fn mention_links(user_ids: &[u64], cap: usize) -> String {
    user_ids
        .iter()
        .take(cap)
        .map(|id| format!("<a href=\"tg://user?id={}\">•</a>", id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escape_handles_all_specials() {
        assert_eq!(html_escape("a<b>&c"), "a&lt;b&gt;&amp;c");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn format_username_prefers_handle() {
        assert_eq!(format_username(Some("alice"), "Alice"), "@alice");
        assert_eq!(format_username(None, "Alice"), "Alice");
    }

    #[test]
    fn mention_escapes_display_text() {
        assert_eq!(
            mention(42, "<Bob>"),
            "<a href=\"tg://user?id=42\">&lt;Bob&gt;</a>"
        );
    }

    #[test]
    fn mention_links_caps_the_list() {
        let ids: Vec<u64> = (1..=45).collect();
        let text = mention_links(&ids, 30);

        assert_eq!(text.matches("tg://user?id=").count(), 30);
        assert!(text.contains("tg://user?id=30"));
        assert!(!text.contains("tg://user?id=31"));
    }

    #[test]
    fn mention_links_short_list_is_not_padded() {
        let ids: Vec<u64> = vec![7, 8];
        let text = mention_links(&ids, 30);

        assert_eq!(text.matches("tg://user?id=").count(), 2);
    }
}
