//! Utility functions.

/// Escape special characters for Telegram HTML parse mode.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Build a clickable HTML mention for a user.
pub fn user_mention(user_id: u64, first_name: &str) -> String {
    format!(
        "<a href=\"tg://user?id={}\">{}</a>",
        user_id,
        html_escape(first_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_user_mention_escapes_name() {
        assert_eq!(
            user_mention(42, "A<b>"),
            "<a href=\"tg://user?id=42\">A&lt;b&gt;</a>"
        );
    }
}
