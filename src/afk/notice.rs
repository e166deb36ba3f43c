//! Notice text templates.
//!
//! The exact wording (emoji included) is part of the user-visible
//! contract. Timestamps render as 24-hour `HH:MM:SS` in the process
//! local time zone, no date component.

use chrono::{DateTime, Local};

use super::AfkEntry;

/// Render an entry's `since` timestamp.
pub fn format_since(since: DateTime<Local>) -> String {
    since.format("%H:%M:%S").to_string()
}

/// Sent when an AFK user posts a message and their status is cleared.
pub fn welcome_back(mention: &str, entry: &AfkEntry) -> String {
    format!(
        "👋 Welcome back {}, I removed your AFK (since {}).",
        mention,
        format_since(entry.since)
    )
}

/// Sent when a message mentions a user who is currently AFK.
pub fn mention_notice(display_name: &str, entry: &AfkEntry) -> String {
    format!(
        "💤 {} is AFK (since {}): {}",
        display_name,
        format_since(entry.since),
        entry.reason
    )
}

/// Sent as confirmation to the /afk invoker.
pub fn acknowledgement(mention: &str, reason: &str) -> String {
    format!("✅ {}, I set your AFK: {}", mention, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(reason: &str, h: u32, m: u32, s: u32) -> AfkEntry {
        AfkEntry {
            reason: reason.to_string(),
            since: Local.with_ymd_and_hms(2025, 1, 15, h, m, s).unwrap(),
        }
    }

    #[test]
    fn test_format_since_zero_pads() {
        let e = entry("AFK", 9, 5, 7);
        assert_eq!(format_since(e.since), "09:05:07");
    }

    #[test]
    fn test_welcome_back_template() {
        let e = entry("AFK", 9, 0, 0);
        assert_eq!(
            welcome_back("@Alice", &e),
            "👋 Welcome back @Alice, I removed your AFK (since 09:00:00)."
        );
    }

    #[test]
    fn test_mention_notice_template() {
        let e = entry("lunch", 12, 30, 45);
        assert_eq!(
            mention_notice("Carol", &e),
            "💤 Carol is AFK (since 12:30:45): lunch"
        );
    }

    #[test]
    fn test_acknowledgement_template() {
        assert_eq!(
            acknowledgement("@Alice", "AFK"),
            "✅ @Alice, I set your AFK: AFK"
        );
    }
}
