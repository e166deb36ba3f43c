//! AFK service - decision layer over the registry.
//!
//! Takes lightweight views of inbound messages and returns the notice
//! texts to send to the chat of origin, in send order. Knows nothing
//! about Telegram types, so the whole event contract is testable
//! without a bot.

use chrono::{DateTime, Local};

use super::notice;
use super::{AfkEntry, AfkRegistry};
use crate::utils::html_escape;

/// Reason stored when the user supplies none.
const DEFAULT_REASON: &str = "AFK";

/// View of a message author.
pub struct MessageAuthor {
    pub id: u64,
    /// Pre-rendered mention token (HTML link or @username).
    pub mention: String,
    pub is_bot: bool,
}

/// View of one mention occurrence inside a message, in message order.
pub struct MentionedUser {
    pub id: u64,
    pub display_name: String,
}

/// The AFK subsystem. One instance per bot process; tests hold their own.
#[derive(Debug, Default)]
pub struct AfkService {
    registry: AfkRegistry,
}

impl AfkService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle the /afk command: overwrite the invoker's entry and
    /// return the acknowledgement text.
    pub fn set_away(
        &self,
        user_id: u64,
        mention: &str,
        reason: Option<String>,
        now: DateTime<Local>,
    ) -> String {
        let reason = reason.unwrap_or_else(|| DEFAULT_REASON.to_string());
        self.registry.set(user_id, reason.clone(), now);
        notice::acknowledgement(mention, &html_escape(&reason))
    }

    /// Handle one inbound chat message.
    ///
    /// Order matters: the author's own entry is removed before the
    /// mention scan runs, so a self-mention in the clearing message
    /// never produces a mention notice. Mention notices come out in
    /// message order, one per occurrence.
    pub fn observe(&self, author: &MessageAuthor, mentions: &[MentionedUser]) -> Vec<String> {
        if author.is_bot {
            return Vec::new();
        }

        let mut notices = Vec::new();

        if let Some(entry) = self.registry.remove(author.id) {
            notices.push(notice::welcome_back(&author.mention, &entry));
        }

        for mentioned in mentions {
            if let Some(entry) = self.registry.get(mentioned.id) {
                // Escape at render time; the registry keeps raw text
                let escaped = AfkEntry {
                    reason: html_escape(&entry.reason),
                    since: entry.since,
                };
                notices.push(notice::mention_notice(
                    &html_escape(&mentioned.display_name),
                    &escaped,
                ));
            }
        }

        notices
    }

    /// Whether a user currently has an AFK entry.
    #[allow(dead_code)]
    pub fn is_away(&self, user_id: u64) -> bool {
        self.registry.get(user_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 15, h, m, s).unwrap()
    }

    fn author(id: u64, mention: &str) -> MessageAuthor {
        MessageAuthor {
            id,
            mention: mention.to_string(),
            is_bot: false,
        }
    }

    fn bot_author(id: u64) -> MessageAuthor {
        MessageAuthor {
            id,
            mention: "@somebot".to_string(),
            is_bot: true,
        }
    }

    fn mention(id: u64, name: &str) -> MentionedUser {
        MentionedUser {
            id,
            display_name: name.to_string(),
        }
    }

    #[test]
    fn test_afk_default_reason_and_ack() {
        let service = AfkService::new();
        let ack = service.set_away(1, "@Alice", None, at(9, 0, 0));

        assert_eq!(ack, "✅ @Alice, I set your AFK: AFK");
        assert!(service.is_away(1));
    }

    #[test]
    fn test_mention_of_afk_user_notifies() {
        let service = AfkService::new();
        service.set_away(1, "@Alice", None, at(9, 0, 0));

        // Bob posts "hey @Alice"
        let out = service.observe(&author(2, "@Bob"), &[mention(1, "Alice")]);
        assert_eq!(out, vec!["💤 Alice is AFK (since 09:00:00): AFK"]);

        // A mention does not clear the status
        assert!(service.is_away(1));
    }

    #[test]
    fn test_own_message_clears_and_welcomes_back() {
        let service = AfkService::new();
        service.set_away(1, "@Alice", None, at(9, 0, 0));

        let out = service.observe(&author(1, "@Alice"), &[]);
        assert_eq!(
            out,
            vec!["👋 Welcome back @Alice, I removed your AFK (since 09:00:00)."]
        );
        assert!(!service.is_away(1));

        // A second message is silent
        assert!(service.observe(&author(1, "@Alice"), &[]).is_empty());
    }

    #[test]
    fn test_reinvoking_replaces_reason_and_since() {
        let service = AfkService::new();
        service.set_away(3, "@Carol", Some("lunch".into()), at(12, 30, 45));
        service.set_away(3, "@Carol", Some("meeting".into()), at(12, 45, 10));

        let out = service.observe(&author(4, "@Dan"), &[mention(3, "Carol")]);
        assert_eq!(out, vec!["💤 Carol is AFK (since 12:45:10): meeting"]);
    }

    #[test]
    fn test_bot_authors_are_ignored() {
        let service = AfkService::new();
        service.set_away(5, "@Eve", None, at(9, 0, 0));

        // A bot account mentions Eve: no output, no state change
        let out = service.observe(&bot_author(99), &[mention(5, "Eve")]);
        assert!(out.is_empty());
        assert!(service.is_away(5));

        // Even if the bot itself were marked AFK, its messages change nothing
        service.set_away(99, "@somebot", None, at(9, 0, 0));
        assert!(service.observe(&bot_author(99), &[]).is_empty());
        assert!(service.is_away(99));
    }

    #[test]
    fn test_self_mention_in_clearing_message() {
        let service = AfkService::new();
        service.set_away(6, "@Frank", None, at(9, 0, 0));

        // Frank posts a message mentioning himself: the clear runs
        // first, so no mention notice follows
        let out = service.observe(&author(6, "@Frank"), &[mention(6, "Frank")]);
        assert_eq!(
            out,
            vec!["👋 Welcome back @Frank, I removed your AFK (since 09:00:00)."]
        );
    }

    #[test]
    fn test_mention_of_non_afk_user_is_silent() {
        let service = AfkService::new();
        let out = service.observe(&author(1, "@Alice"), &[mention(2, "Bob")]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_duplicate_mentions_notify_per_occurrence() {
        let service = AfkService::new();
        service.set_away(1, "@Alice", None, at(9, 0, 0));

        let out = service.observe(
            &author(2, "@Bob"),
            &[mention(1, "Alice"), mention(1, "Alice")],
        );
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], out[1]);
    }

    #[test]
    fn test_afk_author_mentioning_other_afk_users() {
        let service = AfkService::new();
        service.set_away(1, "@Alice", None, at(9, 0, 0));
        service.set_away(2, "@Bob", Some("gym".into()), at(10, 15, 0));

        // Alice comes back with a message that mentions Bob: she is
        // cleared, Bob still gets announced, welcome-back first
        let out = service.observe(&author(1, "@Alice"), &[mention(2, "Bob")]);
        assert_eq!(
            out,
            vec![
                "👋 Welcome back @Alice, I removed your AFK (since 09:00:00).",
                "💤 Bob is AFK (since 10:15:00): gym",
            ]
        );
        assert!(!service.is_away(1));
        assert!(service.is_away(2));
    }

    #[test]
    fn test_mentions_notified_in_message_order() {
        let service = AfkService::new();
        service.set_away(1, "@Alice", None, at(9, 0, 0));
        service.set_away(2, "@Bob", None, at(10, 0, 0));

        let out = service.observe(
            &author(3, "@Carol"),
            &[mention(2, "Bob"), mention(1, "Alice")],
        );
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("💤 Bob"));
        assert!(out[1].starts_with("💤 Alice"));
    }

    #[test]
    fn test_reason_is_html_escaped_in_notices() {
        let service = AfkService::new();
        let ack = service.set_away(1, "@Alice", Some("<brb>".into()), at(9, 0, 0));
        assert_eq!(ack, "✅ @Alice, I set your AFK: &lt;brb&gt;");

        let out = service.observe(&author(2, "@Bob"), &[mention(1, "A & B")]);
        assert_eq!(
            out,
            vec!["💤 A &amp; B is AFK (since 09:00:00): &lt;brb&gt;"]
        );
    }
}
