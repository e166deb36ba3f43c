//! In-memory user index with dual-index caching.
//!
//! Tracks users the bot has seen so `@username` mentions can be
//! resolved to a user ID and display name:
//! - By user ID (primary)
//! - By username, lowercased (for @username resolution)
//!
//! Both indexes are bounded moka caches. Losing an entry only degrades
//! @username resolution for users the bot has not seen recently; it
//! never affects AFK state itself.

use std::time::Duration;

use moka::sync::Cache;

/// A user observed in an inbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenUser {
    pub user_id: u64,
    pub first_name: String,
    /// Lowercased username, if the account has one.
    pub username: Option<String>,
}

/// Bounded index of recently seen users.
#[derive(Clone)]
pub struct UserIndex {
    by_id: Cache<u64, SeenUser>,
    by_username: Cache<String, u64>,
}

impl UserIndex {
    pub fn new() -> Self {
        Self {
            by_id: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(3600))
                .build(),
            // Shorter TTL: usernames can change out from under us
            by_username: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(1800))
                .build(),
        }
    }

    /// Record a message author. Called for every inbound message,
    /// before any handler runs.
    pub fn record(&self, user_id: u64, first_name: &str, username: Option<&str>) {
        let username = username.map(|u| u.to_lowercase());

        // Drop a stale username mapping if the user renamed
        if let Some(cached) = self.by_id.get(&user_id)
            && let Some(old_username) = &cached.username
            && Some(old_username) != username.as_ref()
        {
            self.by_username.invalidate(old_username);
        }

        if let Some(username) = &username {
            self.by_username.insert(username.clone(), user_id);
        }
        self.by_id.insert(
            user_id,
            SeenUser {
                user_id,
                first_name: first_name.to_string(),
                username,
            },
        );
    }

    /// Look up a user by ID.
    #[allow(dead_code)]
    pub fn get_by_id(&self, user_id: u64) -> Option<SeenUser> {
        self.by_id.get(&user_id)
    }

    /// Resolve a `@username` mention (case-insensitive, leading `@`
    /// tolerated) to a seen user.
    pub fn resolve_username(&self, username: &str) -> Option<SeenUser> {
        let username = username.trim_start_matches('@').to_lowercase();
        let user_id = self.by_username.get(&username)?;
        self.by_id.get(&user_id)
    }
}

impl Default for UserIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_resolve() {
        let index = UserIndex::new();
        index.record(1, "Alice", Some("alice_w"));

        let user = index.resolve_username("alice_w").unwrap();
        assert_eq!(user.user_id, 1);
        assert_eq!(user.first_name, "Alice");
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        let index = UserIndex::new();
        index.record(1, "Alice", Some("Alice_W"));

        assert!(index.resolve_username("@ALICE_w").is_some());
        assert!(index.resolve_username("alice_w").is_some());
    }

    #[test]
    fn test_unknown_username_is_none() {
        let index = UserIndex::new();
        assert_eq!(index.resolve_username("nobody"), None);
    }

    #[test]
    fn test_rename_invalidates_old_username() {
        let index = UserIndex::new();
        index.record(1, "Alice", Some("alice"));
        index.record(1, "Alice", Some("wonderland"));

        assert_eq!(index.resolve_username("alice"), None);
        assert_eq!(index.resolve_username("wonderland").unwrap().user_id, 1);
    }

    #[test]
    fn test_user_without_username() {
        let index = UserIndex::new();
        index.record(2, "Bob", None);

        assert_eq!(index.get_by_id(2).unwrap().first_name, "Bob");
        assert_eq!(index.resolve_username("bob"), None);
    }
}
