//! In-memory AFK registry.
//!
//! Maps user IDs to their AFK entry. A user is AFK iff they have an
//! entry here. Nothing is persisted; a restart clears all statuses.

use std::collections::HashMap;

use chrono::{DateTime, Local};
use parking_lot::Mutex;

/// A single AFK status.
#[derive(Debug, Clone, PartialEq)]
pub struct AfkEntry {
    /// Free-form reason text ("AFK" when the user gave none).
    pub reason: String,

    /// When the status was set. Fixed at insertion; replacing the
    /// entry discards the old value.
    pub since: DateTime<Local>,
}

/// Registry of currently-AFK users, keyed by Telegram user ID.
///
/// The tokio runtime dispatches handlers on multiple threads, so the
/// map sits behind a mutex. Every operation holds the lock for the
/// whole read-modify-write, which makes `remove` an atomic
/// test-and-delete.
#[derive(Debug, Default)]
pub struct AfkRegistry {
    entries: Mutex<HashMap<u64, AfkEntry>>,
}

impl AfkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for a user.
    ///
    /// Returns the previous entry, if any.
    pub fn set(&self, user_id: u64, reason: String, now: DateTime<Local>) -> Option<AfkEntry> {
        self.entries
            .lock()
            .insert(user_id, AfkEntry { reason, since: now })
    }

    /// Look up a user's entry without changing it.
    pub fn get(&self, user_id: u64) -> Option<AfkEntry> {
        self.entries.lock().get(&user_id).cloned()
    }

    /// Remove a user's entry, returning it if one was present.
    pub fn remove(&self, user_id: u64) -> Option<AfkEntry> {
        self.entries.lock().remove(&user_id)
    }
}
