//! AFK subsystem.
//!
//! Holds the in-memory AFK registry and the transport-independent
//! service layer that decides which notices a message produces.
//! Telegram wiring lives in `plugins::afk` (command) and `events::afk`
//! (message observer).

mod notice;
mod registry;
mod service;

pub use registry::{AfkEntry, AfkRegistry};
pub use service::{AfkService, MentionedUser, MessageAuthor};
