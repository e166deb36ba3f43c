//! Message dispatcher setup.
//!
//! Builds the dispatcher with the command handlers and the message
//! observer.

use std::sync::Arc;

use teloxide::adaptors::Throttle;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::afk::AfkService;
use crate::events;
use crate::plugins;
use crate::users::UserIndex;

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// AFK registry and notice logic.
    pub afk: Arc<AfkService>,

    /// Index of recently seen users, for @username resolution.
    pub users: Arc<UserIndex>,
}

impl AppState {
    /// Create a new application state.
    pub fn new() -> Self {
        Self {
            afk: Arc::new(AfkService::new()),
            users: Arc::new(UserIndex::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(
    bot: ThrottledBot,
) -> Dispatcher<ThrottledBot, anyhow::Error, teloxide::dispatching::DefaultKey> {
    let state = AppState::new();

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
///
/// Commands branch before the message observer, so a /afk invocation
/// is never also observed as activity that would clear the fresh
/// status.
fn schema() -> UpdateHandler<anyhow::Error> {
    use teloxide::dispatching::UpdateFilterExt;

    let message_handler = Update::filter_message()
        .inspect_async(track_user)
        .branch(plugins::command_handler())
        .branch(events::message_event_handler());

    dptree::entry().branch(message_handler)
}

/// Track the message author (runs before all handlers).
async fn track_user(msg: Message, state: AppState) {
    if let Some(user) = msg.from.as_ref() {
        state
            .users
            .record(user.id.0, &user.first_name, user.username.as_deref());
    }
}
