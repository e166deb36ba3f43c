//! Event handler system.
//!
//! Add new event handlers by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_event;` below
//! 3. Adding the handler to `unified_message_handler()`

pub mod afk;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::error;

use crate::bot::dispatcher::{AppState, ThrottledBot};

/// Build the message event handler.
///
/// Runs for every non-command group message that reached this branch.
pub fn message_event_handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter(|msg: Message| msg.chat.is_group() || msg.chat.is_supergroup())
        .endpoint(unified_message_handler)
}

/// Unified message handler that runs all sub-handlers.
///
/// Each handler runs independently; a send failure is logged and
/// swallowed here so it neither stops other handlers nor rolls back
/// state a handler already committed.
async fn unified_message_handler(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    if let Err(e) = afk::afk_handler(bot, msg, state).await {
        error!("AFK handler error: {}", e);
    }

    Ok(())
}
