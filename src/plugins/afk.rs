//! AFK command handlers.
//!
//! Sets the invoker's AFK status; clearing happens in the message
//! observer (`events::afk`).

use chrono::Local;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters};
use tracing::info;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::utils::user_mention;

/// Handle /afk command - set AFK status.
///
/// Usage: /afk [reason]
pub async fn afk_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
    reason: String,
) -> anyhow::Result<()> {
    let user = match msg.from.as_ref() {
        Some(u) => u,
        None => return Ok(()),
    };

    let reason = Some(reason.trim().to_string()).filter(|r| !r.is_empty());
    let mention = user_mention(user.id.0, &user.first_name);

    // Overwrites any existing entry, refreshing `since`
    let ack = state.afk.set_away(user.id.0, &mention, reason, Local::now());

    info!("User {} went AFK in chat {}", user.id.0, msg.chat.id);

    bot.send_message(msg.chat.id, ack)
        .parse_mode(ParseMode::Html)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    Ok(())
}

/// Handle /brb command - alias for /afk.
pub async fn brb_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
    reason: String,
) -> anyhow::Result<()> {
    afk_command(bot, msg, state, reason).await
}
