//! /start command plugin.

use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::dispatcher::{AppState, ThrottledBot};

/// Handle the /start command.
pub async fn start_command(
    bot: ThrottledBot,
    msg: Message,
    _state: AppState,
) -> anyhow::Result<()> {
    let text = "<b>Hello!</b> 👋\n\n\
        I'm <b>Hypnos</b>, an AFK bot for groups.\n\n\
        Mark yourself away with /afk and I'll let people know when they \
        mention you. Your next message brings you back.\n\n\
        Use /help for details.";

    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}
