//! /help command plugin.

use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::dispatcher::{AppState, ThrottledBot};

/// Handle the /help command.
pub async fn help_command(bot: ThrottledBot, msg: Message, _state: AppState) -> anyhow::Result<()> {
    let text = "<b>💤 Help: AFK</b>\n\n\
        While you are AFK, I notify anyone who mentions you in the group.\n\n\
        <b>Commands:</b>\n\
        • <code>/afk [reason]</code> - Set yourself as AFK with an optional reason\n\
        • <code>/brb [reason]</code> - Alias for /afk\n\n\
        <b>Examples:</b>\n\
        <code>/afk lunch</code>\n\
        <code>/brb in a meeting</code>\n\n\
        <b>Coming back:</b>\n\
        Just send any message in the group and your AFK status is removed.";

    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}
