//! AFK message observer.
//!
//! Watches group messages for two things: an AFK author coming back
//! (clear + welcome), and mentions of AFK users (notice per mention).
//! The decisions live in [`AfkService`]; this file only translates
//! Telegram messages into service views and sends the results.

use teloxide::prelude::*;
use teloxide::types::{MessageEntityKind, ParseMode};
use tracing::info;

use crate::afk::{MentionedUser, MessageAuthor};
use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::users::UserIndex;
use crate::utils::user_mention;

/// Observe one inbound group message.
pub async fn afk_handler(bot: ThrottledBot, msg: Message, state: AppState) -> anyhow::Result<()> {
    let user = match msg.from.as_ref() {
        Some(u) => u,
        None => return Ok(()),
    };

    let author = MessageAuthor {
        id: user.id.0,
        mention: user_mention(user.id.0, &user.first_name),
        is_bot: user.is_bot,
    };
    let mentions = collect_mentions(&msg, &state.users);

    let notices = state.afk.observe(&author, &mentions);
    if !notices.is_empty() {
        info!(
            "AFK observer: {} notice(s) for message from {} in chat {}",
            notices.len(),
            author.id,
            msg.chat.id
        );
    }

    for text in notices {
        bot.send_message(msg.chat.id, text)
            .parse_mode(ParseMode::Html)
            .disable_notification(true)
            .await?;
    }

    Ok(())
}

/// Extract mentioned users from message entities, in message order.
///
/// `TextMention` entities carry the user inline; `@username` mentions
/// are resolved through the user index and skipped when unknown.
fn collect_mentions(msg: &Message, users: &UserIndex) -> Vec<MentionedUser> {
    let mut mentions = Vec::new();

    let text = msg.text().unwrap_or("");
    let Some(entities) = msg.entities() else {
        return mentions;
    };

    for entity in entities {
        match &entity.kind {
            // Clickable name (users without a username)
            MessageEntityKind::TextMention { user } => {
                mentions.push(MentionedUser {
                    id: user.id.0,
                    display_name: user.first_name.clone(),
                });
            }
            // @username mention
            MessageEntityKind::Mention => {
                let start = entity.offset;
                let end = start + entity.length;
                if let Some(mention_text) = text.get(start..end)
                    && let Some(seen) = users.resolve_username(mention_text)
                {
                    mentions.push(MentionedUser {
                        id: seen.user_id,
                        display_name: seen.first_name,
                    });
                }
            }
            _ => {}
        }
    }

    mentions
}
