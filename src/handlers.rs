use std::sync::Arc;

use teloxide::{payloads::SendMessageSetters, prelude::*, types::ParseMode};

use crate::{
    commands::{Command, execute_command},
    config::QUESTION_COUNT_HINT,
    format::format_entry,
    parser::{extract_question_id, is_mentioned},
    store::QuestionStore,
};

/// Endpoint for recognized slash commands
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    store: Arc<QuestionStore>,
    cmd: Command,
) -> ResponseResult<()> {
    execute_command(bot, msg, store, cmd).await
}

/// Outcome of passively scanning a free-text message
#[derive(Debug, PartialEq)]
enum ScanOutcome {
    /// A known question was referenced; holds the formatted entry
    Entry(String),
    /// A number was extracted but no such question exists
    NotFound(String),
    /// The bot was addressed without a usable number
    Usage,
    /// Not addressed to the bot
    Ignore,
}

/// Decide how to react to a free-text message.
///
/// Only private chats and messages mentioning the bot's handle are scanned;
/// everything else is left alone.
fn scan_message(store: &QuestionStore, handle: &str, is_private: bool, text: &str) -> ScanOutcome {
    if !is_private && !is_mentioned(text, handle) {
        return ScanOutcome::Ignore;
    }

    match extract_question_id(text, handle) {
        Some(id) => match store.lookup(&id) {
            Some(content) => ScanOutcome::Entry(format_entry(&id, content)),
            None => ScanOutcome::NotFound(id),
        },
        None if is_mentioned(text, handle) => ScanOutcome::Usage,
        None => ScanOutcome::Ignore,
    }
}

/// Endpoint for free-text messages: scan for a question reference
pub async fn handle_text_message(
    bot: Bot,
    msg: Message,
    store: Arc<QuestionStore>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    // Slash commands are routed by the command branch; an unrecognized one
    // must not be scanned for digits
    if text.starts_with('/') {
        return Ok(());
    }

    let me = bot.get_me().await?;
    let handle = me.username();
    let chat_id = msg.chat.id;

    let is_private = msg.chat.is_private();
    log::info!(
        "Message in {} chat {}: {:?}",
        if is_private { "private" } else { "group" },
        chat_id,
        text
    );

    match scan_message(&store, handle, is_private, text) {
        ScanOutcome::Entry(formatted) => {
            // A failed send is logged and dropped; the user gets no follow-up
            if let Err(e) = bot
                .send_message(chat_id, formatted)
                .parse_mode(ParseMode::Html)
                .await
            {
                log::error!("Failed to send question to chat {}: {}", chat_id, e);
            }
        }
        ScanOutcome::NotFound(id) => {
            bot.send_message(
                chat_id,
                format!(
                    "Question {} non trouvée (questions 1-{} disponibles)",
                    id, QUESTION_COUNT_HINT
                ),
            )
            .await?;
        }
        ScanOutcome::Usage => {
            bot.send_message(
                chat_id,
                format!(
                    "Utilise: @{} <numéro> pour avoir une question (ex: @{} 1)",
                    handle, handle
                ),
            )
            .await?;
        }
        ScanOutcome::Ignore => {}
    }

    Ok(())
}
