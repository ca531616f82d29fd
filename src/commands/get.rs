use std::sync::Arc;

use teloxide::{payloads::SendMessageSetters, prelude::*, types::ParseMode};

use crate::{format::format_entry, store::QuestionStore};

/// Direct lookup of a question by its number
pub async fn get_command(
    bot: Bot,
    msg: Message,
    store: Arc<QuestionStore>,
    id: Option<String>,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let Some(id) = id else {
        bot.send_message(chat_id, "Veuillez fournir un numéro de question.")
            .await?;
        return Ok(());
    };

    match store.lookup(&id) {
        Some(content) => {
            bot.send_message(chat_id, format_entry(&id, content))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        None => {
            bot.send_message(chat_id, "Question non trouvée.").await?;
        }
    }

    Ok(())
}
