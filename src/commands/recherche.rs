use std::sync::Arc;

use teloxide::{payloads::SendMessageSetters, prelude::*, types::ParseMode};

use crate::{config::MESSAGE_CHUNK_LIMIT, format::format_entry, store::QuestionStore};

/// Substring search over all question contents
pub async fn recherche_command(
    bot: Bot,
    msg: Message,
    store: Arc<QuestionStore>,
    query: Option<String>,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let Some(query) = query else {
        bot.send_message(chat_id, "Veuillez fournir un mot à rechercher.")
            .await?;
        return Ok(());
    };
    let query = query.to_lowercase();

    let matches = store.search(&query);
    if matches.is_empty() {
        bot.send_message(chat_id, format!("Aucun résultat pour '{}'.", query))
            .await?;
        return Ok(());
    }

    log::info!(
        "Search '{}' matched {} entries in chat {}",
        query,
        matches.len(),
        chat_id
    );

    let formatted = matches
        .into_iter()
        .map(|(id, content)| format_entry(id, content));
    for chunk in chunk_entries(formatted) {
        bot.send_message(chat_id, chunk)
            .parse_mode(ParseMode::Html)
            .await?;
    }

    Ok(())
}

/// Pack formatted entries into outbound messages.
///
/// Entries within a chunk are separated by a blank line; the current chunk is
/// flushed whenever appending the next entry would push it past the chunk
/// budget. Entries are never split internally.
fn chunk_entries(entries: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for entry in entries {
        if !current.is_empty() && current.len() + 2 + entry.len() > MESSAGE_CHUNK_LIMIT {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(&entry);
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_entries_empty() {
        assert!(chunk_entries(Vec::new()).is_empty());
    }

    #[test]
    fn test_chunk_entries_joins_short_entries() {
        let chunks = chunk_entries(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(chunks, vec!["a\n\nb\n\nc".to_string()]);
    }

    #[test]
    fn test_chunk_entries_splits_over_budget() {
        // Three entries of 1500 chars each: two fit in the first chunk
        // (1500 + 2 + 1500 = 3002), the third would exceed 4000
        let entries = vec!["x".repeat(1500), "y".repeat(1500), "z".repeat(1500)];
        let chunks = chunk_entries(entries);

        assert_eq!(chunks.len(), 2);
        for chunk in &chunks {
            assert!(chunk.len() <= MESSAGE_CHUNK_LIMIT);
        }
        assert!(chunks[0].starts_with('x'));
        assert!(chunks[0].contains("\n\ny"));
        assert!(chunks[1].starts_with('z'));
    }

    #[test]
    fn test_chunk_entries_boundary_exact_fit() {
        // 1999 + 2 + 1999 = 4000 fits exactly in one chunk
        let entries = vec!["a".repeat(1999), "b".repeat(1999)];
        let chunks = chunk_entries(entries);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), MESSAGE_CHUNK_LIMIT);
    }
}
