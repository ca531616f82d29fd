pub mod get;
pub mod help;
pub mod recherche;

use std::sync::Arc;

use teloxide::{
    prelude::*,
    utils::command::{BotCommands, ParseError},
};

use crate::{
    commands::{get::get_command, help::start_command, recherche::recherche_command},
    store::QuestionStore,
};

/// Custom parser for an optional single-token argument
fn parse_first_token(s: String) -> Result<(Option<String>,), ParseError> {
    // Take only the first line to prevent multi-line capture
    let first_line = s.lines().next().unwrap_or("").trim();
    Ok((first_line.split_whitespace().next().map(str::to_string),))
}

/// Custom parser for an optional rest-of-line argument
fn parse_optional_string(s: String) -> Result<(Option<String>,), ParseError> {
    // Take only the first line to prevent multi-line capture
    let first_line = s.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        Ok((None,))
    } else {
        Ok((Some(first_line.to_string()),))
    }
}

/// Bot commands
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(
    rename_rule = "lowercase",
    description = "Ces commandes sont disponibles :"
)]
pub enum Command {
    #[command(description = "démarre le bot et affiche l'aide")]
    Start,
    #[command(
        description = "affiche une question par son numéro",
        parse_with = parse_first_token
    )]
    Get { id: Option<String> },
    #[command(
        description = "recherche un mot dans les questions",
        parse_with = parse_optional_string
    )]
    Recherche { query: Option<String> },
}

/// Execute a single parsed command against the read-only question store.
pub async fn execute_command(
    bot: Bot,
    msg: Message,
    store: Arc<QuestionStore>,
    cmd: Command,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => start_command(bot, msg).await,
        Command::Get { id } => get_command(bot, msg, store, id).await,
        Command::Recherche { query } => recherche_command(bot, msg, store, query).await,
    }
}
