//! Process configuration: CLI arguments, the bot-token resolution idiom, and
//! fixed display constants.

use std::path::PathBuf;

use clap::Parser;

pub const PREDEFINED_BOT_TOKEN_RELEASE: Option<&str> = option_env!("PREDEFINED_BOT_TOKEN_RELEASE");
pub const PREDEFINED_BOT_TOKEN_DEBUG: Option<&str> = option_env!("PREDEFINED_BOT_TOKEN_DEBUG");
pub const PREDEFINED_BOT_TOKEN: Option<&str> = if cfg!(debug_assertions) {
    PREDEFINED_BOT_TOKEN_DEBUG
} else {
    PREDEFINED_BOT_TOKEN_RELEASE
};
pub const BOT_TOKEN_HELP: &str = if PREDEFINED_BOT_TOKEN_RELEASE.is_some() {
    "Environment variable name containing the bot token. If not set, uses precompiled token"
} else {
    "Environment variable name containing the bot token (required)"
};

/// Fixed display constant for the "not found" notice; not derived from the
/// store (see SPEC_FULL §4.3).
pub const QUESTION_COUNT_HINT: usize = 129;

/// Safety chunk size for outbound messages, a margin below the 4096-char
/// platform ceiling.
pub const MESSAGE_CHUNK_LIMIT: usize = 4000;

/// A Telegram catechism question bot.
#[derive(Parser, Debug)]
#[command(name = "heidelbot")]
#[command(about = "A Telegram catechism question bot", long_about = None)]
pub struct Args {
    #[arg(long, help = BOT_TOKEN_HELP)]
    pub bot_token_env: Option<String>,

    /// Path to the JSON questions file.
    #[arg(long, default_value = "questions.json")]
    pub questions_file: PathBuf,
}

impl Args {
    /// Get the bot token from CLI args or the predefined token.
    pub fn get_token(&self) -> String {
        if let Some(env_name) = &self.bot_token_env {
            std::env::var(env_name)
                .unwrap_or_else(|_| panic!("Environment variable {} not found", env_name))
        } else if let Some(predefined) = PREDEFINED_BOT_TOKEN {
            predefined.to_string()
        } else {
            panic!("No bot token provided and no precompiled token available. Use --bot-token-env")
        }
    }
}
