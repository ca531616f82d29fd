mod commands;
mod config;
mod format;
mod handlers;
mod parser;
mod store;

use std::sync::Arc;

use clap::Parser;
use teloxide::prelude::*;

use crate::{
    commands::Command,
    config::Args,
    handlers::{handle_command, handle_text_message},
    store::QuestionStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    pretty_env_logger::init();
    log::info!("Starting catechism question bot...");

    // The store is read-only for the process lifetime; a missing or
    // malformed file aborts startup
    let store = Arc::new(QuestionStore::load(&args.questions_file)?);
    log::info!(
        "Loaded {} questions from {}",
        store.len(),
        args.questions_file.display()
    );

    let token = args.get_token();
    let bot = Bot::new(token);

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::filter(|msg: Message| msg.text().is_some()).endpoint(handle_text_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![store])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
