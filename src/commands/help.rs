use teloxide::{prelude::*, utils::command::BotCommands};

use super::Command;

/// Greeting with usage instructions and the generated command list
pub async fn start_command(bot: Bot, msg: Message) -> ResponseResult<()> {
    let me = bot.get_me().await?;
    let handle = me.username();

    let text = format!(
        "Bonjour ! Demande-moi une question avec /get <num> ou mentionne-moi \
        dans un groupe avec @{handle} <num>.\n\n{commands}",
        commands = Command::descriptions()
    );

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}
