//! Command handlers
//!
//! One function per command. Handlers never fail: provider errors become a
//! fixed fallback reply, missing input becomes a usage reply.

pub mod basic;
pub mod external;
pub mod fun;
pub mod info;
pub mod paging;


use crate::application::context::BotContext;
use crate::application::errors::ProviderError;
use crate::domain::entities::{CommandInvocation, CommandKind, Message, OutboundMessage};

/// Run the handler bound to `invocation.command`
pub async fn execute(
    ctx: &BotContext,
    message: &Message,
    invocation: &CommandInvocation,
) -> Vec<OutboundMessage> {
    let args = invocation.args.as_str();
    match invocation.command {
        CommandKind::Help => basic::help(ctx, message),
        CommandKind::Ping => basic::ping(message),
        CommandKind::Echo => basic::echo(message, args),
        CommandKind::ServerInfo => info::server_info(message),
        CommandKind::UserInfo => info::user_info(message),
        CommandKind::Meme => fun::meme(ctx, message).await,
        CommandKind::JokeEng => fun::joke_eng(ctx, message).await,
        CommandKind::JokeFr => fun::joke_fr(ctx, message).await,
        CommandKind::Weather => external::weather(ctx, message, args).await,
        CommandKind::News => external::news(ctx, message).await,
    }
}

/// Log a provider failure and produce the command's fallback reply
fn fallback(
    command: CommandKind,
    message: &Message,
    error: &ProviderError,
    text: impl Into<String>,
) -> Vec<OutboundMessage> {
    tracing::error!(
        command = command.keyword(),
        channel = %message.channel_id,
        "Provider call failed: {}",
        error
    );
    vec![message.reply(text)]
}
