//! Message dispatcher - Routes messages to handlers and delivers the replies

use crate::application::context::BotContext;
use crate::application::handlers;
use crate::domain::entities::{Message, OutboundMessage};
use crate::domain::traits::Bot;
use super::router::{CommandRouter, Route};

/// Ties the router, the handlers and the outbound sink together
pub struct MessageDispatcher {
    router: CommandRouter,
    context: BotContext,
}

impl MessageDispatcher {
    pub fn new(context: BotContext) -> Self {
        Self {
            router: CommandRouter::new(context.prefix.clone(), context.commands.clone()),
            context,
        }
    }

    /// Compute the replies for a message without sending them
    pub async fn process(&self, message: &Message, self_id: &str) -> Vec<OutboundMessage> {
        match self.router.route(message, self_id) {
            None => Vec::new(),
            Some(Route::Usage(hint)) => {
                tracing::debug!("[{}] Missing argument, sending usage", message.channel_id);
                vec![message.reply(hint)]
            }
            Some(Route::Dispatch(invocation)) => {
                tracing::info!(
                    command = invocation.command.keyword(),
                    message_id = %message.id,
                    author = %message.author.id,
                    channel = %message.channel_id,
                    guild = message.guild.as_ref().map_or("-", |g| g.id.as_str()),
                    "Dispatching command"
                );
                handlers::execute(&self.context, message, &invocation).await
            }
        }
    }

    /// Process a message and send every reply through `bot`.
    /// Send failures are logged; they never propagate.
    pub async fn handle(&self, bot: &dyn Bot, message: &Message) {
        let info = bot.bot_info();
        let replies = self.process(message, &info.id).await;

        for reply in replies {
            let preview: String = reply.content.chars().take(100).collect();
            tracing::debug!("Sending response to channel {}: {}", reply.channel_id, preview);
            if let Err(e) = bot.send_message(&reply.channel_id, &reply.content).await {
                tracing::error!("Failed to send message to {}: {}", reply.channel_id, e);
            }
        }
    }
}
