//! Discord adapter
//!
//! Owns the gateway connection. Every incoming message is converted into a
//! domain `Message` (with a snapshot of its guild taken from the cache) and
//! handed to the dispatcher together with a `DiscordSink` for the replies.

mod convert;

use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::channel::Message as DiscordMessage;
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId;
use serenity::prelude::*;
use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;
use crate::domain::traits::{Bot, BotInfo};

/// Outbound side of the Discord connection
pub struct DiscordSink {
    http: Arc<Http>,
    info: BotInfo,
}

impl DiscordSink {
    pub fn new(http: Arc<Http>, info: BotInfo) -> Self {
        Self { http, info }
    }
}

#[async_trait]
impl Bot for DiscordSink {
    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), BotError> {
        if text.is_empty() {
            // Discord rejects empty messages
            tracing::debug!("Skipping empty reply to channel {}", channel_id);
            return Ok(());
        }

        let id: u64 = channel_id
            .parse()
            .ok()
            .filter(|id| *id != 0)
            .ok_or_else(|| BotError::Platform(format!("Invalid channel id: {}", channel_id)))?;

        ChannelId::new(id)
            .say(&self.http, text)
            .await
            .map_err(|e| BotError::Platform(e.to_string()))?;
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

struct Handler {
    dispatcher: Arc<MessageDispatcher>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("{} has connected to Discord!", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: DiscordMessage) {
        // Cache reads stay in this block; nothing borrowed from it crosses an await
        let (message, info) = {
            let current = ctx.cache.current_user();
            let info = BotInfo::new(current.id.to_string(), current.name.clone());
            (convert::message(&ctx.cache, &msg), info)
        };

        let sink = DiscordSink::new(ctx.http.clone(), info);
        self.dispatcher.handle(&sink, &message).await;
    }
}

/// Discord gateway client
pub struct DiscordAdapter {
    token: String,
}

impl DiscordAdapter {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Connect and process events until Ctrl+C or SIGTERM
    pub async fn run(self, dispatcher: Arc<MessageDispatcher>) -> Result<(), BotError> {
        tracing::info!("Starting Discord adapter");

        let mut client = Client::builder(&self.token, Self::intents())
            .event_handler(Handler { dispatcher })
            .await
            .map_err(|e| BotError::Platform(format!("Failed to create Discord client: {}", e)))?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            wait_for_shutdown().await;
            tracing::info!("Shutdown signal received, stopping Discord client...");
            shard_manager.shutdown_all().await;
        });

        client
            .start()
            .await
            .map_err(|e| BotError::Network(format!("Discord client error: {}", e)))?;

        tracing::info!("Discord bot stopped");
        Ok(())
    }
}

async fn wait_for_shutdown() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(e) => {
                tracing::warn!("Cannot listen for SIGTERM: {}", e);
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.ok();
    }
}
