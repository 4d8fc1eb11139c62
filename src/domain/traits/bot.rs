use async_trait::async_trait;
use crate::application::errors::BotError;

/// Bot trait - abstraction for the messaging platform's outbound side
#[async_trait]
pub trait Bot: Send + Sync {
    /// Send a message to a channel
    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), BotError>;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
}

impl BotInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
