use super::{Guild, User};

/// Hard platform limit on the length of one outbound message, in characters
pub const MAX_MESSAGE_LEN: usize = 2000;

/// An incoming chat message, immutable for the duration of one dispatch
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub channel_id: String,
    pub author: User,
    pub text: String,
    pub mentions: Vec<User>,
    /// `None` for direct messages
    pub guild: Option<Guild>,
}

impl Message {
    pub fn new(channel_id: impl Into<String>, author: User, text: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            channel_id: channel_id.into(),
            author,
            text: text.into(),
            mentions: Vec::new(),
            guild: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_mentions(mut self, mentions: Vec<User>) -> Self {
        self.mentions = mentions;
        self
    }

    pub fn with_guild(mut self, guild: Guild) -> Self {
        self.guild = Some(guild);
        self
    }

    /// Build a reply addressed to the channel this message came from
    pub fn reply(&self, content: impl Into<String>) -> OutboundMessage {
        OutboundMessage::new(&self.channel_id, content)
    }
}

/// Plain text addressed to a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub channel_id: String,
    pub content: String,
}

impl OutboundMessage {
    pub fn new(channel_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            content: content.into(),
        }
    }

    /// Length as the platform counts it
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }
}
