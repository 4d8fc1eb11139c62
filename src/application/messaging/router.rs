//! Command router - Classifies incoming messages into command invocations

use std::sync::Arc;
use crate::domain::entities::{Command, CommandInvocation, CommandRegistry, Message};

/// Outcome of routing one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Run the handler for this invocation
    Dispatch(CommandInvocation),
    /// A known command was missing its required argument; reply with the hint
    Usage(String),
}

/// Matches message text against the ordered command table
pub struct CommandRouter {
    command_prefix: String,
    commands: Arc<CommandRegistry>,
}

impl CommandRouter {
    pub fn new(prefix: impl Into<String>, commands: Arc<CommandRegistry>) -> Self {
        Self {
            command_prefix: prefix.into(),
            commands,
        }
    }

    /// Classify a message. `self_id` is the bot's own user id: its messages are never routed.
    pub fn route(&self, message: &Message, self_id: &str) -> Option<Route> {
        if message.author.id == self_id {
            return None;
        }

        let body = message.text.strip_prefix(self.command_prefix.as_str())?;
        let (command, rest) = self.commands.find_prefix(body)?;
        let args = rest.trim();

        Some(self.resolve(command, args))
    }

    fn resolve(&self, command: &Command, args: &str) -> Route {
        match &command.missing_argument_hint {
            Some(hint) if args.is_empty() => Route::Usage(hint.clone()),
            _ => Route::Dispatch(CommandInvocation::new(command.kind, args)),
        }
    }
}
