//! Static replies

use crate::application::context::BotContext;
use crate::domain::entities::{Message, OutboundMessage};

pub fn help(ctx: &BotContext, message: &Message) -> Vec<OutboundMessage> {
    let mut help = "Liste des commandes : \n".to_string();
    for cmd in ctx.commands.all() {
        match &cmd.usage {
            Some(usage) => help.push_str(&format!(
                "{}{} {} - {}\n",
                ctx.prefix,
                cmd.keyword(),
                usage,
                cmd.description
            )),
            None => help.push_str(&format!(
                "{}{} - {}\n",
                ctx.prefix,
                cmd.keyword(),
                cmd.description
            )),
        }
    }
    vec![message.reply(help)]
}

pub fn ping(message: &Message) -> Vec<OutboundMessage> {
    vec![message.reply("Pong!")]
}

/// Echo the argument back; an empty argument gives an empty reply
pub fn echo(message: &Message, args: &str) -> Vec<OutboundMessage> {
    vec![message.reply(args)]
}
