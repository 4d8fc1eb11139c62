//! Memes and jokes

use rand::seq::SliceRandom;
use crate::application::context::BotContext;
use crate::application::errors::ProviderError;
use crate::domain::entities::{CommandKind, Meme, Message, OutboundMessage};
use super::fallback;

pub const MEME_UNAVAILABLE: &str = "Impossible de charger un meme. Essayez à nouveau plus tard.";
pub const JOKE_ENG_UNAVAILABLE: &str = "Je n'ai pas pu trouver de blague pour le moment. 😞";
pub const JOKE_FR_UNAVAILABLE: &str = "Je n'ai pas réussi à trouver une blague pour le moment. 😞";

/// Text sent when the meme service answers with a non-success status
pub fn meme_status_error(status: u16) -> String {
    format!("Erreur de service de memes. Statut : {}", status)
}

pub async fn meme(ctx: &BotContext, message: &Message) -> Vec<OutboundMessage> {
    let memes = match ctx.memes.memes().await {
        Ok(memes) => memes,
        Err(e) => {
            let text = match e {
                ProviderError::Status(status) => meme_status_error(status),
                _ => MEME_UNAVAILABLE.to_string(),
            };
            return fallback(CommandKind::Meme, message, &e, text);
        }
    };

    match pick(&memes) {
        Some(meme) => {
            tracing::debug!("Picked meme {:?}", meme.name);
            vec![message.reply(meme.url.clone())]
        }
        None => fallback(
            CommandKind::Meme,
            message,
            &ProviderError::Unsuccessful("empty meme list".to_string()),
            MEME_UNAVAILABLE,
        ),
    }
}

fn pick(memes: &[Meme]) -> Option<&Meme> {
    memes.choose(&mut rand::thread_rng())
}

pub async fn joke_eng(ctx: &BotContext, message: &Message) -> Vec<OutboundMessage> {
    match ctx.english_jokes.random_joke().await {
        Ok(joke) => vec![message.reply(joke.render())],
        Err(e) => fallback(CommandKind::JokeEng, message, &e, JOKE_ENG_UNAVAILABLE),
    }
}

pub async fn joke_fr(ctx: &BotContext, message: &Message) -> Vec<OutboundMessage> {
    match ctx.french_jokes.random_joke().await {
        Ok(joke) => vec![message.reply(joke.render())],
        Err(e) => fallback(CommandKind::JokeFr, message, &e, JOKE_FR_UNAVAILABLE),
    }
}
