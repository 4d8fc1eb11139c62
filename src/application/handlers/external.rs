//! Weather and news

use crate::application::context::BotContext;
use crate::domain::entities::{Article, CommandKind, Message, OutboundMessage};
use super::{fallback, paging};

pub const WEATHER_UNAVAILABLE: &str = "Impossible d'obtenir les informations météorologiques. 😞";
pub const NEWS_UNAVAILABLE: &str = "Je ne peux pas récupérer les nouvelles en ce moment.";
pub const NEWS_HEADER: &str = "Voici les dernières nouvelles : \n";

pub async fn weather(ctx: &BotContext, message: &Message, location: &str) -> Vec<OutboundMessage> {
    match ctx.weather.current(location).await {
        // `{:?}` keeps the decimal point on whole degrees: 21.0, not 21
        Ok(report) => vec![message.reply(format!(
            "Météo à {} : {}, Température : {:?}°C",
            location, report.description, report.temperature_celsius
        ))],
        Err(e) => fallback(CommandKind::Weather, message, &e, WEATHER_UNAVAILABLE),
    }
}

pub async fn news(ctx: &BotContext, message: &Message) -> Vec<OutboundMessage> {
    match ctx.news.top_headlines().await {
        Ok(articles) => {
            let blocks: Vec<String> = articles.iter().map(article_block).collect();
            paging::paginate(NEWS_HEADER, &blocks)
                .into_iter()
                .map(|page| message.reply(page))
                .collect()
        }
        Err(e) => fallback(CommandKind::News, message, &e, NEWS_UNAVAILABLE),
    }
}

pub fn article_block(article: &Article) -> String {
    match &article.description {
        Some(description) => format!(
            "**{}**\n{}\nLire plus: {}\n\n",
            article.title, description, article.url
        ),
        None => format!("**{}**\nLire plus: {}\n\n", article.title, article.url),
    }
}
