//! Content providers - REST clients behind the domain provider traits

pub mod blagues;
pub mod imgflip;
pub mod jokeapi;
pub mod newsapi;
pub mod openweather;


pub use blagues::BlaguesClient;
pub use imgflip::ImgflipClient;
pub use jokeapi::JokeApiClient;
pub use newsapi::NewsApiClient;
pub use openweather::OpenWeatherClient;

use std::sync::Arc;
use crate::application::context::BotContext;
use crate::infrastructure::config::{Config, Secrets};
use crate::infrastructure::http::HttpFetcher;

/// Wire every provider client onto one shared fetcher
pub fn build_context(config: &Config, secrets: &Secrets, fetcher: Arc<dyn HttpFetcher>) -> BotContext {
    let urls = &config.providers;
    BotContext::new(
        config.bot.prefix.clone(),
        Arc::new(ImgflipClient::new(fetcher.clone(), &urls.imgflip_url)),
        Arc::new(JokeApiClient::new(fetcher.clone(), &urls.jokeapi_url)),
        Arc::new(BlaguesClient::new(
            fetcher.clone(),
            &urls.blagues_url,
            &secrets.blagues_token,
        )),
        Arc::new(OpenWeatherClient::new(
            fetcher.clone(),
            &urls.openweather_url,
            &secrets.openweather_key,
        )),
        Arc::new(
            NewsApiClient::new(fetcher, &urls.newsapi_url, &secrets.newsapi_key)
                .with_country(&urls.news_country)
                .with_page_size(urls.news_page_size),
        ),
    )
}
