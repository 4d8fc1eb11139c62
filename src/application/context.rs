//! Bot context - everything a handler may depend on, built once at startup

use std::sync::Arc;
use crate::domain::entities::CommandRegistry;
use crate::domain::traits::{JokeProvider, MemeProvider, NewsProvider, WeatherProvider};

/// Dependency-injected context shared by the router and every handler
#[derive(Clone)]
pub struct BotContext {
    pub prefix: String,
    pub commands: Arc<CommandRegistry>,
    pub memes: Arc<dyn MemeProvider>,
    pub english_jokes: Arc<dyn JokeProvider>,
    pub french_jokes: Arc<dyn JokeProvider>,
    pub weather: Arc<dyn WeatherProvider>,
    pub news: Arc<dyn NewsProvider>,
}

impl BotContext {
    pub fn new(
        prefix: impl Into<String>,
        memes: Arc<dyn MemeProvider>,
        english_jokes: Arc<dyn JokeProvider>,
        french_jokes: Arc<dyn JokeProvider>,
        weather: Arc<dyn WeatherProvider>,
        news: Arc<dyn NewsProvider>,
    ) -> Self {
        let prefix = prefix.into();
        Self {
            commands: Arc::new(CommandRegistry::standard(&prefix)),
            prefix,
            memes,
            english_jokes,
            french_jokes,
            weather,
            news,
        }
    }
}
