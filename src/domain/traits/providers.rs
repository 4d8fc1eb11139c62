//! Content provider seams
//!
//! Each provider wraps exactly one third-party REST call. Failures come back
//! as `ProviderError` and are turned into fallback replies by the handlers.

use async_trait::async_trait;
use crate::application::errors::ProviderError;
use crate::domain::entities::{Article, Joke, Meme, WeatherReport};

#[async_trait]
pub trait MemeProvider: Send + Sync {
    /// The full meme catalogue; the caller picks one
    async fn memes(&self) -> Result<Vec<Meme>, ProviderError>;
}

#[async_trait]
pub trait JokeProvider: Send + Sync {
    async fn random_joke(&self) -> Result<Joke, ProviderError>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, location: &str) -> Result<WeatherReport, ProviderError>;
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn top_headlines(&self) -> Result<Vec<Article>, ProviderError>;
}
