//! blagues-api (French jokes)

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::errors::ProviderError;
use crate::domain::entities::Joke;
use crate::domain::traits::JokeProvider;
use crate::infrastructure::http::{fetch_json, ApiRequest, HttpFetcher};

#[derive(Deserialize, Debug)]
struct BlagueResponse {
    joke: String,
    #[serde(default)]
    answer: Option<String>,
}

pub struct BlaguesClient {
    fetcher: Arc<dyn HttpFetcher>,
    url: String,
    token: String,
}

impl BlaguesClient {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl JokeProvider for BlaguesClient {
    /// A blague with a non-empty answer is a two-part joke
    async fn random_joke(&self) -> Result<Joke, ProviderError> {
        let request = ApiRequest::get(&self.url).bearer(&self.token);
        let blague: BlagueResponse = fetch_json(self.fetcher.as_ref(), &request).await?;

        Ok(match blague.answer {
            Some(answer) if !answer.is_empty() => Joke::TwoPart {
                setup: blague.joke,
                delivery: answer,
            },
            _ => Joke::Single(blague.joke),
        })
    }
}
