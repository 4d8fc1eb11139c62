//! JokeAPI (English jokes)

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::errors::ProviderError;
use crate::domain::entities::Joke;
use crate::domain::traits::JokeProvider;
use crate::infrastructure::http::{fetch_json, ApiRequest, HttpFetcher};

/// Discriminated on the `type` field
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JokeResponse {
    Single { joke: String },
    Twopart { setup: String, delivery: String },
}

impl From<JokeResponse> for Joke {
    fn from(r: JokeResponse) -> Self {
        match r {
            JokeResponse::Single { joke } => Joke::Single(joke),
            JokeResponse::Twopart { setup, delivery } => Joke::TwoPart { setup, delivery },
        }
    }
}

pub struct JokeApiClient {
    fetcher: Arc<dyn HttpFetcher>,
    url: String,
}

impl JokeApiClient {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

#[async_trait]
impl JokeProvider for JokeApiClient {
    async fn random_joke(&self) -> Result<Joke, ProviderError> {
        let response: JokeResponse =
            fetch_json(self.fetcher.as_ref(), &ApiRequest::get(&self.url)).await?;
        Ok(response.into())
    }
}
