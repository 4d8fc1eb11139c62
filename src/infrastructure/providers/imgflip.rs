//! imgflip meme catalogue

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::errors::ProviderError;
use crate::domain::entities::Meme;
use crate::domain::traits::MemeProvider;
use crate::infrastructure::http::{fetch_json, ApiRequest, HttpFetcher};

#[derive(Deserialize, Debug)]
struct MemesResponse {
    success: bool,
    #[serde(default)]
    data: Option<MemesData>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct MemesData {
    memes: Vec<MemeEntry>,
}

#[derive(Deserialize, Debug)]
struct MemeEntry {
    #[serde(default)]
    name: String,
    url: String,
}

pub struct ImgflipClient {
    fetcher: Arc<dyn HttpFetcher>,
    url: String,
}

impl ImgflipClient {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

#[async_trait]
impl MemeProvider for ImgflipClient {
    async fn memes(&self) -> Result<Vec<Meme>, ProviderError> {
        let response: MemesResponse =
            fetch_json(self.fetcher.as_ref(), &ApiRequest::get(&self.url)).await?;

        if !response.success {
            return Err(ProviderError::Unsuccessful(
                response
                    .error_message
                    .unwrap_or_else(|| "success=false".to_string()),
            ));
        }

        let data = response
            .data
            .ok_or_else(|| ProviderError::Payload("missing data".to_string()))?;

        Ok(data
            .memes
            .into_iter()
            .map(|m| Meme {
                name: m.name,
                url: m.url,
            })
            .collect())
    }
}
