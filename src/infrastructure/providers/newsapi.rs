//! NewsAPI top headlines

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::errors::ProviderError;
use crate::domain::entities::Article;
use crate::domain::traits::NewsProvider;
use crate::infrastructure::http::{fetch_json, ApiRequest, HttpFetcher};

#[derive(Deserialize, Debug)]
struct HeadlinesResponse {
    #[serde(default)]
    articles: Vec<ArticleEntry>,
}

#[derive(Deserialize, Debug)]
struct ArticleEntry {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

pub struct NewsApiClient {
    fetcher: Arc<dyn HttpFetcher>,
    url: String,
    api_key: String,
    country: String,
    page_size: u32,
}

impl NewsApiClient {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
            api_key: api_key.into(),
            country: "fr".to_string(),
            page_size: 5,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn top_headlines(&self) -> Result<Vec<Article>, ProviderError> {
        let request = ApiRequest::get(&self.url)
            .query("country", &self.country)
            .query("apiKey", &self.api_key)
            .query("pageSize", self.page_size.to_string());

        let response: HeadlinesResponse = fetch_json(self.fetcher.as_ref(), &request).await?;

        Ok(response
            .articles
            .into_iter()
            .map(|a| Article {
                title: a.title.unwrap_or_default(),
                description: a.description.filter(|d| !d.is_empty()),
                url: a.url.unwrap_or_default(),
            })
            .collect())
    }
}
