//! Fallible external call
//!
//! Every provider issues exactly one GET through `HttpFetcher`. `fetch_json`
//! turns the outcome into either a decoded payload or a `ProviderError`.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::application::errors::ProviderError;

/// One outbound GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            bearer: None,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Perform the request. Transport problems and timeouts are errors; any status is not.
    async fn get(&self, request: &ApiRequest) -> Result<ApiResponse, ProviderError>;
}

/// Production fetcher backed by reqwest
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!("relais-bot/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, request: &ApiRequest) -> Result<ApiResponse, ProviderError> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

/// GET `request` and decode a JSON body. Anything but 200 is `ProviderError::Status`.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn HttpFetcher,
    request: &ApiRequest,
) -> Result<T, ProviderError> {
    let response = fetcher.get(request).await?;
    if response.status != 200 {
        tracing::debug!("{} answered {}", request.url, response.status);
        return Err(ProviderError::Status(response.status));
    }

    serde_json::from_str(&response.body).map_err(|e| ProviderError::Payload(e.to_string()))
}
