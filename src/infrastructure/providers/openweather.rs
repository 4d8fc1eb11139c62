//! OpenWeatherMap current conditions

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::errors::ProviderError;
use crate::domain::entities::WeatherReport;
use crate::domain::traits::WeatherProvider;
use crate::infrastructure::http::{fetch_json, ApiRequest, HttpFetcher};

#[derive(Deserialize, Debug)]
struct WeatherResponse {
    weather: Vec<Condition>,
    main: Readings,
}

#[derive(Deserialize, Debug)]
struct Condition {
    description: String,
}

#[derive(Deserialize, Debug)]
struct Readings {
    temp: f64,
}

pub struct OpenWeatherClient {
    fetcher: Arc<dyn HttpFetcher>,
    url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    /// Metric units, French descriptions
    async fn current(&self, location: &str) -> Result<WeatherReport, ProviderError> {
        let request = ApiRequest::get(&self.url)
            .query("q", location)
            .query("appid", &self.api_key)
            .query("units", "metric")
            .query("lang", "fr");

        let response: WeatherResponse = fetch_json(self.fetcher.as_ref(), &request).await?;
        let condition = response
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Payload("no weather condition".to_string()))?;

        Ok(WeatherReport {
            description: condition.description,
            temperature_celsius: response.main.temp,
        })
    }
}
