//! Configuration management

mod secrets;

pub use secrets::Secrets;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub prefix: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
        }
    }
}

/// Output style of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Full,
            file: Some(PathBuf::from("logs/relais-bot.log")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_seconds: 10 }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

/// Endpoints of the content providers
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ProvidersConfig {
    pub imgflip_url: String,
    pub jokeapi_url: String,
    pub blagues_url: String,
    pub openweather_url: String,
    pub newsapi_url: String,
    pub news_country: String,
    pub news_page_size: u32,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            imgflip_url: "https://api.imgflip.com/get_memes".to_string(),
            jokeapi_url: "https://v2.jokeapi.dev/joke/Any".to_string(),
            blagues_url: "https://www.blagues-api.fr/api/random".to_string(),
            openweather_url: "http://api.openweathermap.org/data/2.5/weather".to_string(),
            newsapi_url: "https://newsapi.org/v2/top-headlines".to_string(),
            news_country: "fr".to_string(),
            news_page_size: 5,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content)
    }

    /// Parse YAML (or JSON, which is valid YAML)
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise. The flag tells whether the file was found.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<(Self, bool), ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Ok((Self::load(path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.trim().is_empty() {
            return Err(ConfigError::Parse("bot.prefix must not be empty".to_string()));
        }
        Ok(())
    }
}
