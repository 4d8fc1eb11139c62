//! Credentials sourced from the environment

use crate::application::errors::ConfigError;

pub const DISCORD_BOT_TOKEN: &str = "DISCORD_BOT_TOKEN";
pub const BLAGUES_API_TOKEN: &str = "BLAGUES_API_TOKEN";
pub const OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
pub const NEWSAPI_API_KEY: &str = "NEWSAPI_API_KEY";

/// Every secret the bot needs; all are required
#[derive(Clone)]
pub struct Secrets {
    pub discord_token: String,
    pub blagues_token: String,
    pub openweather_key: String,
    pub newsapi_key: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets").finish_non_exhaustive()
    }
}

impl Secrets {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve secrets through `lookup`; empty values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingSecret(name))
        };

        Ok(Self {
            discord_token: require(DISCORD_BOT_TOKEN)?,
            blagues_token: require(BLAGUES_API_TOKEN)?,
            openweather_key: require(OPENWEATHER_API_KEY)?,
            newsapi_key: require(NEWSAPI_API_KEY)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_all_secrets_present() {
        let vars = env(&[
            (DISCORD_BOT_TOKEN, "discord"),
            (BLAGUES_API_TOKEN, "blagues"),
            (OPENWEATHER_API_KEY, "owm"),
            (NEWSAPI_API_KEY, "news"),
        ]);
        let secrets = Secrets::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(secrets.discord_token, "discord");
        assert_eq!(secrets.newsapi_key, "news");
    }

    #[test]
    fn test_missing_secret_is_named() {
        let vars = env(&[
            (DISCORD_BOT_TOKEN, "discord"),
            (BLAGUES_API_TOKEN, "blagues"),
            (NEWSAPI_API_KEY, "news"),
        ]);
        let err = Secrets::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret(OPENWEATHER_API_KEY)));
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        let vars = env(&[(DISCORD_BOT_TOKEN, "   ")]);
        let err = Secrets::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret(DISCORD_BOT_TOKEN)));
    }

    #[test]
    fn test_debug_does_not_leak() {
        let vars = env(&[
            (DISCORD_BOT_TOKEN, "top-secret"),
            (BLAGUES_API_TOKEN, "b"),
            (OPENWEATHER_API_KEY, "o"),
            (NEWSAPI_API_KEY, "n"),
        ]);
        let secrets = Secrets::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert!(!format!("{:?}", secrets).contains("top-secret"));
    }
}
