//! Configuration loading tests
//! Run with: cargo test --test config_test

use std::io::Write;

use relais_bot::application::errors::ConfigError;
use relais_bot::infrastructure::config::{Config, LogFormat};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_full_yaml_config() {
    let file = write_config(
        r#"
bot:
  prefix: "?"
logging:
  level: debug
  format: compact
  file: /tmp/relais/bot.log
http:
  timeout-seconds: 3
providers:
  news-country: be
  news-page-size: 8
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.bot.prefix, "?");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.http.timeout().as_secs(), 3);
    assert_eq!(config.providers.news_country, "be");
    assert_eq!(config.providers.news_page_size, 8);
    // Untouched keys keep their defaults
    assert_eq!(config.providers.jokeapi_url, "https://v2.jokeapi.dev/joke/Any");
}

#[test]
fn test_json_config_is_accepted() {
    let file = write_config(r#"{"bot": {"prefix": "$"}, "logging": {"level": "warn", "file": null}}"#);
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.bot.prefix, "$");
    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = Config::from_yaml("{}").unwrap();
    assert_eq!(config.bot.prefix, "!");
    assert_eq!(config.http.timeout_seconds, 10);
    assert_eq!(config.providers.news_page_size, 5);
}

#[test]
fn test_malformed_config_is_an_error() {
    let file = write_config("bot: [unclosed");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = Config::from_yaml("logging:\n  format: rainbow\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_empty_prefix_is_rejected() {
    let err = Config::from_yaml("bot:\n  prefix: \"\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let (config, found) = Config::load_or_default(&path).unwrap();
    assert!(!found);
    assert_eq!(config.bot.prefix, "!");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
