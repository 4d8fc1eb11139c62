//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration file and environment secrets
//! - Logging: Subscriber setup
//! - Http: The fallible external call shared by all providers
//! - Providers: REST clients for memes, jokes, weather and news
//! - Adapters: Platform integrations (Discord)

pub mod adapters;
pub mod config;
pub mod http;
pub mod logging;
pub mod providers;
