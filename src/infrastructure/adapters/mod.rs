//! Platform adapters

pub mod discord;

pub use discord::{DiscordAdapter, DiscordSink};
