//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod providers;

pub use bot::{Bot, BotInfo};
pub use providers::{JokeProvider, MemeProvider, NewsProvider, WeatherProvider};
