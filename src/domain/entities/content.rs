//! Payloads returned by the content providers

/// A meme template offered by the meme provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meme {
    pub name: String,
    pub url: String,
}

/// A joke, either one-liner or setup/punchline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Joke {
    Single(String),
    TwoPart { setup: String, delivery: String },
}

impl Joke {
    /// Text as sent to the channel: two-part jokes are newline-joined
    pub fn render(&self) -> String {
        match self {
            Joke::Single(joke) => joke.clone(),
            Joke::TwoPart { setup, delivery } => format!("{}\n{}", setup, delivery),
        }
    }
}

/// Current conditions for one location
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub description: String,
    pub temperature_celsius: f64,
}

/// One headline from the news provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
}
