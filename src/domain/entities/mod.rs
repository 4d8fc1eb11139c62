//! Domain entities - Core business objects with no external dependencies

pub mod user;
pub mod guild;
pub mod message;
pub mod command;
pub mod content;

pub use user::{User, Role};
pub use guild::Guild;
pub use message::{Message, OutboundMessage, MAX_MESSAGE_LEN};
pub use command::{Command, CommandInvocation, CommandKind, CommandRegistry};
pub use content::{Article, Joke, Meme, WeatherReport};
