//! Domain layer - Core business objects and the seams infrastructure plugs into
//!
//! This layer contains:
//! - Entities: users, guilds, messages, the command table, provider payloads
//! - Traits: abstractions for the platform (Bot) and content providers

pub mod entities;
pub mod traits;
