//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Errors: Configuration, platform and provider errors
//! - Context: The dependency-injected bot context
//! - Messaging: Command routing and dispatch
//! - Handlers: One handler per command

pub mod context;
pub mod errors;
pub mod handlers;
pub mod messaging;
