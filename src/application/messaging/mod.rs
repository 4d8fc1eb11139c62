//! Message handling - Classification and dispatch of incoming messages

pub mod dispatcher;
pub mod router;

pub use dispatcher::MessageDispatcher;
pub use router::{CommandRouter, Route};
