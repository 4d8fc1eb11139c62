//! relais-bot - a chat command bot backed by public REST services

pub mod application;
pub mod domain;
pub mod infrastructure;
