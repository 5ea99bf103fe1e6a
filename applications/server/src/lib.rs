//! Deckhand Server Library
//!
//! HTTP backend for users, their decks, and guides.
//!
//! This library exposes the router and its components so integration tests
//! can drive the full request/response cycle.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod schemas;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use state::AppState;
