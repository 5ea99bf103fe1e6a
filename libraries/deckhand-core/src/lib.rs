//! Deckhand Core
//!
//! Domain types, validation, and the storage abstraction shared by the
//! Deckhand storage layer and HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Deck`, `Guide` and their create/update inputs
//! - **Storage Trait**: `StorageContext`, implemented by `deckhand-storage`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use deckhand_core::types::{CreateDeck, CreateUser};
//!
//! let input = CreateUser {
//!     username: "ash".to_string(),
//!     decks: vec![CreateDeck {
//!         name: "Fire".to_string(),
//!         image: "fire.png".to_string(),
//!         wins: "3".to_string(),
//!         losses: "1".to_string(),
//!     }],
//! };
//!
//! assert!(input.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use storage::StorageContext;

pub use types::{
    CreateDeck, CreateUser, Deck, DeckId, Guide, GuideId, UpdateGuide, User, UserId,
    UserWithDecks, MAX_CONTENT_LEN, MAX_TITLE_LEN, MAX_USERNAME_LEN,
};
