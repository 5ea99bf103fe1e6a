//! Domain types for Deckhand records

mod deck;
mod guide;
mod user;

pub use deck::{CreateDeck, Deck, DeckId};
pub use guide::{Guide, GuideId, UpdateGuide, MAX_CONTENT_LEN, MAX_TITLE_LEN};
pub use user::{CreateUser, User, UserId, UserWithDecks, MAX_USERNAME_LEN};
