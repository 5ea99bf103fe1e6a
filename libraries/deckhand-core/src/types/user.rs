//! User types

use super::{CreateDeck, Deck};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// User identifier
pub type UserId = i64;

/// Maximum username length, in characters
pub const MAX_USERNAME_LEN: usize = 100;

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Row identifier
    pub id: UserId,
    /// Unique username
    pub username: String,
}

/// A user with every deck it owns, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithDecks {
    /// The user record
    pub user: User,
    /// Decks owned by the user
    pub decks: Vec<Deck>,
}

/// Data for creating a user along with its initial decks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Requested username
    pub username: String,
    /// Initial decks, persisted in this order
    pub decks: Vec<CreateDeck>,
}

impl CreateUser {
    /// Check the input against the column constraints of the store
    pub fn validate(&self) -> Result<()> {
        if self.username.chars().count() > MAX_USERNAME_LEN {
            return Err(CoreError::invalid_input(format!(
                "username must be at most {MAX_USERNAME_LEN} characters"
            )));
        }

        Ok(())
    }
}
