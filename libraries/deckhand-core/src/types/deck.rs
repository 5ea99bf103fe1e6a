//! Deck types

use super::UserId;
use serde::{Deserialize, Deserializer, Serialize};

/// Deck identifier
pub type DeckId = i64;

/// A deck owned by a user
///
/// `wins` and `losses` are stored as text; nothing enforces that they are
/// numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Row identifier
    pub id: DeckId,
    /// Deck name
    pub name: String,
    /// Image URL or path
    pub image: String,
    /// Win count, as submitted
    pub wins: String,
    /// Loss count, as submitted
    pub losses: String,
    /// Owning user
    pub user_id: UserId,
}

/// Data for creating a deck as part of user creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDeck {
    /// Deck name
    pub name: String,
    /// Image URL or path
    pub image: String,
    /// Win count; a JSON number is stored as its text
    #[serde(deserialize_with = "text_or_number")]
    pub wins: String,
    /// Loss count; a JSON number is stored as its text
    #[serde(deserialize_with = "text_or_number")]
    pub losses: String,
}

/// Accept either a JSON string or a JSON number, keeping it as text
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
    }

    Ok(match Count::deserialize(deserializer)? {
        Count::Text(text) => text,
        Count::Signed(n) => n.to_string(),
        Count::Unsigned(n) => n.to_string(),
        Count::Float(n) => n.to_string(),
    })
}
