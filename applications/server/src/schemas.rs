//! Response payloads
//!
//! Records are never serialized directly; each endpoint picks the view that
//! matches its published shape.

use deckhand_core::types::{Deck, DeckId, Guide, GuideId, UserWithDecks};
use serde::Serialize;

/// Deck as listed under `GET /users`
#[derive(Debug, Clone, Serialize)]
pub struct DeckSummary {
    pub name: String,
    pub image: String,
    pub wins: String,
    pub losses: String,
}

/// User as listed under `GET /users`
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub username: String,
    pub decks: Vec<DeckSummary>,
}

/// Deck embedded in `GET /user/:id`
#[derive(Debug, Clone, Serialize)]
pub struct DeckDetail {
    pub id: DeckId,
    pub name: String,
    pub image: String,
    pub wins: String,
    pub losses: String,
}

/// Body of `GET /user/:id`
///
/// `id` is the path segment as requested (`/user/01` answers `"01"`); deck
/// ids are integers.
#[derive(Debug, Clone, Serialize)]
pub struct UserDetail {
    pub id: String,
    pub username: String,
    pub decks: Vec<DeckDetail>,
}

/// Body of `PUT /guide/:id`
#[derive(Debug, Clone, Serialize)]
pub struct GuideDetail {
    pub id: GuideId,
    pub title: String,
    pub content: String,
}

impl From<Deck> for DeckSummary {
    fn from(deck: Deck) -> Self {
        Self {
            name: deck.name,
            image: deck.image,
            wins: deck.wins,
            losses: deck.losses,
        }
    }
}

impl From<UserWithDecks> for UserSummary {
    fn from(user: UserWithDecks) -> Self {
        Self {
            username: user.user.username,
            decks: user.decks.into_iter().map(DeckSummary::from).collect(),
        }
    }
}

impl From<Deck> for DeckDetail {
    fn from(deck: Deck) -> Self {
        Self {
            id: deck.id,
            name: deck.name,
            image: deck.image,
            wins: deck.wins,
            losses: deck.losses,
        }
    }
}

impl UserDetail {
    pub fn new(requested_id: String, user: UserWithDecks) -> Self {
        Self {
            id: requested_id,
            username: user.user.username,
            decks: user.decks.into_iter().map(DeckDetail::from).collect(),
        }
    }
}

impl From<Guide> for GuideDetail {
    fn from(guide: Guide) -> Self {
        Self {
            id: guide.id,
            title: guide.title,
            content: guide.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_core::types::User;
    use serde_json::json;

    fn sample() -> UserWithDecks {
        UserWithDecks {
            user: User {
                id: 1,
                username: "ash".to_string(),
            },
            decks: vec![Deck {
                id: 1,
                name: "Fire".to_string(),
                image: "fire.png".to_string(),
                wins: "3".to_string(),
                losses: "1".to_string(),
                user_id: 1,
            }],
        }
    }

    #[test]
    fn user_detail_shape() {
        let value = serde_json::to_value(UserDetail::new("1".to_string(), sample())).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "username": "ash",
                "decks": [{"id": 1, "name": "Fire", "image": "fire.png", "wins": "3", "losses": "1"}]
            })
        );
    }

    #[test]
    fn user_summary_omits_ids() {
        let value = serde_json::to_value(UserSummary::from(sample())).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "ash",
                "decks": [{"name": "Fire", "image": "fire.png", "wins": "3", "losses": "1"}]
            })
        );
    }
}
