//! Deck queries
//!
//! Decks are only ever written as part of user creation, so inserts run on
//! the caller's transaction.

use deckhand_core::{error::Result, types::*};
use sqlx::{sqlite::SqliteRow, Row, SqliteConnection, SqlitePool};

fn deck_from_row(row: &SqliteRow) -> Deck {
    Deck {
        id: row.get("id"),
        name: row.get("name"),
        image: row.get("image"),
        wins: row.get("wins"),
        losses: row.get("losses"),
        user_id: row.get("user_id"),
    }
}

/// Insert a deck for `user_id` on an open connection or transaction
pub async fn insert(conn: &mut SqliteConnection, user_id: UserId, deck: CreateDeck) -> Result<Deck> {
    let id = sqlx::query(
        "INSERT INTO deck (name, image, wins, losses, user_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&deck.name)
    .bind(&deck.image)
    .bind(&deck.wins)
    .bind(&deck.losses)
    .bind(user_id)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(Deck {
        id,
        name: deck.name,
        image: deck.image,
        wins: deck.wins,
        losses: deck.losses,
        user_id,
    })
}

/// Get a user's decks in insertion order
pub async fn get_by_user(pool: &SqlitePool, user_id: UserId) -> Result<Vec<Deck>> {
    let rows = sqlx::query(
        "SELECT id, name, image, wins, losses, user_id FROM deck WHERE user_id = ? ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(deck_from_row).collect())
}

/// Get every deck, grouped by owner
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Deck>> {
    let rows = sqlx::query(
        "SELECT id, name, image, wins, losses, user_id FROM deck ORDER BY user_id, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(deck_from_row).collect())
}
