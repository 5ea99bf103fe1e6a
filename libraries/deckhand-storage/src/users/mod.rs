//! User creation and lookup queries

use crate::decks;
use deckhand_core::{error::Result, types::*, CoreError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::HashMap;

fn user_from_row(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
    }
}

/// Create a user and its initial decks
///
/// Everything is written inside one transaction: if any insert fails the
/// transaction is dropped before commit and nothing is persisted.
///
/// # Errors
///
/// Returns `CoreError::Duplicate` if the username is taken, or a database
/// error if any insert fails.
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<UserWithDecks> {
    let mut tx = pool.begin().await?;

    let user_id = sqlx::query("INSERT INTO user (username) VALUES (?)")
        .bind(&user.username)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, &user.username))?
        .last_insert_rowid();

    let mut created = Vec::with_capacity(user.decks.len());
    for deck in user.decks {
        created.push(decks::insert(&mut tx, user_id, deck).await?);
    }

    tx.commit().await?;

    tracing::info!(
        user_id,
        username = %user.username,
        decks = created.len(),
        "Created user"
    );

    Ok(UserWithDecks {
        user: User {
            id: user_id,
            username: user.username,
        },
        decks: created,
    })
}

fn map_insert_error(err: sqlx::Error, username: &str) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return CoreError::Duplicate(format!("username '{username}'"));
        }
    }
    err.into()
}

/// Get user by ID, with its decks
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<UserWithDecks>> {
    let row = sqlx::query("SELECT id, username FROM user WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let user = user_from_row(&row);
    let decks = decks::get_by_user(pool, user.id).await?;

    Ok(Some(UserWithDecks { user, decks }))
}

/// Get all users with their decks, ordered by id
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<UserWithDecks>> {
    let rows = sqlx::query("SELECT id, username FROM user ORDER BY id")
        .fetch_all(pool)
        .await?;

    let mut decks_by_user: HashMap<UserId, Vec<Deck>> = HashMap::new();
    for deck in decks::get_all(pool).await? {
        decks_by_user.entry(deck.user_id).or_default().push(deck);
    }

    Ok(rows
        .iter()
        .map(|row| {
            let user = user_from_row(row);
            let decks = decks_by_user.remove(&user.id).unwrap_or_default();
            UserWithDecks { user, decks }
        })
        .collect())
}
