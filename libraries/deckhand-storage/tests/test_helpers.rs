//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so migrations, foreign keys and unique constraints behave as in production.

#![allow(dead_code)]

use deckhand_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = deckhand_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        deckhand_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: deck input with numeric-looking wins/losses
pub fn deck_input(name: &str, wins: u32, losses: u32) -> CreateDeck {
    CreateDeck {
        name: name.to_string(),
        image: format!("{}.png", name.to_lowercase()),
        wins: wins.to_string(),
        losses: losses.to_string(),
    }
}

/// Test fixture: user input with the given decks
pub fn user_input(username: &str, decks: Vec<CreateDeck>) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        decks,
    }
}

/// Count rows in a table
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
