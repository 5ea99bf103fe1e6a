//! Deckhand Storage
//!
//! `SQLite` persistence for users, decks, and guides.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each record kind owns its own queries (`users`, `decks`, `guides`)
//! - **Embedded Migrations**: The schema ships inside the binary and is applied at startup
//! - **Atomic Creation**: A user and its initial decks are written in one transaction
//!
//! # Example
//!
//! ```rust,no_run
//! use deckhand_storage::{LocalStorageContext, create_pool, run_migrations};
//! use deckhand_core::storage::StorageContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://deckhand.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let users = storage.get_all_users().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod decks;
pub mod guides;
pub mod users;

pub use context::LocalStorageContext;
pub use error::StorageError;

/// Storage handle used by the server
pub type Database = LocalStorageContext;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called once when the application starts so the `user`, `deck` and
/// `guide` tables exist before the first request.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("Migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://deckhand.db>`)
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
