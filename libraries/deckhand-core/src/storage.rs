//! Storage trait for the Deckhand record store

use crate::error::Result;
use crate::types::{CreateUser, Guide, GuideId, UpdateGuide, UserId, UserWithDecks};
use async_trait::async_trait;

/// Storage context providing access to database operations
///
/// Handlers only talk to the store through this trait, so the `SQLite`
/// implementation can be swapped without touching the HTTP layer.
#[async_trait]
pub trait StorageContext: Send + Sync {
    /// Check that the store answers queries
    async fn ping(&self) -> Result<()>;

    // ========================================================================
    // Users
    // ========================================================================

    /// Create a user together with its initial decks in one transaction
    async fn create_user(&self, user: CreateUser) -> Result<UserWithDecks>;

    /// Get every user with its decks, ordered by id
    async fn get_all_users(&self) -> Result<Vec<UserWithDecks>>;

    /// Get a user with its decks
    async fn get_user(&self, id: UserId) -> Result<Option<UserWithDecks>>;

    // ========================================================================
    // Guides
    // ========================================================================

    /// Get guide by ID
    async fn get_guide(&self, id: GuideId) -> Result<Option<Guide>>;

    /// Overwrite title and content of an existing guide
    ///
    /// Returns `None` when no guide has the given id.
    async fn update_guide(&self, id: GuideId, guide: UpdateGuide) -> Result<Option<Guide>>;
}
