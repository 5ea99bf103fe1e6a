use crate::{guides, users};
use async_trait::async_trait;
use deckhand_core::{error::Result, storage::StorageContext, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the pool and apply migrations in one step
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // Users
    async fn create_user(&self, user: CreateUser) -> Result<UserWithDecks> {
        users::create(&self.pool, user).await
    }

    async fn get_all_users(&self) -> Result<Vec<UserWithDecks>> {
        users::get_all(&self.pool).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<UserWithDecks>> {
        users::get_by_id(&self.pool, id).await
    }

    // Guides
    async fn get_guide(&self, id: GuideId) -> Result<Option<Guide>> {
        guides::get_by_id(&self.pool, id).await
    }

    async fn update_guide(&self, id: GuideId, guide: UpdateGuide) -> Result<Option<Guide>> {
        guides::update(&self.pool, id, guide).await
    }
}
