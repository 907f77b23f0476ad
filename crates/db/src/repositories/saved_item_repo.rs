//! Repository for the `saved_items` table.

use async_trait::async_trait;
use saved_items_core::types::UserId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::saved_item::SavedItem;

/// Column list for `saved_items` reads, aliased onto [`SavedItem`] fields.
const COLUMNS: &str = "item_id AS id, url, saved_at";

/// Data access for one user's saved-items collection.
#[async_trait]
pub trait SavedItemsRepo: Send + Sync {
    /// All items of `user_id` in the order of the last replacement.
    async fn get(&self, user_id: UserId) -> Result<Vec<SavedItem>, RepoError>;

    /// Replace the entire collection of `user_id` with `items`.
    async fn put(&self, user_id: UserId, items: &[SavedItem]) -> Result<(), RepoError>;

    /// Remove every item of `user_id`. Succeeds when there is nothing to remove.
    async fn delete(&self, user_id: UserId) -> Result<(), RepoError>;

    /// Cheap liveness check of the backing store.
    async fn ping(&self) -> Result<(), RepoError>;
}

/// [`SavedItemsRepo`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgSavedItemsRepo {
    pool: PgPool,
}

impl PgSavedItemsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Convert an identity to its `BIGINT` storage key.
fn storage_key(user_id: UserId) -> Result<i64, RepoError> {
    i64::try_from(user_id.get()).map_err(|_| RepoError::IdentityOutOfRange(user_id))
}

/// Order column value for the item at `index` of a replacement.
fn storage_position(index: usize) -> Result<i32, RepoError> {
    i32::try_from(index).map_err(|_| RepoError::PositionOutOfRange(index))
}

#[async_trait]
impl SavedItemsRepo for PgSavedItemsRepo {
    async fn get(&self, user_id: UserId) -> Result<Vec<SavedItem>, RepoError> {
        let key = storage_key(user_id)?;
        let query = format!(
            "SELECT {COLUMNS} FROM saved_items WHERE user_id = $1 ORDER BY position, item_id"
        );
        let items = sqlx::query_as::<_, SavedItem>(&query)
            .bind(key)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    /// Runs in a single transaction: the old collection is deleted and the
    /// new one inserted, so readers never observe a partial replacement.
    async fn put(&self, user_id: UserId, items: &[SavedItem]) -> Result<(), RepoError> {
        let key = storage_key(user_id)?;
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM saved_items WHERE user_id = $1")
            .bind(key)
            .execute(&mut *tx)
            .await?;

        for (index, item) in items.iter().enumerate() {
            let position = storage_position(index)?;
            sqlx::query(
                "INSERT INTO saved_items (user_id, item_id, url, position) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(key)
            .bind(&item.id)
            .bind(&item.url)
            .bind(position)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(user_id = %user_id, count = items.len(), "Replaced saved items");
        Ok(())
    }

    async fn delete(&self, user_id: UserId) -> Result<(), RepoError> {
        let key = storage_key(user_id)?;
        let result = sqlx::query("DELETE FROM saved_items WHERE user_id = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        tracing::debug!(
            user_id = %user_id,
            removed = result.rows_affected(),
            "Deleted saved items",
        );
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        crate::health_check(&self.pool).await
    }
}
