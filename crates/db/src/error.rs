use saved_items_core::types::UserId;

/// Failure of a repository operation.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Identities are stored as `BIGINT`, so values above `i64::MAX` cannot be kept.
    #[error("User id {0} does not fit the storage key range")]
    IdentityOutOfRange(UserId),

    /// Item order is stored as `INTEGER`, so indices above `i32::MAX` cannot be kept.
    #[error("Item position {0} does not fit the storage order column")]
    PositionOutOfRange(usize),
}
