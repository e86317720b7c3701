//! SQLite-backed correlation store.
//!
//! Uses SqlitePoolManager and the models (CorrelationRecord, CorrelationRow).
//! External: SQLite via sqlx; callers use put/get through [`CorrelationStore`].

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::error::StorageError;
use crate::models::{CorrelationRecord, CorrelationRow};
use crate::repository::CorrelationStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteCorrelationStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteCorrelationStore {
    /// Opens (or creates) the database at `database_url` and ensures the schema exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating correlation table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS correlations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                sender_id INTEGER NOT NULL,
                sender_handle TEXT,
                sender_display_name TEXT NOT NULL,
                created_at TEXT NOT NULL,
                content_kind TEXT NOT NULL,
                text TEXT NOT NULL,
                attachment_ref TEXT,
                admin_copy_id INTEGER NOT NULL UNIQUE
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_correlations_sender_id ON correlations(sender_id)")
            .execute(pool)
            .await?;

        info!("Correlation table ready");
        Ok(())
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM correlations")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(total.0)
    }

    /// Closes the underlying pool.
    pub async fn close(&self) {
        self.pool_manager.close().await;
    }

    #[cfg(test)]
    pub(crate) fn pool_for_tests(&self) -> &sqlx::SqlitePool {
        self.pool_manager.pool()
    }
}

#[async_trait]
impl CorrelationStore for SqliteCorrelationStore {
    #[instrument(skip(self, record), fields(admin_copy_id = record.admin_copy_id))]
    async fn put(&self, record: &CorrelationRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        // One statement: the UNIQUE constraint is the existence check.
        let result = sqlx::query(
            r#"
            INSERT INTO correlations (sender_id, sender_handle, sender_display_name, created_at, content_kind, text, attachment_ref, admin_copy_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.sender_id)
        .bind(&record.sender_handle)
        .bind(&record.sender_display_name)
        .bind(record.created_at)
        .bind(record.content_kind.as_str())
        .bind(&record.text)
        .bind(&record.attachment_ref)
        .bind(record.admin_copy_id)
        .execute(pool)
        .await;

        match result {
            Ok(_) => {
                info!(
                    sender_id = record.sender_id,
                    content_kind = %record.content_kind,
                    "Saved correlation record"
                );
                Ok(())
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                warn!("Duplicate admin_copy_id rejected");
                Err(StorageError::Conflict(record.admin_copy_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn get(&self, admin_copy_id: i32) -> Result<Option<CorrelationRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let row = sqlx::query_as::<_, CorrelationRow>(
            r#"
            SELECT sender_id, sender_handle, sender_display_name, created_at, content_kind, text, attachment_ref, admin_copy_id
            FROM correlations WHERE admin_copy_id = ?
            "#,
        )
        .bind(admin_copy_id)
        .fetch_optional(pool)
        .await?;

        debug!(found = row.is_some(), "Correlation lookup");
        row.map(CorrelationRecord::try_from).transpose()
    }
}
