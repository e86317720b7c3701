use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::CorrelationRecord;

/// Durable, append-only mapping from admin copy id to [`CorrelationRecord`].
///
/// No update or delete is exposed.
#[async_trait]
pub trait CorrelationStore: Send + Sync {
    /// Persists `record` iff no record shares its `admin_copy_id`; otherwise returns
    /// [`StorageError::Conflict`]. Check and insert are one atomic operation.
    async fn put(&self, record: &CorrelationRecord) -> Result<(), StorageError>;

    /// Returns the record for `admin_copy_id`, or `None`. Read-only.
    async fn get(&self, admin_copy_id: i32) -> Result<Option<CorrelationRecord>, StorageError>;
}
