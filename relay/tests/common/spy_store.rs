//! Store wrapper that counts calls, used to prove which paths touch the store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use storage::{CorrelationRecord, CorrelationStore, StorageError};

pub struct SpyStore {
    inner: Arc<dyn CorrelationStore>,
    pub gets: AtomicUsize,
    pub puts: AtomicUsize,
}

impl SpyStore {
    pub fn new(inner: Arc<dyn CorrelationStore>) -> Self {
        Self {
            inner,
            gets: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
        }
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CorrelationStore for SpyStore {
    async fn put(&self, record: &CorrelationRecord) -> Result<(), StorageError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(record).await
    }

    async fn get(&self, admin_copy_id: i32) -> Result<Option<CorrelationRecord>, StorageError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(admin_copy_id).await
    }
}

/// Store whose every call fails, standing in for an unavailable database.
pub struct BrokenStore;

#[async_trait]
impl CorrelationStore for BrokenStore {
    async fn put(&self, _record: &CorrelationRecord) -> Result<(), StorageError> {
        Err(StorageError::Database("database is locked".to_string()))
    }

    async fn get(&self, _admin_copy_id: i32) -> Result<Option<CorrelationRecord>, StorageError> {
        Err(StorageError::Database("database is locked".to_string()))
    }
}

/// Store that already holds every key: `put` reports a duplicate `admin_copy_id`, `get` finds nothing.
pub struct ConflictingStore;

#[async_trait]
impl CorrelationStore for ConflictingStore {
    async fn put(&self, record: &CorrelationRecord) -> Result<(), StorageError> {
        Err(StorageError::Conflict(record.admin_copy_id))
    }

    async fn get(&self, _admin_copy_id: i32) -> Result<Option<CorrelationRecord>, StorageError> {
        Ok(None)
    }
}
