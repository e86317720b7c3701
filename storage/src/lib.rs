//! Storage crate: correlation record persistence and the store abstraction.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – CorrelationRecord, ContentKind
//! - [`repository`] – CorrelationStore trait
//! - [`correlation_repo`] – SqliteCorrelationStore (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod correlation_repo;
mod error;
mod models;
mod repository;
mod sqlite_pool;


pub use correlation_repo::SqliteCorrelationStore;
pub use error::StorageError;
pub use models::{ContentKind, CorrelationRecord};
pub use repository::CorrelationStore;
pub use sqlite_pool::SqlitePoolManager;
