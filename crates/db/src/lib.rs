//! Record storage and CRUD repository for the drama catalog.
//!
//! Two interchangeable backends implement [`store::RecordStore`]: a JSON file
//! with an in-memory cache, and a purely in-process collection. The rest of
//! the system only sees the [`DbPool`] handle.

pub mod config;
pub mod repositories;
pub mod store;

use std::sync::Arc;

pub use config::{StorageConfig, StorageMode};
pub use store::{RecordStore, StoreError};

use store::{FileStore, MemoryStore};

/// Shared handle to the active record store.
pub type DbPool = Arc<dyn RecordStore>;

/// Open the record store described by `config`.
///
/// The file backend never fails to open: a missing or corrupt file falls back
/// to the default catalog.
pub async fn create_pool(config: &StorageConfig) -> DbPool {
    match config.mode {
        StorageMode::File => Arc::new(FileStore::open(&config.data_file).await),
        StorageMode::Memory => Arc::new(MemoryStore::seeded()),
    }
}

/// Check that the store can still serve requests.
pub async fn health_check(pool: &DbPool) -> Result<(), StoreError> {
    pool.health_check().await
}
