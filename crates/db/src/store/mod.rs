//! Record store backends.
//!
//! A store hands out snapshots of the full collection and replaces it
//! wholesale on [`RecordStore::save`]. Serializing read-modify-write cycles
//! is the caller's job (see [`crate::repositories::DramaRepo`]).

mod file;
mod memory;

use std::path::PathBuf;

use async_trait::async_trait;
use drama_core::drama::DramaRecord;
use drama_core::types::DramaId;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::StorageMode;

/// Errors raised while reading or writing the backing file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The collection already holds `DramaId::MAX`; no id is left to assign.
    #[error("No identifier left above {0}")]
    IdsExhausted(DramaId),

    /// The background task running a mutation panicked or was aborted.
    #[error("Write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl StoreError {
    /// Whether this error means the backing file does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Storage backend for the drama collection.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Which backend this is.
    fn mode(&self) -> StorageMode;

    /// Snapshot of the full collection in insertion order.
    async fn load(&self) -> Vec<DramaRecord>;

    /// Replace the stored collection with `records`.
    ///
    /// On error the previously stored collection stays in effect.
    async fn save(&self, records: &[DramaRecord]) -> Result<(), StoreError>;

    /// Check that the backend can accept writes.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
