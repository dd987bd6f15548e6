use async_trait::async_trait;
use drama_core::drama::DramaRecord;
use drama_core::seed::sample_catalog;
use tokio::sync::RwLock;

use super::{RecordStore, StoreError};
use crate::config::StorageMode;

/// Record store that lives only as long as the process.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<DramaRecord>>,
}

impl MemoryStore {
    pub fn new(records: Vec<DramaRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Store pre-filled with the sample catalog.
    pub fn seeded() -> Self {
        Self::new(sample_catalog())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn mode(&self) -> StorageMode {
        StorageMode::Memory
    }

    async fn load(&self) -> Vec<DramaRecord> {
        self.records.read().await.clone()
    }

    async fn save(&self, records: &[DramaRecord]) -> Result<(), StoreError> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
