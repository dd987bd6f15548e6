//! JSON-file backend.
//!
//! The file is read once when the store is opened and cached in memory.
//! Every successful [`RecordStore::save`] rewrites the whole file (pretty
//! printed, UTF-8) through a sibling `.tmp` file and an atomic rename.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use drama_core::drama::DramaRecord;
use drama_core::seed::default_catalog;
use tokio::fs;
use tokio::sync::RwLock;

use super::{RecordStore, StoreError};
use crate::config::StorageMode;

/// Record store persisted to a single JSON array file.
pub struct FileStore {
    path: PathBuf,
    cache: RwLock<Vec<DramaRecord>>,
}

impl FileStore {
    /// Open the store at `path`, hydrating the cache from disk.
    ///
    /// A missing or unparseable file is replaced by the default catalog. If
    /// writing that catalog fails the store still opens with it in memory.
    pub async fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let records = match read_records(&path).await {
            Ok(records) => {
                tracing::info!(path = %path.display(), count = records.len(), "Loaded data file");
                records
            }
            Err(err) => {
                if err.is_not_found() {
                    tracing::info!(path = %path.display(), "Data file not found, seeding default catalog");
                } else {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "Failed to read data file, falling back to default catalog",
                    );
                }

                let seed = default_catalog();
                if let Err(err) = write_records(&path, &seed).await {
                    tracing::warn!(path = %path.display(), error = %err, "Failed to write default catalog");
                }
                seed
            }
        };

        Self {
            path,
            cache: RwLock::new(records),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for FileStore {
    fn mode(&self) -> StorageMode {
        StorageMode::File
    }

    async fn load(&self) -> Vec<DramaRecord> {
        self.cache.read().await.clone()
    }

    async fn save(&self, records: &[DramaRecord]) -> Result<(), StoreError> {
        let mut cache = self.cache.write().await;

        if let Err(err) = write_records(&self.path, records).await {
            tracing::error!(path = %self.path.display(), error = %err, "Failed to write data file");
            return Err(err);
        }

        *cache = records.to_vec();
        tracing::debug!(path = %self.path.display(), count = records.len(), "Data file written");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let Some(dir) = parent_dir(&self.path) else {
            return Ok(());
        };

        let meta = fs::metadata(dir).await.map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        if meta.is_dir() {
            Ok(())
        } else {
            Err(StoreError::Io {
                path: dir.to_path_buf(),
                source: std::io::Error::other("not a directory"),
            })
        }
    }
}

/// Parent directory of `path`, or `None` when it is relative to the working directory.
fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

async fn read_records(path: &Path) -> Result<Vec<DramaRecord>, StoreError> {
    let bytes = fs::read(path).await.map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_slice(&bytes)?)
}

async fn write_records(path: &Path, records: &[DramaRecord]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(records)?;

    if let Some(dir) = parent_dir(path) {
        fs::create_dir_all(dir).await.map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json)
        .await
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    fs::rename(&tmp_path, path)
        .await
        .map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
}
