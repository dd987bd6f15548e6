//! CRUD and search over the drama catalog.
//!
//! Mutations run load → modify → save while holding a single write lock, so
//! concurrent requests observe the same ordering a single-threaded server
//! would. Each mutation runs on its own task: once started it finishes even
//! if the caller stops waiting, so the store cache and the backing file never
//! diverge. Reads take a snapshot and never block on the lock.

use std::future::Future;
use std::sync::Arc;

use drama_core::drama::{next_id, CreateDrama, DramaRecord, UpdateDrama};
use drama_core::search;
use drama_core::types::DramaId;
use tokio::sync::Mutex;

use crate::store::StoreError;
use crate::DbPool;

/// Provides CRUD and search operations for drama records.
pub struct DramaRepo {
    pool: DbPool,
    write_lock: Arc<Mutex<()>>,
}

impl DramaRepo {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// The underlying record store.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Every record, in insertion order.
    pub async fn list(&self) -> Vec<DramaRecord> {
        self.pool.load().await
    }

    /// Find a record by id.
    pub async fn get(&self, id: DramaId) -> Option<DramaRecord> {
        self.pool.load().await.into_iter().find(|d| d.id == id)
    }

    /// Records whose title, keywords or description contain `query`,
    /// ignoring case.
    pub async fn search(&self, query: &str) -> Vec<DramaRecord> {
        let records = self.pool.load().await;
        search::search(&records, query)
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Append a new record with the next free id.
    pub async fn create(&self, input: CreateDrama) -> Result<DramaRecord, StoreError> {
        self.run_write(move |pool| create_record(pool, input)).await
    }

    /// Merge `input` over the record with `id`. Returns `None` if no such
    /// record exists.
    pub async fn update(
        &self,
        id: DramaId,
        input: UpdateDrama,
    ) -> Result<Option<DramaRecord>, StoreError> {
        self.run_write(move |pool| update_record(pool, id, input)).await
    }

    /// Remove the record with `id`, returning it. Returns `None` if no such
    /// record exists.
    pub async fn delete(&self, id: DramaId) -> Result<Option<DramaRecord>, StoreError> {
        self.run_write(move |pool| delete_record(pool, id)).await
    }

    /// Spawn `write` under the write lock and wait for it.
    ///
    /// Dropping the returned future detaches the task instead of cancelling it.
    async fn run_write<T, F, Fut>(&self, write: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(DbPool) -> Fut,
        Fut: Future<Output = Result<T, StoreError>> + Send + 'static,
    {
        let lock = Arc::clone(&self.write_lock);
        let task = write(Arc::clone(&self.pool));

        tokio::spawn(async move {
            let _guard = lock.lock_owned().await;
            task.await
        })
        .await?
    }
}

// ---------------------------------------------------------------------------
// Locked mutations
// ---------------------------------------------------------------------------

async fn create_record(pool: DbPool, input: CreateDrama) -> Result<DramaRecord, StoreError> {
    let mut records = pool.load().await;

    let id = next_id(&records).ok_or(StoreError::IdsExhausted(DramaId::MAX))?;
    let drama = input.into_record(id);
    records.push(drama.clone());
    pool.save(&records).await?;

    tracing::info!(drama_id = drama.id, title = %drama.title, "Drama created");
    Ok(drama)
}

async fn update_record(
    pool: DbPool,
    id: DramaId,
    input: UpdateDrama,
) -> Result<Option<DramaRecord>, StoreError> {
    let mut records = pool.load().await;

    let Some(drama) = records.iter_mut().find(|d| d.id == id) else {
        return Ok(None);
    };
    drama.apply(input);
    let updated = drama.clone();

    pool.save(&records).await?;

    tracing::info!(drama_id = id, "Drama updated");
    Ok(Some(updated))
}

async fn delete_record(pool: DbPool, id: DramaId) -> Result<Option<DramaRecord>, StoreError> {
    let mut records = pool.load().await;

    let Some(index) = records.iter().position(|d| d.id == id) else {
        return Ok(None);
    };
    let removed = records.remove(index);

    pool.save(&records).await?;

    tracing::info!(drama_id = id, "Drama deleted");
    Ok(Some(removed))
}
