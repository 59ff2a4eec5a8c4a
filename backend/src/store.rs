//! Journal snapshot store
//!
//! The whole bean collection lives in memory and is written to a single JSON
//! snapshot after every mutation. Mutations are serialized through one lock,
//! so there is never more than one write in flight.

use std::path::{Path, PathBuf};

use chrono::Utc;
use shared::CoffeeBean;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};

/// File-backed store for the bean collection
pub struct JournalStore {
    path: PathBuf,
    beans: Mutex<Vec<CoffeeBean>>,
}

impl JournalStore {
    /// Open the snapshot at `path`.
    ///
    /// A missing snapshot starts an empty journal. A corrupt one is moved
    /// aside and the journal also starts empty. A snapshot that exists but
    /// cannot be read is an error, so it is never replaced by a later save.
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let beans = load_snapshot(&path).await?;
        tracing::info!("Loaded {} beans from {}", beans.len(), path.display());

        Ok(Self {
            path,
            beans: Mutex::new(beans),
        })
    }

    /// Copy of the current collection
    pub async fn snapshot(&self) -> Vec<CoffeeBean> {
        self.beans.lock().await.clone()
    }

    /// Run a read-only query against the collection
    pub async fn read<T>(&self, query: impl FnOnce(&[CoffeeBean]) -> T) -> T {
        let beans = self.beans.lock().await;
        query(&beans)
    }

    /// Apply a mutation and persist the result.
    ///
    /// The mutation works on a draft; the in-memory collection only changes
    /// once the draft has been written, so a failed write or a rejected
    /// mutation leaves the journal untouched.
    pub async fn update<T>(
        &self,
        mutation: impl FnOnce(&mut Vec<CoffeeBean>) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut beans = self.beans.lock().await;
        let mut draft = beans.clone();
        let output = mutation(&mut draft)?;

        self.persist(&draft).await?;
        *beans = draft;

        Ok(output)
    }

    async fn persist(&self, beans: &[CoffeeBean]) -> AppResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                AppError::StorageError(format!("cannot create {}: {}", dir.display(), e))
            })?;
        }

        let json = serde_json::to_vec_pretty(beans)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, &json).await.map_err(|e| {
            AppError::StorageError(format!("cannot write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::StorageError(format!("cannot replace {}: {}", self.path.display(), e))
        })?;

        tracing::debug!("Saved {} beans ({} bytes)", beans.len(), json.len());
        Ok(())
    }
}

async fn load_snapshot(path: &Path) -> AppResult<Vec<CoffeeBean>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No snapshot at {}, starting an empty journal", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            tracing::error!("Cannot read snapshot {}: {}", path.display(), e);
            return Err(AppError::StorageError(format!(
                "cannot read {}: {}",
                path.display(),
                e
            )));
        }
    };

    match serde_json::from_slice::<Vec<CoffeeBean>>(&bytes) {
        Ok(beans) => Ok(beans),
        Err(e) => {
            tracing::warn!("Corrupt snapshot {}: {}", path.display(), e);
            quarantine(path).await?;
            Ok(Vec::new())
        }
    }
}

/// Move a corrupt snapshot aside so the next save does not destroy it
async fn quarantine(path: &Path) -> AppResult<()> {
    let backup = path.with_extension(format!("corrupt-{}.json", Utc::now().format("%Y%m%d%H%M%S")));
    tokio::fs::rename(path, &backup).await.map_err(|e| {
        AppError::StorageError(format!("cannot move corrupt snapshot aside: {}", e))
    })?;

    tracing::warn!("Corrupt snapshot kept at {}", backup.display());
    Ok(())
}
