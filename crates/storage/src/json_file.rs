//! JSON file persistence for the progress record.
//!
//! The whole record is one pretty-printed JSON document at a configurable
//! path. There is no partial update: every save rewrites the document,
//! which is fine for a record this small and keeps the file human-readable.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use skillforge_core::model::UserProgress;
use tokio::fs;

use crate::repository::{ProgressRepository, StorageError};

/// File-backed repository.
///
/// A missing file reads as "nothing persisted yet". Parent directories are
/// created on save so a fresh data directory needs no setup.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this repository reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProgressRepository for JsonFileRepository {
    async fn load(&self) -> Result<Option<UserProgress>, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(payload) => {
                let progress = serde_json::from_str(&payload)?;
                Ok(Some(progress))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, progress: &UserProgress) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            // A bare file name has an empty parent, which is not creatable.
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let payload = serde_json::to_string_pretty(progress)?;
        fs::write(&self.path, payload.as_bytes()).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
