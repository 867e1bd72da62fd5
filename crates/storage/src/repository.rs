use async_trait::async_trait;
use skillforge_core::model::UserProgress;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Repository contract for the persisted progress record.
///
/// There is exactly one record per installation. `load` distinguishes
/// "nothing persisted yet" (`Ok(None)`) from a record that exists but
/// cannot be read.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the persisted record, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` when a persisted payload fails
    /// to parse, or other storage errors when the medium fails.
    async fn load(&self) -> Result<Option<UserProgress>, StorageError>;

    /// Persist the record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save(&self, progress: &UserProgress) -> Result<(), StorageError>;

    /// Remove the persisted record. Removing a missing record is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium fails.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// The record is held in its serialized form so the parse path runs exactly
/// as it does for a file-backed store, and so tests can inject corrupt
/// payloads via `set_raw`.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slot: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored payload verbatim, bypassing serialization.
    pub fn set_raw(&self, payload: impl Into<String>) {
        let mut guard = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(payload.into());
    }

    /// The stored payload, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        let guard = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<UserProgress>, StorageError> {
        let guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        match guard.as_ref() {
            Some(payload) => {
                let progress = serde_json::from_str(payload)?;
                Ok(Some(progress))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, progress: &UserProgress) -> Result<(), StorageError> {
        let payload = serde_json::to_string(progress)?;
        let mut guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        *guard = Some(payload);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
