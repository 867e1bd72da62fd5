//! Notification seam for storage failures.
//!
//! The progress service never surfaces storage errors to its callers; it
//! reports them here and carries on with safe defaults. The default sink
//! logs a warning; tests install a recording sink instead.

use storage::StorageError;

/// The store operation that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageOp {
    Load,
    Save,
    Clear,
}

impl StorageOp {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StorageOp::Load => "load",
            StorageOp::Save => "save",
            StorageOp::Clear => "clear",
        }
    }
}

/// Receives non-fatal storage failures from the progress service.
pub trait ProgressEventSink: Send + Sync {
    fn storage_failure(&self, op: StorageOp, err: &StorageError);
}

/// Default sink: one `tracing` warning per failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ProgressEventSink for TracingSink {
    fn storage_failure(&self, op: StorageOp, err: &StorageError) {
        tracing::warn!(op = op.label(), error = %err, "progress storage failure");
    }
}
