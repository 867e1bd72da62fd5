#![forbid(unsafe_code)]

pub mod progress_service;
pub mod sink;

pub use progress_service::ProgressService;
pub use sink::{ProgressEventSink, StorageOp, TracingSink};
