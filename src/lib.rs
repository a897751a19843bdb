//! Namma Salai Core - complaint lifecycle store
//!
//! This crate owns the pothole complaint collection for Namma Salai: citizens
//! submit reports, councillors move them through
//! `pending → in_progress → completed`. The implementation prioritizes:
//!
//! 1. **Integrity** - Whole-collection writes, unique ids, no silent
//!    overwrite of unreadable data
//! 2. **Logging** - Every state change logged with session context
//! 3. **Simplicity** - One slot, one lock, synchronous operations
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `storage` - Complaint models, persistence backends, the store
//! - `validation` - Report form, photo and status transition checks
//! - `pipeline` - Submission and councillor flows over the store
//! - `config` - Store configuration and environment overrides
//! - `logging` - Structured logging with session context
//! - `error` - Error types

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod storage;
pub mod validation;

use std::sync::Arc;

pub use config::{CorruptSlotPolicy, StoreConfig};
pub use error::{ConfigError, StoreError, SubmissionError, ValidationError};
pub use pipeline::{mark_complete, start_repair, submit_report, RepairCompleted, RepairOutcome, SessionContext};
pub use storage::{
    Complaint, ComplaintDraft, ComplaintStatus, ComplaintStore, District, FileBackend, MemoryBackend,
    PersistenceBackend, Severity, StatusSummary,
};
pub use validation::{SubmissionForm, TransitionPolicy};

/// Initialize the process-wide logger.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}

/// Open a store as described by `config`.
///
/// Uses a [`FileBackend`] under `config.data_dir` when set, otherwise an
/// in-memory backend.
pub fn open_store(config: &StoreConfig) -> Result<ComplaintStore, StoreError> {
    let backend: Arc<dyn PersistenceBackend> = match &config.data_dir {
        Some(dir) => Arc::new(FileBackend::open(dir).map_err(|source| StoreError::Backend {
            slot: config.slot_name.clone(),
            source,
        })?),
        None => Arc::new(MemoryBackend::new()),
    };

    Ok(ComplaintStore::new(backend, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory_store() {
        init_logger();
        let store = open_store(&StoreConfig::default()).unwrap();
        assert_eq!(store.slot(), "namma_salai_complaints");
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_open_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::default().with_data_dir(dir.path().join("nested"));
        let store = open_store(&config).unwrap();

        store
            .add(
                ComplaintDraft::new("MG Road", District::Chennai, Severity::High, "deep pothole"),
                None,
            )
            .unwrap();
        assert!(dir.path().join("nested").join("namma_salai_complaints.json").exists());
    }
}
