//! Storage ports
//!
//! Per-adapter checkpoints and the merged output file. The filesystem is the
//! only state shared between workers, so every port here hands out values a
//! single worker can own exclusively.

use crate::ports::worker_log::WorkerLog;
use chorus_domain::ResultRecord;
use thiserror::Error;

/// Errors from the checkpoint and output stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record store {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable, resumable record of one adapter's completed work.
///
/// One instance per adapter, owned by its worker. Durability beats
/// throughput here: the store rewrites the whole checkpoint after every
/// append, atomically, so a kill at any point leaves either the old or the
/// new content, never a torn file.
pub trait CheckpointStore: Send {
    /// Load existing records (empty if no checkpoint exists) and seed the
    /// store's in-memory sequence.
    fn load(&mut self) -> Result<Vec<ResultRecord>, StoreError>;

    /// Append one record in memory, then durably rewrite the checkpoint in
    /// full.
    fn append(&mut self, record: ResultRecord) -> Result<(), StoreError>;

    /// Delete the checkpoint once its contents have been folded into the
    /// output.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Factory for the filesystem surface one campaign touches.
///
/// The orchestrator mints one checkpoint store and one log per adapter so
/// each worker task owns its files exclusively. The output file is read by
/// workers only before any of them runs, and written only after every
/// worker has joined, so it never has concurrent writers.
pub trait CampaignStorage: Send + Sync {
    type Checkpoint: CheckpointStore + 'static;
    type Log: WorkerLog + 'static;

    /// Create the checkpoint and output locations if they do not exist.
    fn prepare(&self) -> Result<(), StoreError>;

    /// Checkpoint store for one adapter.
    fn checkpoint(&self, adapter_name: &str) -> Self::Checkpoint;

    /// Append-only audit log for one adapter.
    fn worker_log(&self, adapter_name: &str) -> Self::Log;

    /// Load the merged output (empty if it does not exist yet).
    fn load_output(&self) -> Result<Vec<ResultRecord>, StoreError>;

    /// Atomically replace the merged output.
    fn write_output(&self, records: &[ResultRecord]) -> Result<(), StoreError>;
}
