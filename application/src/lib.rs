//! Application layer for chorus
//!
//! This crate contains the worker and campaign use cases, port definitions,
//! and campaign configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CampaignConfig, PacingConfig};
pub use ports::{
    chat_adapter::{ChatAdapter, CredentialRotation},
    progress::{NoProgress, ProgressNotifier},
    storage::{CampaignStorage, CheckpointStore, StoreError},
    worker_log::{NoWorkerLog, WorkerLog},
};
pub use use_cases::run_campaign::{
    AdapterReport, CampaignSummary, RunCampaignError, RunCampaignUseCase,
};
pub use use_cases::run_worker::{RunWorkerUseCase, WorkerContext, WorkerError, WorkerOutcome};
