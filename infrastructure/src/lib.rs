//! Infrastructure layer for chorus
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: file-backed checkpoint and output stores, per-adapter
//! log files, credential rotation, and configuration file loading.

pub mod campaign;
pub mod config;
pub mod credentials;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use campaign::Campaign;
pub use config::{ConfigLoader, FileCampaignConfig, FileConfig, FilePacingConfig, FileRetryConfig};
pub use credentials::CredentialRing;
pub use logging::FileWorkerLog;
pub use storage::{FileCheckpointStore, FsCampaignStorage};
