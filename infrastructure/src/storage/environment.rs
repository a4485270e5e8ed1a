//! Filesystem campaign storage.

use super::{FileCheckpointStore, FileOutputStore};
use crate::logging::FileWorkerLog;
use chorus_application::{CampaignConfig, CampaignStorage, StoreError};
use chorus_domain::ResultRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// The filesystem surface of one campaign: a temp directory holding
/// per-adapter checkpoints and logs, and an output directory holding the
/// merged result file.
pub struct FsCampaignStorage {
    temp_dir: PathBuf,
    output: FileOutputStore,
}

impl FsCampaignStorage {
    pub fn new(config: &CampaignConfig) -> Self {
        Self {
            temp_dir: config.temp_dir.clone(),
            output: FileOutputStore::new(&config.output_dir, &config.output_filename),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    pub fn output_path(&self) -> &Path {
        self.output.path()
    }
}

impl CampaignStorage for FsCampaignStorage {
    type Checkpoint = FileCheckpointStore;
    type Log = FileWorkerLog;

    fn prepare(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.temp_dir).map_err(|e| StoreError::Io {
            path: self.temp_dir.display().to_string(),
            source: e,
        })?;
        if let Some(output_dir) = self.output.path().parent() {
            fs::create_dir_all(output_dir).map_err(|e| StoreError::Io {
                path: output_dir.display().to_string(),
                source: e,
            })?;
        }
        Ok(())
    }

    fn checkpoint(&self, adapter_name: &str) -> FileCheckpointStore {
        FileCheckpointStore::new(&self.temp_dir, adapter_name)
    }

    fn worker_log(&self, adapter_name: &str) -> FileWorkerLog {
        FileWorkerLog::new(&self.temp_dir, adapter_name)
    }

    fn load_output(&self) -> Result<Vec<ResultRecord>, StoreError> {
        self.output.load()
    }

    fn write_output(&self, records: &[ResultRecord]) -> Result<(), StoreError> {
        self.output.write(records)
    }
}
