//! Per-adapter checkpoint files.

use super::{read_records, remove_if_present, write_records};
use chorus_application::{CheckpointStore, StoreError};
use chorus_domain::ResultRecord;
use std::path::{Path, PathBuf};

/// File-backed checkpoint for one adapter.
///
/// Lives at `<temp_dir>/<adapter_name_lowercased>.json` and holds the
/// adapter's completed records as a single JSON array, fully rewritten on
/// every append. Each instance is owned by exactly one worker, so there is
/// never a second writer for the same path.
pub struct FileCheckpointStore {
    path: PathBuf,
    records: Vec<ResultRecord>,
}

impl FileCheckpointStore {
    pub fn new(temp_dir: impl AsRef<Path>, adapter_name: &str) -> Self {
        Self {
            path: temp_dir
                .as_ref()
                .join(format!("{}.json", adapter_name.to_lowercase())),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CheckpointStore for FileCheckpointStore {
    fn load(&mut self) -> Result<Vec<ResultRecord>, StoreError> {
        self.records = read_records(&self.path)?;
        Ok(self.records.clone())
    }

    fn append(&mut self, record: ResultRecord) -> Result<(), StoreError> {
        self.records.push(record);
        write_records(&self.path, &self.records)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        remove_if_present(&self.path)
    }
}
