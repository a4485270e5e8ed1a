//! The merged output file.

use super::{read_records, write_records};
use chorus_application::StoreError;
use chorus_domain::ResultRecord;
use std::path::{Path, PathBuf};

/// File-backed store for the final merged result set.
///
/// The output is preserved and extended across invocations: the orchestrator
/// loads it, appends every checkpoint, and writes the whole set back in one
/// atomic replace.
pub struct FileOutputStore {
    path: PathBuf,
}

impl FileOutputStore {
    pub fn new(output_dir: impl AsRef<Path>, filename: &str) -> Self {
        Self {
            path: output_dir.as_ref().join(filename),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the output (empty if it does not exist yet).
    pub fn load(&self) -> Result<Vec<ResultRecord>, StoreError> {
        read_records(&self.path)
    }

    /// Atomically replace the output.
    pub fn write(&self, records: &[ResultRecord]) -> Result<(), StoreError> {
        write_records(&self.path, records)
    }
}
