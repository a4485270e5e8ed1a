//! File-backed record stores.
//!
//! Checkpoints and the merged output share one on-disk shape: a single JSON
//! document holding an ordered array of result records, replaced atomically
//! (write a sibling temp file, then rename) so a kill mid-write can never
//! tear an existing file.

mod checkpoint;
mod environment;
mod output;

pub use checkpoint::FileCheckpointStore;
pub use environment::FsCampaignStorage;
pub use output::FileOutputStore;

use chorus_application::StoreError;
use chorus_domain::ResultRecord;
use std::fs;
use std::path::Path;

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn malformed(path: &Path, source: serde_json::Error) -> StoreError {
    StoreError::Malformed {
        path: path.display().to_string(),
        source,
    }
}

/// Read a record array, treating a missing file as empty.
pub(crate) fn read_records(path: &Path) -> Result<Vec<ResultRecord>, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io_error(path, e)),
    };
    serde_json::from_str(&data).map_err(|e| malformed(path, e))
}

/// Atomically replace `path` with the serialized record array.
pub(crate) fn write_records(path: &Path, records: &[ResultRecord]) -> Result<(), StoreError> {
    let json = serde_json::to_string(records).map_err(|e| malformed(path, e))?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp).to_path_buf();
    fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| io_error(path, e))
}

/// Delete `path`, treating a missing file as already deleted.
pub(crate) fn remove_if_present(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error(path, e)),
    }
}
