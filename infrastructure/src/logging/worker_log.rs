//! Append-only worker log file.

use chorus_application::WorkerLog;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File-backed audit log for one worker.
///
/// Lives at `<temp_dir>/<adapter_name_lowercased>.log`; every entry is one
/// line of `YYYY-MM-DD HH:MM:SS: message` in local time. The file is opened
/// per entry so a crashed worker never holds the log hostage, and failures
/// to log never fail the run.
pub struct FileWorkerLog {
    path: PathBuf,
}

impl FileWorkerLog {
    pub fn new(temp_dir: impl AsRef<Path>, adapter_name: &str) -> Self {
        Self {
            path: temp_dir
                .as_ref()
                .join(format!("{}.log", adapter_name.to_lowercase())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkerLog for FileWorkerLog {
    fn record(&mut self, message: &str) {
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{stamp}: {message}"));
        if let Err(e) = result {
            warn!("could not append to worker log {}: {}", self.path.display(), e);
        }
    }
}
