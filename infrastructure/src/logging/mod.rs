//! Per-adapter log files.

mod worker_log;

pub use worker_log::FileWorkerLog;
