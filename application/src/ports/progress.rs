//! Progress notification port
//!
//! Defines the interface for reporting per-adapter campaign progress.

/// Callback for progress updates during a campaign
///
/// Purely observational: removing an implementation must not affect
/// campaign correctness. Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called once per worker before its first query, with the number of
    /// units already satisfied by checkpoint and output files and the total
    /// units (prompts × runs).
    fn on_worker_start(&self, adapter: &str, completed: u64, total: u64);

    /// Called after every successful query.
    fn on_query_complete(&self, adapter: &str);

    /// Called when the worker stops, whether it completed or gave up.
    fn on_worker_finish(&self, adapter: &str);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_worker_start(&self, _adapter: &str, _completed: u64, _total: u64) {}
    fn on_query_complete(&self, _adapter: &str) {}
    fn on_worker_finish(&self, _adapter: &str) {}
}
