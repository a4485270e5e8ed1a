//! Run Campaign use case
//!
//! Orchestrates the full campaign flow: fan out one isolated worker per
//! adapter, wait for all of them, then fold every checkpoint plus any prior
//! output into the final result file.

use crate::config::CampaignConfig;
use crate::ports::chat_adapter::ChatAdapter;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::storage::{CampaignStorage, CheckpointStore, StoreError};
use crate::use_cases::run_worker::{RunWorkerUseCase, WorkerContext, WorkerOutcome};
use chorus_domain::Prompt;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Errors that can occur during campaign execution
#[derive(Debug, Error)]
pub enum RunCampaignError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Per-adapter accounting in a campaign summary.
#[derive(Debug, Clone)]
pub struct AdapterReport {
    /// Adapter display name.
    pub adapter: String,
    /// How the worker stopped; `None` if its task died before reporting.
    pub outcome: Option<WorkerOutcome>,
    /// Records folded from this adapter's checkpoint into the output.
    pub records_merged: usize,
}

/// Final accounting for one campaign invocation.
#[derive(Debug, Clone)]
pub struct CampaignSummary {
    pub reports: Vec<AdapterReport>,
    /// Records now present in the output file, including prior invocations.
    pub total_records: usize,
}

/// Use case for running a campaign across many adapters.
pub struct RunCampaignUseCase<S: CampaignStorage + 'static> {
    storage: Arc<S>,
    config: CampaignConfig,
}

impl<S: CampaignStorage + 'static> RunCampaignUseCase<S> {
    pub fn new(storage: Arc<S>, config: CampaignConfig) -> Self {
        Self { storage, config }
    }

    /// Execute the campaign with default (no-op) progress
    pub async fn execute(
        &self,
        adapters: Vec<Box<dyn ChatAdapter>>,
        prompts: Vec<Prompt>,
    ) -> Result<CampaignSummary, RunCampaignError> {
        self.execute_with_progress(adapters, prompts, Arc::new(NoProgress))
            .await
    }

    /// Execute the campaign with progress callbacks
    pub async fn execute_with_progress(
        &self,
        adapters: Vec<Box<dyn ChatAdapter>>,
        prompts: Vec<Prompt>,
        progress: Arc<dyn ProgressNotifier>,
    ) -> Result<CampaignSummary, RunCampaignError> {
        self.storage.prepare()?;

        info!(
            adapters = adapters.len(),
            prompts = prompts.len(),
            runs = self.config.runs,
            "starting campaign"
        );

        let ctx = WorkerContext {
            prompts: Arc::new(prompts),
            runs: self.config.runs,
            policy: self.config.policy.clone(),
            pacing: self.config.pacing.clone(),
        };

        // Snapshot of the output taken before any worker runs; workers seed
        // their plans from it, and the orchestrator rewrites the file only
        // after the barrier join below.
        let output_snapshot = Arc::new(self.storage.load_output()?);

        // One isolated task per adapter. Each task exclusively owns its
        // adapter, checkpoint store and log; siblings share nothing mutable,
        // so a crashed worker cannot corrupt another's state.
        let mut join_set = JoinSet::new();
        let mut order = Vec::with_capacity(adapters.len());

        for mut adapter in adapters {
            let name = adapter.name().to_string();
            order.push(name.clone());

            let worker = RunWorkerUseCase::new(
                ctx.clone(),
                self.storage.checkpoint(&name),
                self.storage.worker_log(&name),
            );
            let output = Arc::clone(&output_snapshot);
            let progress = Arc::clone(&progress);

            join_set.spawn(async move {
                let outcome = worker
                    .execute(adapter.as_mut(), &output, progress.as_ref())
                    .await;
                (name, outcome)
            });
        }

        // Barrier join: nothing reaches the output file until every worker
        // has stopped.
        let mut outcomes: HashMap<String, WorkerOutcome> = HashMap::new();
        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((name, Ok(outcome))) => {
                    info!(adapter = %name, ?outcome, "worker joined");
                    outcomes.insert(name, outcome);
                }
                Ok((name, Err(e))) => {
                    warn!(adapter = %name, error = %e, "worker aborted");
                }
                Err(e) => {
                    warn!("worker task join error: {}", e);
                }
            }
        }

        // Merge: prior output first, then each adapter's checkpoint as a
        // contiguous block, in adapter input order. Checkpoints are cleared
        // only after their records are part of the in-memory result set.
        let mut results = self.storage.load_output()?;
        let mut reports = Vec::with_capacity(order.len());

        for name in order {
            let mut checkpoint = self.storage.checkpoint(&name);
            let records = checkpoint.load()?;
            let records_merged = records.len();
            results.extend(records);
            checkpoint.clear()?;
            reports.push(AdapterReport {
                outcome: outcomes.get(&name).copied(),
                adapter: name,
                records_merged,
            });
        }

        self.storage.write_output(&results)?;
        let total_records = results.len();
        info!(total_records, "campaign merged");

        Ok(CampaignSummary {
            reports,
            total_records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PacingConfig;
    use crate::ports::worker_log::WorkerLog;
    use async_trait::async_trait;
    use chorus_domain::{AdapterKind, QueryError, ResultRecord, RetryPolicy, Temperature};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Shared in-memory filesystem stand-in keyed by adapter name.
    #[derive(Default)]
    struct MemoryStorage {
        checkpoints: Mutex<HashMap<String, Vec<ResultRecord>>>,
        output: Mutex<Vec<ResultRecord>>,
    }

    impl MemoryStorage {
        fn seed_checkpoint(&self, name: &str, records: Vec<ResultRecord>) {
            self.checkpoints
                .lock()
                .unwrap()
                .insert(name.to_lowercase(), records);
        }

        fn seed_output(&self, records: Vec<ResultRecord>) {
            *self.output.lock().unwrap() = records;
        }

        fn checkpoint_names(&self) -> Vec<String> {
            self.checkpoints.lock().unwrap().keys().cloned().collect()
        }
    }

    struct MemoryCheckpoint {
        storage: Arc<MemoryStorage>,
        name: String,
        records: Vec<ResultRecord>,
    }

    impl CheckpointStore for MemoryCheckpoint {
        fn load(&mut self) -> Result<Vec<ResultRecord>, StoreError> {
            self.records = self
                .storage
                .checkpoints
                .lock()
                .unwrap()
                .get(&self.name)
                .cloned()
                .unwrap_or_default();
            Ok(self.records.clone())
        }

        fn append(&mut self, record: ResultRecord) -> Result<(), StoreError> {
            self.records.push(record);
            self.storage
                .checkpoints
                .lock()
                .unwrap()
                .insert(self.name.clone(), self.records.clone());
            Ok(())
        }

        fn clear(&mut self) -> Result<(), StoreError> {
            self.records.clear();
            self.storage.checkpoints.lock().unwrap().remove(&self.name);
            Ok(())
        }
    }

    struct MemoryLog;

    impl WorkerLog for MemoryLog {
        fn record(&mut self, _message: &str) {}
    }

    struct MemoryStorageHandle(Arc<MemoryStorage>);

    impl CampaignStorage for MemoryStorageHandle {
        type Checkpoint = MemoryCheckpoint;
        type Log = MemoryLog;

        fn prepare(&self) -> Result<(), StoreError> {
            Ok(())
        }

        fn checkpoint(&self, adapter_name: &str) -> MemoryCheckpoint {
            MemoryCheckpoint {
                storage: Arc::clone(&self.0),
                name: adapter_name.to_lowercase(),
                records: Vec::new(),
            }
        }

        fn worker_log(&self, _adapter_name: &str) -> MemoryLog {
            MemoryLog
        }

        fn load_output(&self) -> Result<Vec<ResultRecord>, StoreError> {
            Ok(self.0.output.lock().unwrap().clone())
        }

        fn write_output(&self, records: &[ResultRecord]) -> Result<(), StoreError> {
            *self.0.output.lock().unwrap() = records.to_vec();
            Ok(())
        }
    }

    struct EchoAdapter {
        name: String,
        fail_first: Option<QueryError>,
    }

    #[async_trait]
    impl ChatAdapter for EchoAdapter {
        fn name(&self) -> &str {
            &self.name
        }

        fn kind(&self) -> AdapterKind {
            AdapterKind::ApiToken
        }

        fn temperature(&self) -> Temperature {
            Temperature::Scalar(0.7)
        }

        async fn query(&mut self, prompt: &str) -> Result<String, QueryError> {
            if let Some(error) = self.fail_first.take() {
                return Err(error);
            }
            Ok(format!("echo: {prompt}"))
        }
    }

    fn config() -> CampaignConfig {
        CampaignConfig::default()
            .with_runs(2)
            .with_policy(RetryPolicy {
                short_delay: Duration::from_millis(1),
                cooldown_base_secs: 0.0..0.0,
                ..RetryPolicy::default()
            })
            .with_pacing(PacingConfig::disabled())
    }

    fn prompts(texts: &[&str]) -> Vec<Prompt> {
        texts.iter().map(|t| Prompt::new(*t)).collect()
    }

    fn record(chatbot: &str, prompt: &str) -> ResultRecord {
        ResultRecord::recorded_at(0.0, chatbot, prompt, Temperature::Unset, "prior")
    }

    #[tokio::test]
    async fn test_campaign_produces_full_matrix() {
        let storage = Arc::new(MemoryStorage::default());
        let use_case =
            RunCampaignUseCase::new(Arc::new(MemoryStorageHandle(Arc::clone(&storage))), config());

        let adapters: Vec<Box<dyn ChatAdapter>> = vec![
            Box::new(EchoAdapter {
                name: "A".into(),
                fail_first: None,
            }),
            Box::new(EchoAdapter {
                name: "B".into(),
                fail_first: None,
            }),
        ];

        let summary = use_case
            .execute(adapters, prompts(&["p1", "p2"]))
            .await
            .unwrap();

        // 2 adapters x 2 prompts x 2 runs
        assert_eq!(summary.total_records, 8);
        assert!(summary
            .reports
            .iter()
            .all(|r| r.outcome == Some(WorkerOutcome::Completed)));
        assert!(storage.checkpoint_names().is_empty());
        assert_eq!(storage.output.lock().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_merge_keeps_prior_output_and_all_checkpoints() {
        let storage = Arc::new(MemoryStorage::default());
        // Prior invocation output (j = 3) plus checkpoints for two adapters
        // (m = 2, k = 2) already satisfying the whole matrix
        storage.seed_output(vec![
            record("Old", "p1"),
            record("Old", "p1"),
            record("Old", "p2"),
        ]);
        storage.seed_checkpoint("a", vec![record("A", "p1"), record("A", "p1")]);
        storage.seed_checkpoint("b", vec![record("B", "p1"), record("B", "p1")]);

        let use_case =
            RunCampaignUseCase::new(Arc::new(MemoryStorageHandle(Arc::clone(&storage))), config());

        let adapters: Vec<Box<dyn ChatAdapter>> = vec![
            Box::new(EchoAdapter {
                name: "A".into(),
                fail_first: None,
            }),
            Box::new(EchoAdapter {
                name: "B".into(),
                fail_first: None,
            }),
        ];

        let summary = use_case.execute(adapters, prompts(&["p1"])).await.unwrap();

        // j + m + k, nothing lost or duplicated
        assert_eq!(summary.total_records, 7);
        let output = storage.output.lock().unwrap();
        assert_eq!(output.len(), 7);
        assert_eq!(output.iter().filter(|r| r.chatbot == "Old").count(), 3);
        assert_eq!(output.iter().filter(|r| r.chatbot == "A").count(), 2);
        assert_eq!(output.iter().filter(|r| r.chatbot == "B").count(), 2);
        // Each adapter's block is contiguous after the prior output
        assert!(output[..3].iter().all(|r| r.chatbot == "Old"));
        assert!(output[3..5].iter().all(|r| r.chatbot == "A"));
        assert!(output[5..].iter().all(|r| r.chatbot == "B"));
        assert!(storage.checkpoint_names().is_empty());
    }

    #[tokio::test]
    async fn test_one_failing_adapter_does_not_block_siblings() {
        let storage = Arc::new(MemoryStorage::default());
        let use_case =
            RunCampaignUseCase::new(Arc::new(MemoryStorageHandle(Arc::clone(&storage))), config());

        let adapters: Vec<Box<dyn ChatAdapter>> = vec![
            Box::new(EchoAdapter {
                name: "A".into(),
                fail_first: None,
            }),
            Box::new(EchoAdapter {
                name: "B".into(),
                fail_first: Some(QueryError::rate_limited("Rate limit reached")),
            }),
        ];

        let summary = use_case.execute(adapters, prompts(&["p1"])).await.unwrap();

        assert_eq!(summary.total_records, 4);
        assert!(summary
            .reports
            .iter()
            .all(|r| r.outcome == Some(WorkerOutcome::Completed)));
    }
}
