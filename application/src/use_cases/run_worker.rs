//! Run Worker use case
//!
//! Drives one chat adapter through its full prompt × run matrix: computes
//! the remaining work from checkpoint and output records, queries until
//! every prompt reaches its configured run count, checkpoints every
//! success, and applies the retry policy to every failure.

use crate::config::PacingConfig;
use crate::ports::chat_adapter::ChatAdapter;
use crate::ports::progress::ProgressNotifier;
use crate::ports::storage::{CheckpointStore, StoreError};
use crate::ports::worker_log::WorkerLog;
use chorus_domain::{Prompt, ResultRecord, RetryAction, RetryPolicy, WorkPlan};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a worker
///
/// Only storage faults abort; query failures are handled by the retry
/// policy and credential exhaustion is a regular outcome.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("checkpoint store error: {0}")]
    Store(#[from] StoreError),
}

/// Why a worker stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerOutcome {
    /// Every prompt reached its configured run count.
    Completed,
    /// The adapter ran out of credentials; its remaining work is abandoned.
    CredentialsExhausted,
}

/// Static inputs shared by every worker in a campaign.
#[derive(Debug, Clone)]
pub struct WorkerContext {
    /// Prompt list, processed in order.
    pub prompts: Arc<Vec<Prompt>>,
    /// Repetitions of every prompt.
    pub runs: u32,
    /// Failure classification and backoff policy.
    pub policy: RetryPolicy,
    /// Inter-query pacing for session-backed adapters.
    pub pacing: PacingConfig,
}

/// Use case driving one chat adapter.
pub struct RunWorkerUseCase<C: CheckpointStore, L: WorkerLog> {
    ctx: WorkerContext,
    checkpoint: C,
    log: L,
}

impl<C: CheckpointStore, L: WorkerLog> RunWorkerUseCase<C, L> {
    pub fn new(ctx: WorkerContext, checkpoint: C, log: L) -> Self {
        Self {
            ctx,
            checkpoint,
            log,
        }
    }

    /// Execute the worker loop.
    ///
    /// `output` is a snapshot of the merged output file taken before any
    /// worker started; together with the checkpoint it determines how many
    /// runs each prompt still owes.
    pub async fn execute(
        mut self,
        adapter: &mut dyn ChatAdapter,
        output: &[ResultRecord],
        progress: &dyn ProgressNotifier,
    ) -> Result<WorkerOutcome, WorkerError> {
        let name = adapter.name().to_string();
        let completed = self.checkpoint.load()?;
        let plan = WorkPlan::new(&name, &self.ctx.prompts, self.ctx.runs, &completed, output);

        progress.on_worker_start(&name, plan.completed_units(), plan.total_units());
        info!(
            adapter = %name,
            remaining = plan.remaining_units(),
            total = plan.total_units(),
            "worker starting"
        );

        let mut consecutive_errors: u32 = 0;

        for (prompt, owed) in plan.outstanding() {
            let mut remaining = owed;
            while remaining > 0 {
                // Session backends are paced before every query to respect
                // their informal rate limits.
                if adapter.kind().rotates_credentials() {
                    let pause = self.ctx.pacing.sample();
                    debug!(adapter = %name, ?pause, "pacing session adapter");
                    tokio::time::sleep(pause).await;
                }

                if let Some(wait) = self.ctx.policy.cooldown(consecutive_errors) {
                    self.log.record(&format!(
                        "{} unhandled errors have occurred in a row, waiting {}m.",
                        consecutive_errors,
                        (wait.as_secs_f64() / 60.0).round()
                    ));
                    warn!(adapter = %name, ?wait, "cooling down after consecutive failures");
                    tokio::time::sleep(wait).await;
                }

                match adapter.query(prompt.content()).await {
                    Ok(response) => {
                        let record = ResultRecord::new(
                            &name,
                            prompt.content(),
                            adapter.temperature(),
                            response,
                        );
                        self.checkpoint.append(record)?;
                        progress.on_query_complete(&name);
                        remaining -= 1;
                        consecutive_errors = 0;
                    }
                    Err(error) => {
                        self.log.record(&error.to_string());
                        warn!(adapter = %name, %error, "query failed");

                        match self.ctx.policy.classify(&error, adapter.kind()) {
                            RetryAction::RetryImmediately => consecutive_errors += 1,
                            RetryAction::RetryAfterShortDelay => {
                                tokio::time::sleep(self.ctx.policy.short_delay).await;
                                consecutive_errors = 0;
                            }
                            RetryAction::RotateCredential => {
                                let Some(credentials) = adapter.credential_rotation() else {
                                    // Contract violation: a session adapter
                                    // without the rotation capability.
                                    debug!(adapter = %name, "no credentials to rotate");
                                    consecutive_errors += 1;
                                    continue;
                                };
                                if let Err(exhausted) = credentials.invalidate() {
                                    self.log.record(&format!(
                                        "{exhausted}; abandoning remaining work"
                                    ));
                                    warn!(adapter = %name, "credentials exhausted, stopping worker");
                                    progress.on_worker_finish(&name);
                                    return Ok(WorkerOutcome::CredentialsExhausted);
                                }
                            }
                            RetryAction::Escalate => consecutive_errors += 1,
                        }
                    }
                }
            }
        }

        progress.on_worker_finish(&name);
        info!(adapter = %name, "worker finished");
        Ok(WorkerOutcome::Completed)
    }
}
