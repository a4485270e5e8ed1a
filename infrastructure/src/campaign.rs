//! Campaign wiring
//!
//! Builds the filesystem storage for a configuration and runs the campaign
//! use case. This is the entry point library consumers wire their adapters
//! into.

use crate::storage::FsCampaignStorage;
use chorus_application::{
    CampaignConfig, CampaignSummary, ChatAdapter, ProgressNotifier, RunCampaignError,
    RunCampaignUseCase,
};
use chorus_domain::Prompt;
use std::sync::Arc;

/// A configured campaign over the local filesystem.
pub struct Campaign {
    config: CampaignConfig,
}

impl Campaign {
    pub fn new(config: CampaignConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    /// Query every adapter with every prompt, resuming any interrupted work
    /// found in checkpoint files, and fold the results into the output file.
    pub async fn run(
        &self,
        adapters: Vec<Box<dyn ChatAdapter>>,
        prompts: Vec<Prompt>,
    ) -> Result<CampaignSummary, RunCampaignError> {
        let storage = Arc::new(FsCampaignStorage::new(&self.config));
        RunCampaignUseCase::new(storage, self.config.clone())
            .execute(adapters, prompts)
            .await
    }

    /// Same as [`Campaign::run`], with progress callbacks.
    pub async fn run_with_progress(
        &self,
        adapters: Vec<Box<dyn ChatAdapter>>,
        prompts: Vec<Prompt>,
        progress: Arc<dyn ProgressNotifier>,
    ) -> Result<CampaignSummary, RunCampaignError> {
        let storage = Arc::new(FsCampaignStorage::new(&self.config));
        RunCampaignUseCase::new(storage, self.config.clone())
            .execute_with_progress(adapters, prompts, progress)
            .await
    }
}
