//! Campaign configuration: use case loop control.
//!
//! [`CampaignConfig`] groups the static parameters that control a campaign.
//! It is an explicit, caller-constructed value: there is no process-wide
//! default instance, and `Default` yields plain values only.

use chorus_domain::RetryPolicy;
use chorus_domain::retry::sample_secs;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;

/// Randomized inter-query pause for session-backed adapters.
///
/// Session backends have no documented quota; the pause keeps query rates
/// inside what a human-driven session would produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Pause window in seconds, sampled uniformly before every query.
    pub window_secs: Range<f64>,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            window_secs: 15.0..45.0,
        }
    }
}

impl PacingConfig {
    /// A zero-length window; used by tests and token-only campaigns.
    pub fn disabled() -> Self {
        Self { window_secs: 0.0..0.0 }
    }

    /// Sample one pause.
    pub fn sample(&self) -> Duration {
        Duration::from_secs_f64(sample_secs(&self.window_secs))
    }
}

/// Campaign-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Directory for per-adapter checkpoint and log files.
    pub temp_dir: PathBuf,
    /// Directory for the merged output file.
    pub output_dir: PathBuf,
    /// Merged output filename.
    pub output_filename: String,
    /// Repetitions of every prompt, per adapter.
    pub runs: u32,
    /// Failure classification and backoff policy.
    pub policy: RetryPolicy,
    /// Inter-query pacing for session-backed adapters.
    pub pacing: PacingConfig,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            temp_dir: PathBuf::from("temp"),
            output_dir: PathBuf::from("output"),
            output_filename: "results.json".to_string(),
            runs: 1,
            policy: RetryPolicy::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl CampaignConfig {
    // ==================== Builder Methods ====================

    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_output_filename(mut self, name: impl Into<String>) -> Self {
        self.output_filename = name.into();
        self
    }

    pub fn with_runs(mut self, runs: u32) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }
}
