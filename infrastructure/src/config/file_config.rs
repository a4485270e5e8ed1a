//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into the application-layer
//! configuration with [`FileConfig::into_campaign_config`].

use chorus_application::{CampaignConfig, PacingConfig};
use chorus_domain::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Campaign settings (directories, runs)
    pub campaign: FileCampaignConfig,
    /// Retry and backoff settings
    pub retry: FileRetryConfig,
    /// Session adapter pacing settings
    pub pacing: FilePacingConfig,
}

/// `[campaign]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCampaignConfig {
    /// Directory for per-adapter checkpoint and log files
    pub temp_dir: String,
    /// Directory for the merged output file
    pub output_dir: String,
    /// Merged output filename
    pub output_filename: String,
    /// Repetitions of every prompt, per adapter
    pub runs: u32,
}

impl Default for FileCampaignConfig {
    fn default() -> Self {
        Self {
            temp_dir: "temp".to_string(),
            output_dir: "output".to_string(),
            output_filename: "results.json".to_string(),
            runs: 1,
        }
    }
}

/// `[retry]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Consecutive failures tolerated before cool-downs kick in
    pub max_errors: u32,
    /// Pause after a rate-limit rejection, in seconds
    pub short_delay_secs: f64,
    /// Lower bound of the cool-down base window, in seconds
    pub cooldown_min_secs: f64,
    /// Upper bound of the cool-down base window, in seconds
    pub cooldown_max_secs: f64,
    /// Upper bound on the cool-down multiplier
    pub cooldown_cap: u32,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_errors: policy.max_consecutive_errors,
            short_delay_secs: policy.short_delay.as_secs_f64(),
            cooldown_min_secs: policy.cooldown_base_secs.start,
            cooldown_max_secs: policy.cooldown_base_secs.end,
            cooldown_cap: policy.cooldown_cap,
        }
    }
}

/// `[pacing]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePacingConfig {
    /// Lower bound of the inter-query pause window, in seconds
    pub min_secs: f64,
    /// Upper bound of the inter-query pause window, in seconds
    pub max_secs: f64,
}

impl Default for FilePacingConfig {
    fn default() -> Self {
        let pacing = PacingConfig::default();
        Self {
            min_secs: pacing.window_secs.start,
            max_secs: pacing.window_secs.end,
        }
    }
}

impl FileConfig {
    /// Convert the raw file structure into the application configuration.
    pub fn into_campaign_config(self) -> CampaignConfig {
        CampaignConfig {
            temp_dir: self.campaign.temp_dir.into(),
            output_dir: self.campaign.output_dir.into(),
            output_filename: self.campaign.output_filename,
            runs: self.campaign.runs,
            policy: RetryPolicy {
                max_consecutive_errors: self.retry.max_errors,
                short_delay: Duration::from_secs_f64(self.retry.short_delay_secs),
                cooldown_base_secs: self.retry.cooldown_min_secs..self.retry.cooldown_max_secs,
                cooldown_cap: self.retry.cooldown_cap,
            },
            pacing: PacingConfig {
                window_secs: self.pacing.min_secs..self.pacing.max_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_campaign_defaults() {
        let from_file = FileConfig::default().into_campaign_config();
        let native = CampaignConfig::default();
        assert_eq!(from_file.temp_dir, native.temp_dir);
        assert_eq!(from_file.output_filename, native.output_filename);
        assert_eq!(from_file.runs, native.runs);
        assert_eq!(
            from_file.policy.max_consecutive_errors,
            native.policy.max_consecutive_errors
        );
        assert_eq!(from_file.pacing.window_secs, native.pacing.window_secs);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [campaign]
            runs = 5

            [retry]
            max_errors = 2
            "#,
        )
        .unwrap();
        let campaign = config.into_campaign_config();
        assert_eq!(campaign.runs, 5);
        assert_eq!(campaign.policy.max_consecutive_errors, 2);
        assert_eq!(campaign.output_filename, "results.json");
        assert_eq!(campaign.policy.cooldown_cap, 10);
    }
}
