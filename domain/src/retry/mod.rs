//! Failure classification and backoff policy.
//!
//! The decision table mapping a failed query to a worker action, plus the
//! escalating cool-down applied after too many consecutive unhandled
//! failures. The worker owns the consecutive-failure counter; this module
//! owns what each failure kind means and how long the pauses last.

use crate::query::error::QueryError;
use crate::query::{AdapterKind, error::QueryErrorKind};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::time::Duration;

/// What the worker does with a failed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAction {
    /// Re-issue the query on the next loop iteration. The failure still
    /// counts toward the consecutive-failure counter.
    RetryImmediately,
    /// Pause for [`RetryPolicy::short_delay`] and reset the counter; the
    /// backend is alive, just throttling us.
    RetryAfterShortDelay,
    /// Invalidate the current credential before retrying.
    RotateCredential,
    /// Count the failure toward the escalating cool-down.
    Escalate,
}

/// Retry and backoff policy for one campaign.
///
/// The cool-down has no upper bound on attempts: an adapter that keeps
/// failing unclassified is throttled ever harder (up to `cooldown_cap`
/// times the base window) but never abandoned. A hard retry ceiling would
/// break the guarantee of exactly `runs` records per prompt once a
/// campaign completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Consecutive failures tolerated before cool-downs kick in.
    pub max_consecutive_errors: u32,
    /// Pause after a rate-limit rejection.
    pub short_delay: Duration,
    /// Base cool-down window in seconds; one uniform sample per cool-down.
    pub cooldown_base_secs: Range<f64>,
    /// Upper bound on the cool-down multiplier.
    pub cooldown_cap: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_consecutive_errors: 5,
            short_delay: Duration::from_secs(1),
            cooldown_base_secs: 55.0..65.0,
            cooldown_cap: 10,
        }
    }
}

impl RetryPolicy {
    /// Decision table, evaluated in order, first match wins.
    ///
    /// `AuthExhausted` on an adapter that cannot rotate credentials falls
    /// through to [`RetryAction::Escalate`].
    pub fn classify(&self, error: &QueryError, adapter: AdapterKind) -> RetryAction {
        match error.kind {
            QueryErrorKind::Timeout | QueryErrorKind::Transient => RetryAction::RetryImmediately,
            QueryErrorKind::RateLimited => RetryAction::RetryAfterShortDelay,
            QueryErrorKind::AuthExhausted if adapter.rotates_credentials() => {
                RetryAction::RotateCredential
            }
            _ => RetryAction::Escalate,
        }
    }

    /// Cool-down multiplier once the counter reaches the threshold.
    ///
    /// `None` below the threshold. At or above it, `min(excess + 1, cap)`
    /// where `excess = consecutive_errors - max_consecutive_errors`, so the
    /// pause keeps lengthening while failures continue.
    pub fn cooldown_multiplier(&self, consecutive_errors: u32) -> Option<u32> {
        if consecutive_errors < self.max_consecutive_errors {
            return None;
        }
        let excess = consecutive_errors - self.max_consecutive_errors;
        Some((excess + 1).min(self.cooldown_cap))
    }

    /// Sample a cool-down duration for the given failure count, or `None`
    /// if the counter has not reached the threshold.
    pub fn cooldown(&self, consecutive_errors: u32) -> Option<Duration> {
        let multiplier = self.cooldown_multiplier(consecutive_errors)?;
        let base = sample_secs(&self.cooldown_base_secs);
        Some(Duration::from_secs_f64(f64::from(multiplier) * base))
    }
}

/// Uniform sample from a seconds window; degenerate windows collapse to
/// their start so tests can zero out every pause.
pub fn sample_secs(window: &Range<f64>) -> f64 {
    let secs = if window.is_empty() {
        window.start
    } else {
        rand::thread_rng().gen_range(window.clone())
    };
    secs.max(0.0)
}
