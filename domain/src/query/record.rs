//! Query result records.

use super::temperature::Temperature;
use serde::{Deserialize, Serialize};

/// One successfully answered query (Value Object, immutable once written)
///
/// The field names are the on-disk schema of checkpoint and output files.
/// Each record contributes exactly one unit toward the completed-run count
/// of its `(chatbot, prompt)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Completion time in epoch seconds.
    pub timestamp: f64,
    /// Adapter display name.
    pub chatbot: String,
    /// Full prompt text.
    pub prompt: String,
    /// Temperature as rendered by the adapter.
    pub temperature: Temperature,
    /// Response text.
    pub response: String,
}

impl ResultRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        chatbot: impl Into<String>,
        prompt: impl Into<String>,
        temperature: Temperature,
        response: impl Into<String>,
    ) -> Self {
        let now = chrono::Utc::now();
        Self::recorded_at(
            now.timestamp_micros() as f64 / 1_000_000.0,
            chatbot,
            prompt,
            temperature,
            response,
        )
    }

    /// Create a record with an explicit timestamp.
    pub fn recorded_at(
        timestamp: f64,
        chatbot: impl Into<String>,
        prompt: impl Into<String>,
        temperature: Temperature,
        response: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            chatbot: chatbot.into(),
            prompt: prompt.into(),
            temperature,
            response: response.into(),
        }
    }
}
