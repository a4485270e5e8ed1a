//! Structured query failure taxonomy.
//!
//! Adapters classify their own failures into a [`QueryErrorKind`] at the
//! capability boundary; the worker and retry policy never inspect message
//! text, only the kind.

use thiserror::Error;

/// Coarse classification of a failed chat query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryErrorKind {
    /// The backend did not answer within the adapter's configured timeout.
    Timeout,
    /// The querying mechanism itself failed (connection reset, broken
    /// internal event loop, process-level fault).
    Transient,
    /// The backend rejected the request because of request-rate quotas.
    RateLimited,
    /// The current session credential was rejected or is missing.
    AuthExhausted,
    /// Anything the adapter could not classify.
    Unclassified,
}

impl QueryErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryErrorKind::Timeout => "timeout",
            QueryErrorKind::Transient => "transient",
            QueryErrorKind::RateLimited => "rate-limited",
            QueryErrorKind::AuthExhausted => "auth-exhausted",
            QueryErrorKind::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for QueryErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failed chat query
///
/// Carries the structured kind plus the backend's message for the audit log.
#[derive(Debug, Clone, Error)]
#[error("{kind} error: {message}")]
pub struct QueryError {
    pub kind: QueryErrorKind,
    pub message: String,
}

impl QueryError {
    pub fn new(kind: QueryErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::Timeout, message)
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::Transient, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::RateLimited, message)
    }

    pub fn auth_exhausted(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::AuthExhausted, message)
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::Unclassified, message)
    }
}

/// Failure to discard a stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// `invalidate()` was called with a single credential remaining. The
    /// adapter can no longer authenticate and its worker must stop.
    #[error("cannot invalidate the last remaining credential")]
    Exhausted,
}
