//! Query result model and failure taxonomy shared by every chat adapter.

pub mod error;
pub mod record;
pub mod temperature;

pub use error::{CredentialError, QueryError, QueryErrorKind};
pub use record::ResultRecord;
pub use temperature::Temperature;

/// How a chat adapter authenticates against its backend (Value Object)
///
/// This is the tagged variant set that replaces an inheritance hierarchy:
/// the base `Query` capability is universal, while pacing and credential
/// rotation attach only to the session-backed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    /// Official API authenticated with an access token.
    ApiToken,
    /// Reverse-engineered backend riding on browser session cookies.
    BrowserSession,
}

impl AdapterKind {
    /// Session-backed adapters rotate through stored credentials and are
    /// paced between queries to respect informal rate limits.
    pub fn rotates_credentials(&self) -> bool {
        matches!(self, AdapterKind::BrowserSession)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterKind::ApiToken => "api-token",
            AdapterKind::BrowserSession => "browser-session",
        }
    }
}

impl std::fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_session_adapters_rotate() {
        assert!(AdapterKind::BrowserSession.rotates_credentials());
        assert!(!AdapterKind::ApiToken.rotates_credentials());
    }
}
