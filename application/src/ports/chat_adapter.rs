//! Chat adapter port
//!
//! The uniform capability contract every chat backend is consumed through.
//! Concrete adapters (token-authenticated APIs, session-cookie backends)
//! live outside this workspace; the orchestration core only ever sees these
//! traits.

use async_trait::async_trait;
use chorus_domain::{AdapterKind, CredentialError, QueryError, Temperature};

/// A pluggable client for one chat backend.
///
/// An adapter is owned by the caller's configuration and moved into exactly
/// one worker; it is never shared across workers.
#[async_trait]
pub trait ChatAdapter: Send {
    /// Display name; also the stem of the adapter's checkpoint and log files.
    fn name(&self) -> &str;

    /// Authentication family. Drives inter-query pacing and the failure
    /// decision table.
    fn kind(&self) -> AdapterKind;

    /// The temperature-like setting as rendered into result records.
    fn temperature(&self) -> Temperature;

    /// Issue one chat request and block until a response or timeout.
    ///
    /// Implementations enforce their own configured timeout and must fail
    /// with [`chorus_domain::QueryErrorKind::Timeout`] rather than hang.
    /// All failures are classified at this boundary; the worker never
    /// inspects message text.
    async fn query(&mut self, prompt: &str) -> Result<String, QueryError>;

    /// Credential rotation capability.
    ///
    /// Contract: returns `Some` for every [`AdapterKind::BrowserSession`]
    /// adapter and `None` otherwise.
    fn credential_rotation(&mut self) -> Option<&mut dyn CredentialRotation> {
        None
    }
}

/// Credential rotation capability of session-backed adapters.
pub trait CredentialRotation: Send {
    /// Advance to the next stored credential (no-op when only one remains).
    fn rotate(&mut self);

    /// Discard the current credential permanently.
    ///
    /// Fails with [`CredentialError::Exhausted`] when it is the last one;
    /// the worker must then stop all further work for this adapter.
    fn invalidate(&mut self) -> Result<(), CredentialError>;
}
