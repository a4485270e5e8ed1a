//! Credential rotation backing store.

mod ring;

pub use ring::CredentialRing;
