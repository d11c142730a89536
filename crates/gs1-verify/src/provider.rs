//! # External Collaborators
//!
//! Chain verification relies on two collaborators it does not implement:
//!
//! - a [`CredentialLoader`] that fetches a parent credential by URI when it
//!   is not embedded inline, and
//! - a [`CredentialVerifier`] that establishes cryptographic trust in each
//!   credential (proof, status, issuer keys).
//!
//! Both are asynchronous and fallible. Timeouts and cancellation are their
//! concern; the resolver and walker only see an `Err` and turn it into a
//! rule violation for the affected link.

use std::collections::HashMap;
use std::future::Future;

use anyhow::anyhow;

use gs1_rules::ChainCheckResult;
use gs1_vc::VerifiableCredential;

/// Result is used for all collaborator errors.
pub type Result<T> = anyhow::Result<T>;

/// Resolves a credential from the URI another credential extends.
pub trait CredentialLoader: Send + Sync {
    /// Returns the credential identified by `uri`.
    fn load(&self, uri: &str) -> impl Future<Output = Result<VerifiableCredential>> + Send;
}

/// Verifies the trust layer of a single credential.
pub trait CredentialVerifier: Send + Sync {
    /// Returns the verification outcome for `credential`. An `Ok` result
    /// with `verified == false` and an `Err` are both treated as failed
    /// external verification.
    fn verify(
        &self, credential: &VerifiableCredential,
    ) -> impl Future<Output = Result<ChainCheckResult>> + Send;
}

// ─── Stock implementations ───────────────────────────────────────────

/// A loader that knows no credentials. Every parent must be inline.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentialLoader;

impl CredentialLoader for NoCredentialLoader {
    async fn load(&self, uri: &str) -> Result<VerifiableCredential> {
        Err(anyhow!("no credential loader configured for {uri}"))
    }
}

/// Credentials held in memory, keyed by their `id`.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialLoader {
    credentials: HashMap<String, VerifiableCredential>,
}

impl MemoryCredentialLoader {
    /// An empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `credential` under its `id`. Credentials without an id cannot
    /// be referenced and are rejected.
    pub fn insert(&mut self, credential: VerifiableCredential) -> bool {
        match credential.id.clone() {
            Some(id) if !id.is_empty() => {
                self.credentials.insert(id, credential);
                true
            }
            _ => false,
        }
    }

    /// Number of credentials held.
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    /// True when no credential is held.
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl FromIterator<VerifiableCredential> for MemoryCredentialLoader {
    fn from_iter<I: IntoIterator<Item = VerifiableCredential>>(iter: I) -> Self {
        let mut loader = Self::new();
        for credential in iter {
            loader.insert(credential);
        }
        loader
    }
}

impl CredentialLoader for MemoryCredentialLoader {
    async fn load(&self, uri: &str) -> Result<VerifiableCredential> {
        self.credentials
            .get(uri)
            .cloned()
            .ok_or_else(|| anyhow!("credential {uri} not found"))
    }
}

/// Accepts every credential without looking at its proof. Only the
/// structural GS1 rules apply when this verifier is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralVerifier;

impl CredentialVerifier for StructuralVerifier {
    async fn verify(&self, credential: &VerifiableCredential) -> Result<ChainCheckResult> {
        Ok(ChainCheckResult::for_credential(credential))
    }
}
