//! # Verification Service
//!
//! [`verify_credential`] resolves and walks the chain of one credential.
//! [`verify_presentation`] does the same for every credential in a
//! presentation, using the presentation itself as the inline pool. Each
//! credential is verified on its own: a failure in one never aborts or
//! taints its siblings.

use serde::Serialize;

use gs1_core::Timestamp;
use gs1_rules::ChainCheckResult;
use gs1_schema::{JsonSchemaLoader, NoSchemaLoader};
use gs1_vc::{ChainTerminal, VerifiableCredential, VerifiablePresentation};

use crate::config::VerifierConfig;
use crate::provider::{CredentialLoader, CredentialVerifier};
use crate::resolve::resolve_chain;
use crate::walk::walk_chain;

/// Everything a verification needs besides the credential itself.
pub struct VerificationRequest<L, V> {
    config: VerifierConfig,
    loader: L,
    verifier: V,
    schema_loader: Box<dyn JsonSchemaLoader>,
    now: Option<Timestamp>,
}

impl<L, V> VerificationRequest<L, V>
where
    L: CredentialLoader,
    V: CredentialVerifier,
{
    /// A request without schema documents, evaluated at the current time.
    pub fn new(config: VerifierConfig, loader: L, verifier: V) -> Self {
        Self {
            config,
            loader,
            verifier,
            schema_loader: Box::new(NoSchemaLoader),
            now: None,
        }
    }

    /// Load credential schemas through `loader`.
    pub fn with_schema_loader(mut self, loader: impl JsonSchemaLoader + 'static) -> Self {
        self.schema_loader = Box::new(loader);
        self
    }

    /// Evaluate validity windows at `now` instead of the wall clock.
    pub fn at(mut self, now: Timestamp) -> Self {
        self.now = Some(now);
        self
    }

    /// The configuration in effect.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    async fn verify_with_pool(
        &self,
        credential: VerifiableCredential,
        inline: &[VerifiableCredential],
        now: Timestamp,
    ) -> ChainReport {
        let chain = resolve_chain(credential, inline, &self.loader, &self.config).await;
        let links = walk_chain(&chain, &self.verifier, &*self.schema_loader, &self.config, now).await;
        ChainReport::new(links, chain.terminal().clone())
    }
}

// ─── Reports ─────────────────────────────────────────────────────────

/// Outcome of verifying one credential and its chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainReport {
    /// True iff every link verified.
    pub verified: bool,
    /// The credential under verification.
    pub result: ChainCheckResult,
    /// Every link, root first. The last entry equals `result`.
    pub chain: Vec<ChainCheckResult>,
    /// Why resolution stopped.
    pub terminal: ChainTerminal,
}

impl ChainReport {
    fn new(chain: Vec<ChainCheckResult>, terminal: ChainTerminal) -> Self {
        let verified = chain.iter().all(|link| link.verified);
        let result = chain
            .last()
            .cloned()
            .unwrap_or_else(|| ChainCheckResult::new("unknown", "unknown"));
        Self {
            verified,
            result,
            chain,
            terminal,
        }
    }

    /// The result for the link with `credential_id`.
    pub fn link(&self, credential_id: &str) -> Option<&ChainCheckResult> {
        self.chain.iter().find(|r| r.credential_id == credential_id)
    }
}

/// Outcome of verifying every credential in a presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationReport {
    /// True iff every credential verified.
    pub verified: bool,
    /// The presenting holder, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,
    /// One report per credential, in presentation order.
    pub credentials: Vec<ChainReport>,
}

// ─── Entry points ────────────────────────────────────────────────────

/// Verify `credential` and the chain above it.
pub async fn verify_credential<L, V>(
    request: &VerificationRequest<L, V>,
    credential: VerifiableCredential,
) -> ChainReport
where
    L: CredentialLoader,
    V: CredentialVerifier,
{
    let now = request.now.unwrap_or_else(Timestamp::now);
    let id = credential.id_or_unknown().to_string();
    let report = request.verify_with_pool(credential, &[], now).await;
    tracing::info!(credential = %id, verified = report.verified, links = report.chain.len(), "credential verified");
    report
}

/// Verify every credential in `presentation`. Parents are looked up among
/// the presentation's own credentials before the loader is asked.
pub async fn verify_presentation<L, V>(
    request: &VerificationRequest<L, V>,
    presentation: &VerifiablePresentation,
) -> PresentationReport
where
    L: CredentialLoader,
    V: CredentialVerifier,
{
    let now = request.now.unwrap_or_else(Timestamp::now);
    let pool = presentation.verifiable_credential.as_slice();
    let mut credentials = Vec::with_capacity(pool.len());
    for credential in pool {
        let report = request.verify_with_pool(credential.clone(), pool, now).await;
        tracing::debug!(
            credential = credential.id_or_unknown(),
            verified = report.verified,
            "presentation credential verified"
        );
        credentials.push(report);
    }
    let verified = !credentials.is_empty() && credentials.iter().all(|c| c.verified);
    tracing::info!(
        holder = presentation.holder.as_deref().unwrap_or("unknown"),
        credentials = credentials.len(),
        verified,
        "presentation verified"
    );
    PresentationReport {
        verified,
        holder: presentation.holder.clone(),
        credentials,
    }
}
