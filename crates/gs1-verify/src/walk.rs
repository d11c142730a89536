//! # Chain Walk
//!
//! Validates a resolved arena root first. Every link gets its own
//! [`ChainCheckResult`]; a failing parent never marks its child invalid,
//! so each edge stands or falls on its own.
//!
//! ## Per-link order
//!
//! 1. Missing parent: when resolution stopped above this link, the
//!    terminal's rule (GS1-110, GS1-140 or GS1-141) is the only finding.
//!    A non-root type that declares no parent at all gets GS1-110 alone.
//! 2. External verifier (GS1-400 on rejection or failure).
//! 3. JSON Schema, when enabled.
//! 4. Subject predicates at `now`.
//! 5. Root anchoring against the configured GS1 Global DID.
//! 6. The chain rule for the credential's type.

use gs1_core::Timestamp;
use gs1_rules::catalog::{
    EXTENDED_CREDENTIAL_MISSING, EXTERNAL_VERIFICATION_FAILED, INVALID_ROOT_ISSUER,
    SCHEMA_VALIDATION_FAILED,
};
use gs1_rules::subject::check_subject;
use gs1_rules::{chain_rule, validate_link, ChainCheckResult};
use gs1_schema::{JsonSchemaLoader, SchemaValidator};
use gs1_vc::{ChainLink, CredentialChain, CredentialType};

use crate::config::VerifierConfig;
use crate::error::ChainError;
use crate::provider::CredentialVerifier;

/// Validate every link of `chain`, root first.
pub async fn walk_chain<V>(
    chain: &CredentialChain,
    verifier: &V,
    schema: &dyn JsonSchemaLoader,
    config: &VerifierConfig,
    now: Timestamp,
) -> Vec<ChainCheckResult>
where
    V: CredentialVerifier,
{
    let mut results = Vec::with_capacity(chain.len());
    for link in chain.links_root_first() {
        let result = check_link(chain, link, verifier, schema, config, now).await;
        tracing::debug!(
            credential = %result.credential_id,
            credential_type = %result.credential_name,
            verified = result.verified,
            errors = result.errors.len(),
            "link checked"
        );
        results.push(result);
    }
    results
}

async fn check_link<V>(
    chain: &CredentialChain,
    link: ChainLink<'_>,
    verifier: &V,
    schema: &dyn JsonSchemaLoader,
    config: &VerifierConfig,
    now: Timestamp,
) -> ChainCheckResult
where
    V: CredentialVerifier,
{
    let credential = link.credential;
    let mut result = ChainCheckResult::for_credential(credential);

    if chain.parent_missing(link.index) {
        if let Some(err) = ChainError::from_terminal(chain.terminal()) {
            tracing::debug!(credential = credential.id_or_unknown(), error = %err, "extended credential missing");
            result.push_error(err.descriptor());
            return result;
        }
    }

    if link.extended.is_none() && requires_parent(link) {
        tracing::debug!(credential = credential.id_or_unknown(), "no extended credential declared");
        result.push_error(EXTENDED_CREDENTIAL_MISSING);
        return result;
    }

    match verifier.verify(credential).await {
        Ok(outcome) if outcome.verified => {}
        Ok(outcome) => {
            tracing::warn!(credential = credential.id_or_unknown(), "external verification rejected credential");
            result.push_error(EXTERNAL_VERIFICATION_FAILED);
            result.merge(outcome);
        }
        Err(e) => {
            tracing::warn!(credential = credential.id_or_unknown(), error = %e, "external verification failed");
            result.push_error(EXTERNAL_VERIFICATION_FAILED);
        }
    }

    if config.full_json_schema_validation {
        let checked = SchemaValidator::for_credential(schema, credential)
            .and_then(|validator| validator.check_schema(credential));
        match checked {
            Ok(outcome) => result.merge(outcome),
            Err(e) => {
                tracing::warn!(credential = credential.id_or_unknown(), error = %e, "schema validation could not run");
                result.push_error(SCHEMA_VALIDATION_FAILED);
            }
        }
    }

    for check in check_subject(credential, now) {
        result.record(check);
    }

    if credential.credential_type() == Some(CredentialType::PrefixLicense) {
        if let Some(did) = config.gs1_global_did.as_deref() {
            if credential.issuer_id() != did {
                tracing::debug!(
                    credential = credential.id_or_unknown(),
                    issuer = credential.issuer_id(),
                    expected = did,
                    "prefix license not issued by GS1 Global"
                );
                result.push_error(INVALID_ROOT_ISSUER);
            }
        }
    }

    match validate_link(&link) {
        Ok(outcome) => result.merge(outcome),
        Err(e) => {
            tracing::debug!(credential = credential.id_or_unknown(), error = %e, "no chain rule");
            result.push_error(e.descriptor());
        }
    }

    result
}

/// True when the credential's type is not the root of the hierarchy.
fn requires_parent(link: ChainLink<'_>) -> bool {
    link.credential
        .credential_type()
        .and_then(|credential_type| chain_rule(credential_type).ok())
        .is_some_and(|entry| !entry.is_root())
}
