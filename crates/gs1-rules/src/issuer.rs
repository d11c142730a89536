//! # Issuer Reconciliation
//!
//! Two ways a child credential's issuer can be tied to its parent:
//!
//! 1. **Issuer to subject**: the child is issued by the party the parent
//!    licenses (`child.issuer == parent.credentialSubject.id`).
//! 2. **Same issuer**: one authority issued both credentials.
//!
//! [`reconcile_issuer`] tries (1) first and only falls back to (2) when
//! it fails. When both fail a single [`INVALID_ISSUER`] is reported.

use gs1_vc::{CredentialSubject, VerifiableCredential};

use crate::catalog::INVALID_ISSUER;
use crate::result::RuleCheckResult;

/// The child's issuer equals the parent subject's id.
pub fn check_issuer_to_subject_id(
    child: &VerifiableCredential,
    parent_subject: &CredentialSubject,
) -> RuleCheckResult {
    let ok = parent_subject.id.as_deref() == Some(child.issuer_id()) && !child.issuer_id().is_empty();
    RuleCheckResult::check(ok, INVALID_ISSUER)
}

/// Both credentials have the same issuer.
pub fn check_credential_issuers(
    child: &VerifiableCredential,
    parent: &VerifiableCredential,
) -> RuleCheckResult {
    let ok = !child.issuer_id().is_empty() && child.issuer_id() == parent.issuer_id();
    RuleCheckResult::check(ok, INVALID_ISSUER)
}

/// Issuer-to-subject, falling back to same-issuer.
pub fn reconcile_issuer(
    child: &VerifiableCredential,
    parent: &VerifiableCredential,
) -> RuleCheckResult {
    let primary = check_issuer_to_subject_id(child, &parent.credential_subject);
    if primary.verified {
        return primary;
    }
    tracing::debug!(
        credential = child.id_or_unknown(),
        issuer = child.issuer_id(),
        "issuer does not match parent subject, falling back to issuer comparison"
    );
    check_credential_issuers(child, parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vc(issuer: &str, subject_id: &str) -> VerifiableCredential {
        VerifiableCredential::from_value(json!({
            "type": ["VerifiableCredential", "GS1CompanyPrefixLicenseCredential"],
            "issuer": issuer,
            "credentialSubject": {"id": subject_id}
        }))
        .unwrap()
    }

    #[test]
    fn test_issuer_to_subject() {
        let parent = vc("did:web:gs1-global.example", "did:web:mo.example");
        let child = vc("did:web:mo.example", "did:web:company.example");
        assert!(check_issuer_to_subject_id(&child, &parent.credential_subject).verified);
        assert!(!check_credential_issuers(&child, &parent).verified);
        assert!(reconcile_issuer(&child, &parent).verified);
    }

    #[test]
    fn test_fallback_to_same_issuer() {
        let parent = vc("did:web:mo.example", "did:web:company.example");
        let child = vc("did:web:mo.example", "https://id.gs1.org/01/04270005112602");
        assert!(!check_issuer_to_subject_id(&child, &parent.credential_subject).verified);
        assert!(reconcile_issuer(&child, &parent).verified);
    }

    #[test]
    fn test_both_fail_reports_invalid_issuer() {
        let parent = vc("did:web:mo.example", "did:web:company.example");
        let child = vc("did:web:intruder.example", "did:web:other.example");
        let result = reconcile_issuer(&child, &parent);
        assert!(!result.verified);
        assert_eq!(result.rule, Some(INVALID_ISSUER));
    }

    #[test]
    fn test_empty_issuer_never_matches() {
        let parent = vc("", "");
        let child = vc("", "");
        assert!(!reconcile_issuer(&child, &parent).verified);
    }
}
