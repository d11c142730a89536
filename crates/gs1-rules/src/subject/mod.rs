//! # Subject Predicates
//!
//! Checks that need only the credential itself, no parent: validity
//! window, `@context`, Digital Link subjects and license value shape.
//! Each returns a [`RuleCheckResult`](crate::result::RuleCheckResult) and
//! never fails with an error.

pub mod context;
pub mod dates;
pub mod digital_link;
pub mod license;

use gs1_core::Timestamp;
use gs1_vc::VerifiableCredential;

use crate::result::RuleCheckResult;

pub use context::check_credential_context;
pub use dates::{check_valid_from, check_valid_until};
pub use digital_link::{check_same_as_digital_link, check_subject_id_digital_link};
pub use license::{check_alternative_license_value, check_prefix_license_value};

/// The subject predicates that apply to `credential` given its type.
///
/// The prefix license value check is not included: it is dispatched
/// through the rules manager as the root rule.
pub fn check_subject(credential: &VerifiableCredential, now: Timestamp) -> Vec<RuleCheckResult> {
    let subject = &credential.credential_subject;
    let mut results = vec![
        check_valid_from(credential, now),
        check_valid_until(credential, now),
        check_credential_context(credential),
    ];
    match credential.credential_type() {
        Some(t) if t.is_license() => results.push(check_alternative_license_value(subject)),
        Some(_) => {
            results.push(check_subject_id_digital_link(subject));
            results.push(check_same_as_digital_link(subject));
        }
        None => {}
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_credential_predicates() {
        let key = VerifiableCredential::from_value(json!({
            "@context": [context::W3C_CREDENTIALS_V2, context::GS1_DECLARATION_CONTEXT],
            "type": ["VerifiableCredential", "KeyCredential"],
            "issuer": "did:web:company.example",
            "validFrom": "2024-01-01T00:00:00Z",
            "credentialSubject": {"id": "https://id.gs1.org/01/04270005112603"}
        }))
        .unwrap();
        let now = Timestamp::parse("2026-01-01T00:00:00Z").unwrap();
        let failed: Vec<_> = check_subject(&key, now)
            .into_iter()
            .filter_map(|r| r.rule)
            .map(|r| r.code)
            .collect();
        assert_eq!(failed, vec!["GS1-300"]);
    }

    #[test]
    fn test_license_predicates() {
        let license = VerifiableCredential::from_value(json!({
            "@context": [context::W3C_CREDENTIALS_V2, context::GS1_LICENSE_CONTEXT],
            "type": ["VerifiableCredential", "GS1CompanyPrefixLicenseCredential"],
            "issuer": "did:web:mo.example",
            "validUntil": "2025-01-01T00:00:00Z",
            "credentialSubject": {"id": "did:web:company.example", "licenseValue": "0562", "alternativeLicenseValue": "562"}
        }))
        .unwrap();
        let now = Timestamp::parse("2026-01-01T00:00:00Z").unwrap();
        let failed: Vec<_> = check_subject(&license, now)
            .into_iter()
            .filter_map(|r| r.rule)
            .map(|r| r.code)
            .collect();
        assert_eq!(failed, vec!["GS1-601"]);
    }
}
