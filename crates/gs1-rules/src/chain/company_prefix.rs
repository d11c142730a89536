//! Key credentials extending a license or another key.
//!
//! The parent's declared type selects the checks:
//!
//! - **Key → Key** (qualified key, e.g. a serialised GTIN): both keys have
//!   the same issuer and the same primary key.
//! - **Key → license** (company prefix or identification key license): the
//!   key is issued by the licensee (or the license issuer) and its primary
//!   key starts with the license value.
//! - **License → license**: handled by
//!   [`validate_extended_license_prefix`].

use gs1_vc::{ChainLink, CredentialType};

use crate::catalog::{INVALID_ISSUER, INVALID_LICENSE_VALUE_FORMAT};
use crate::compare::compare_license_value;
use crate::issuer::{check_credential_issuers, reconcile_issuer};
use crate::result::ChainCheckResult;

use super::{begin, subject_key, validate_extended_license_prefix};

/// Validate a key (or license) against its parent.
pub fn validate_extended_company_prefix(
    credential_type: CredentialType,
    link: &ChainLink<'_>,
) -> ChainCheckResult {
    if credential_type != CredentialType::Key {
        return validate_extended_license_prefix(credential_type, link);
    }
    let (mut result, parent) = match begin(credential_type, link) {
        Ok(started) => started,
        Err(missing) => return missing,
    };
    let credential = link.credential;
    let key = subject_key(credential);

    if parent.credential_type() == Some(CredentialType::Key) {
        if !check_credential_issuers(credential, parent).verified {
            result.push_error(INVALID_ISSUER);
        }
        let parent_key = subject_key(parent);
        if key.is_none() || key != parent_key {
            result.push_error(INVALID_LICENSE_VALUE_FORMAT);
        }
    } else {
        result.record(reconcile_issuer(credential, parent));
        let license = parent.credential_subject.license_value.as_deref();
        if !compare_license_value(key.as_deref(), license) {
            result.push_error(INVALID_LICENSE_VALUE_FORMAT);
        }
    }

    if !result.verified {
        tracing::debug!(
            credential = credential.id_or_unknown(),
            parent = parent.id_or_unknown(),
            errors = result.errors.len(),
            "key edge failed"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EXTENDED_CREDENTIAL_MISSING;
    use gs1_vc::{CredentialChain, VerifiableCredential};
    use serde_json::{json, Value};

    const COMPANY: &str = "did:web:company.example";
    const MO: &str = "did:web:mo.example";

    fn vc(doc: Value) -> VerifiableCredential {
        VerifiableCredential::from_value(doc).unwrap()
    }

    fn company_prefix(license: &str) -> VerifiableCredential {
        vc(json!({
            "id": "https://registry.example/vc/license/gs1_prefix/042700051126",
            "type": ["VerifiableCredential", "GS1CompanyPrefixLicenseCredential"],
            "issuer": MO,
            "credentialSubject": {"id": COMPANY, "licenseValue": license}
        }))
    }

    fn key(id: &str, issuer: &str) -> VerifiableCredential {
        vc(json!({
            "id": format!("https://company.example/vc/key{}", id.len()),
            "type": ["VerifiableCredential", "KeyCredential"],
            "issuer": issuer,
            "credentialSubject": {"id": id}
        }))
    }

    fn validate(child: VerifiableCredential, parent: VerifiableCredential) -> ChainCheckResult {
        let chain = CredentialChain::pair(child, parent);
        let link = chain.link(0).unwrap();
        let t = link.credential.credential_type().unwrap();
        validate_extended_company_prefix(t, &link)
    }

    #[test]
    fn test_key_extends_company_prefix() {
        let result = validate(
            key("https://id.gs1.org/01/04270005112602", COMPANY),
            company_prefix("042700051126"),
        );
        assert!(result.verified, "{:?}", result.errors);
    }

    #[test]
    fn test_key_outside_company_prefix_keeps_issuer_check() {
        let result = validate(
            key("https://id.gs1.org/01/04270005112602", COMPANY),
            company_prefix("042700099"),
        );
        assert!(!result.verified);
        assert_eq!(result.errors, vec![INVALID_LICENSE_VALUE_FORMAT]);

        let result = validate(
            key("https://id.gs1.org/01/04270005112602", "did:web:rogue.example"),
            company_prefix("042700099"),
        );
        assert_eq!(result.errors, vec![INVALID_ISSUER, INVALID_LICENSE_VALUE_FORMAT]);
    }

    #[test]
    fn test_key_with_invalid_digital_link() {
        let result = validate(
            key("https://id.gs1.org/01/04270005112603", COMPANY),
            company_prefix("042700051126"),
        );
        assert_eq!(result.errors, vec![INVALID_LICENSE_VALUE_FORMAT]);
    }

    #[test]
    fn test_qualified_key_extends_key() {
        let result = validate(
            key("https://id.gs1.org/01/04270005112602/21/SN-1", COMPANY),
            key("https://id.gs1.org/01/04270005112602", COMPANY),
        );
        assert!(result.verified, "{:?}", result.errors);
    }

    #[test]
    fn test_qualified_key_requires_same_issuer_and_key() {
        let result = validate(
            key("https://id.gs1.org/01/04270005112619/21/SN-1", MO),
            key("https://id.gs1.org/01/04270005112602", COMPANY),
        );
        assert_eq!(result.errors, vec![INVALID_ISSUER, INVALID_LICENSE_VALUE_FORMAT]);
    }

    #[test]
    fn test_license_delegates_to_license_prefix() {
        let parent = vc(json!({
            "type": ["VerifiableCredential", "GS1PrefixLicenseCredential"],
            "issuer": "did:web:gs1-global.example",
            "credentialSubject": {"id": MO, "licenseValue": "0427"}
        }));
        for license in ["042700051126", "051126"] {
            let chain = CredentialChain::pair(company_prefix(license), parent.clone());
            let link = chain.link(0).unwrap();
            let t = CredentialType::CompanyPrefixLicense;
            assert_eq!(
                validate_extended_company_prefix(t, &link),
                validate_extended_license_prefix(t, &link)
            );
        }
    }

    #[test]
    fn test_missing_parent() {
        let chain = CredentialChain::new(key("https://id.gs1.org/01/04270005112603", MO));
        let link = chain.link(0).unwrap();
        let result = validate_extended_company_prefix(CredentialType::Key, &link);
        assert_eq!(result.errors, vec![EXTENDED_CREDENTIAL_MISSING]);
    }
}
