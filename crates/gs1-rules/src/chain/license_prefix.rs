//! License extending a prefix license: company prefix licenses and
//! identification key licenses.

use gs1_vc::{ChainLink, CredentialType};

use crate::catalog::INVALID_LICENSE_VALUE_FORMAT;
use crate::compare::compare_license_value;
use crate::issuer::reconcile_issuer;
use crate::result::ChainCheckResult;

use super::begin;

/// The license is issued by the licensee of the prefix (or by the same
/// issuer) and its value lies inside the prefix.
pub fn validate_extended_license_prefix(
    credential_type: CredentialType,
    link: &ChainLink<'_>,
) -> ChainCheckResult {
    let (mut result, parent) = match begin(credential_type, link) {
        Ok(started) => started,
        Err(missing) => return missing,
    };

    result.record(reconcile_issuer(link.credential, parent));

    let child_value = link.credential.credential_subject.license_value.as_deref();
    let parent_value = parent.credential_subject.license_value.as_deref();
    if !compare_license_value(child_value, parent_value) {
        result.push_error(INVALID_LICENSE_VALUE_FORMAT);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EXTENDED_CREDENTIAL_MISSING, INVALID_ISSUER};
    use gs1_vc::{CredentialChain, VerifiableCredential};
    use serde_json::json;

    fn prefix() -> VerifiableCredential {
        VerifiableCredential::from_value(json!({
            "id": "https://registry.example/vc/license/gs1_prefix/0427",
            "type": ["VerifiableCredential", "GS1PrefixLicenseCredential"],
            "issuer": "did:web:gs1-global.example",
            "credentialSubject": {"id": "did:web:mo.example", "licenseValue": "0427"}
        }))
        .unwrap()
    }

    fn company_prefix(issuer: &str, license: &str) -> VerifiableCredential {
        VerifiableCredential::from_value(json!({
            "id": "https://registry.example/vc/license/gs1_prefix/042700051126",
            "type": ["VerifiableCredential", "GS1CompanyPrefixLicenseCredential"],
            "issuer": issuer,
            "credentialSubject": {
                "id": "did:web:company.example",
                "licenseValue": license,
                "extendsCredential": "https://registry.example/vc/license/gs1_prefix/0427"
            }
        }))
        .unwrap()
    }

    fn validate(child: VerifiableCredential, parent: Option<VerifiableCredential>) -> ChainCheckResult {
        let chain = match parent {
            Some(parent) => CredentialChain::pair(child, parent),
            None => CredentialChain::new(child),
        };
        let link = chain.link(0).unwrap();
        validate_extended_license_prefix(CredentialType::CompanyPrefixLicense, &link)
    }

    #[test]
    fn test_valid_edge() {
        let result = validate(company_prefix("did:web:mo.example", "042700051126"), Some(prefix()));
        assert!(result.verified, "{:?}", result.errors);
        assert_eq!(result.credential_name, "GS1CompanyPrefixLicenseCredential");
    }

    #[test]
    fn test_license_outside_prefix() {
        let result = validate(company_prefix("did:web:mo.example", "0428000511"), Some(prefix()));
        assert_eq!(result.errors, vec![INVALID_LICENSE_VALUE_FORMAT]);
    }

    #[test]
    fn test_errors_accumulate() {
        let result = validate(company_prefix("did:web:rogue.example", "0428000511"), Some(prefix()));
        assert_eq!(result.errors, vec![INVALID_ISSUER, INVALID_LICENSE_VALUE_FORMAT]);
    }

    #[test]
    fn test_missing_parent_short_circuits() {
        let result = validate(company_prefix("did:web:rogue.example", "0428000511"), None);
        assert_eq!(result.errors, vec![EXTENDED_CREDENTIAL_MISSING]);
    }
}
