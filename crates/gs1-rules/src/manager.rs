//! # Rules Manager
//!
//! Dispatch from a [`RuleKey`] to its validator. Validators come in two
//! shapes: subject predicates that need only the credential subject, and
//! chain validators that need the resolved link. [`RuleValidator`] keeps
//! the two apart so each call site passes exactly what its validator
//! takes.

use gs1_vc::{ChainLink, CredentialSubject, CredentialType};

use crate::catalog::INVALID_EXTENDED_CREDENTIAL_TYPE;
use crate::chain::{
    validate_extended_company_prefix, validate_extended_key, validate_extended_key_data,
    validate_extended_license_prefix,
};
use crate::chain_rules::{chain_rule, RuleKey};
use crate::error::RuleError;
use crate::result::{ChainCheckResult, RuleCheckResult};
use crate::subject::check_prefix_license_value;

/// Validator over a credential subject alone.
pub type SubjectValidator = fn(&CredentialSubject) -> RuleCheckResult;

/// Validator over a resolved chain link.
pub type ChainValidator = fn(CredentialType, &ChainLink<'_>) -> ChainCheckResult;

/// A validator and the input shape it takes.
#[derive(Clone, Copy)]
pub enum RuleValidator {
    /// Needs only the credential subject.
    Subject(SubjectValidator),
    /// Needs the credential and its resolved parent.
    Chain(ChainValidator),
}

/// The validator registered under `key`.
pub fn validator(key: RuleKey) -> RuleValidator {
    match key {
        RuleKey::PrefixLicense => RuleValidator::Subject(check_prefix_license_value),
        RuleKey::ExtendedLicensePrefix => RuleValidator::Chain(validate_extended_license_prefix),
        RuleKey::ExtendedCompanyPrefix => RuleValidator::Chain(validate_extended_company_prefix),
        RuleKey::ExtendedKey => RuleValidator::Chain(validate_extended_key),
        RuleKey::ExtendedKeyData => RuleValidator::Chain(validate_extended_key_data),
    }
}

/// Run the rule governing `link` and return the child's result.
///
/// The parent's declared type is checked against the rule table before
/// the edge validator runs; a parent of the wrong type is reported alone.
/// Fails only when the credential has no GS1 type.
pub fn validate_link(link: &ChainLink<'_>) -> Result<ChainCheckResult, RuleError> {
    let credential = link.credential;
    let credential_type = credential
        .credential_type()
        .ok_or_else(|| RuleError::UnknownCredentialType {
            credential_id: credential.id_or_unknown().to_string(),
        })?;
    let entry = chain_rule(credential_type)?;

    if let Some(parent) = link.extended {
        let permitted = parent
            .credential_type()
            .is_some_and(|parent_type| entry.permits_parent(parent_type));
        if !permitted {
            let mut result = ChainCheckResult::new(credential.id_or_unknown(), credential_type.name());
            result.push_error(INVALID_EXTENDED_CREDENTIAL_TYPE);
            return Ok(result);
        }
    }

    let key = entry.rule_key();
    tracing::trace!(credential = credential.id_or_unknown(), rule = %key, "dispatching rule");
    Ok(match validator(key) {
        RuleValidator::Subject(check) => {
            let mut result = ChainCheckResult::new(credential.id_or_unknown(), credential_type.name());
            result.record(check(&credential.credential_subject));
            result
        }
        RuleValidator::Chain(validate) => validate(credential_type, link),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EXTENDED_CREDENTIAL_MISSING, INVALID_PREFIX_LICENSE_VALUE};
    use gs1_vc::{CredentialChain, VerifiableCredential};
    use serde_json::json;

    fn license(gs1_type: &str, license_value: &str, issuer: &str, subject: &str) -> VerifiableCredential {
        VerifiableCredential::from_value(json!({
            "id": format!("https://registry.example/vc/license/{license_value}"),
            "type": ["VerifiableCredential", gs1_type],
            "issuer": issuer,
            "credentialSubject": {"id": subject, "licenseValue": license_value}
        }))
        .unwrap()
    }

    #[test]
    fn test_validator_shapes() {
        assert!(matches!(validator(RuleKey::PrefixLicense), RuleValidator::Subject(_)));
        for key in [
            RuleKey::ExtendedLicensePrefix,
            RuleKey::ExtendedCompanyPrefix,
            RuleKey::ExtendedKey,
            RuleKey::ExtendedKeyData,
        ] {
            assert!(matches!(validator(key), RuleValidator::Chain(_)), "{key}");
        }
    }

    #[test]
    fn test_root_uses_subject_rule() {
        let chain = CredentialChain::new(license(
            "GS1PrefixLicenseCredential",
            "04270",
            "did:web:gs1-global.example",
            "did:web:mo.example",
        ));
        let result = validate_link(&chain.link(0).unwrap()).unwrap();
        assert_eq!(result.errors, vec![INVALID_PREFIX_LICENSE_VALUE]);
    }

    #[test]
    fn test_company_prefix_dispatch() {
        let chain = CredentialChain::pair(
            license("GS1CompanyPrefixLicenseCredential", "042700051126", "did:web:mo.example", "did:web:company.example"),
            license("GS1PrefixLicenseCredential", "0427", "did:web:gs1-global.example", "did:web:mo.example"),
        );
        let result = validate_link(&chain.link(0).unwrap()).unwrap();
        assert!(result.verified, "{:?}", result.errors);
    }

    #[test]
    fn test_wrong_parent_type() {
        let chain = CredentialChain::pair(
            license("GS1CompanyPrefixLicenseCredential", "042700051126", "did:web:mo.example", "did:web:company.example"),
            license("GS1CompanyPrefixLicenseCredential", "0427", "did:web:gs1-global.example", "did:web:mo.example"),
        );
        let result = validate_link(&chain.link(0).unwrap()).unwrap();
        assert_eq!(result.errors, vec![INVALID_EXTENDED_CREDENTIAL_TYPE]);
    }

    #[test]
    fn test_missing_parent_reported_by_edge_validator() {
        let chain = CredentialChain::new(license(
            "GS1CompanyPrefixLicenseCredential",
            "042700051126",
            "did:web:mo.example",
            "did:web:company.example",
        ));
        let result = validate_link(&chain.link(0).unwrap()).unwrap();
        assert_eq!(result.errors, vec![EXTENDED_CREDENTIAL_MISSING]);
    }

    #[test]
    fn test_unknown_type_is_structural() {
        let chain = CredentialChain::new(license(
            "DataCredential",
            "1",
            "did:web:a.example",
            "did:web:b.example",
        ));
        let err = validate_link(&chain.link(0).unwrap()).unwrap_err();
        assert!(matches!(err, RuleError::UnknownCredentialType { .. }));
        assert_eq!(err.descriptor().code, "GS1-120");
    }
}
