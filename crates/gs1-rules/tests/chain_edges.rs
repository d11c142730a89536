//! Edge validation over full prefix -> company prefix -> key and
//! prefix -> identification key license -> key chains.

use gs1_rules::catalog::{
    EXTENDED_CREDENTIAL_MISSING, INVALID_ISSUER, INVALID_LICENSE_VALUE_FORMAT,
};
use gs1_rules::{validate_link, ChainCheckResult};
use gs1_vc::{ChainTerminal, CredentialChain, VerifiableCredential};
use serde_json::json;

const GS1_GLOBAL: &str = "did:web:gs1-global.example";
const MO: &str = "did:web:mo.example";
const COMPANY: &str = "did:web:company.example";

fn prefix_license() -> VerifiableCredential {
    VerifiableCredential::from_value(json!({
        "id": "https://registry.example/vc/license/gs1_prefix/0427",
        "type": ["VerifiableCredential", "GS1PrefixLicenseCredential"],
        "issuer": GS1_GLOBAL,
        "credentialSubject": {"id": MO, "licenseValue": "0427", "alternativeLicenseValue": "427"}
    }))
    .unwrap()
}

fn company_prefix_license(license_value: &str) -> VerifiableCredential {
    VerifiableCredential::from_value(json!({
        "id": "https://registry.example/vc/license/gs1_prefix/042700051126",
        "type": ["VerifiableCredential", "GS1CompanyPrefixLicenseCredential"],
        "issuer": MO,
        "credentialSubject": {
            "id": COMPANY,
            "licenseValue": license_value,
            "extendsCredential": "https://registry.example/vc/license/gs1_prefix/0427"
        }
    }))
    .unwrap()
}

fn identification_key_license(license_value: &str) -> VerifiableCredential {
    VerifiableCredential::from_value(json!({
        "id": format!("https://registry.example/vc/license/gs1_key/{license_value}"),
        "type": ["VerifiableCredential", "GS1IdentificationKeyLicenseCredential"],
        "issuer": MO,
        "credentialSubject": {
            "id": COMPANY,
            "licenseValue": license_value,
            "extendsCredential": "https://registry.example/vc/license/gs1_prefix/0427"
        }
    }))
    .unwrap()
}

fn key_credential(issuer: &str) -> VerifiableCredential {
    VerifiableCredential::from_value(json!({
        "id": "https://company.example/vc/key/01/04270005112602",
        "type": ["VerifiableCredential", "KeyCredential"],
        "issuer": issuer,
        "credentialSubject": {
            "id": "https://id.gs1.org/01/04270005112602",
            "extendsCredential": "https://registry.example/vc/license/gs1_prefix/042700051126"
        }
    }))
    .unwrap()
}

fn chain(company_license: &str, key_issuer: &str) -> CredentialChain {
    let mut chain = CredentialChain::new(key_credential(key_issuer));
    chain.push_parent(company_prefix_license(company_license));
    chain.push_parent(prefix_license());
    chain
}

fn key_license_chain(key_license: &str) -> CredentialChain {
    let mut chain = CredentialChain::new(key_credential(COMPANY));
    chain.push_parent(identification_key_license(key_license));
    chain.push_parent(prefix_license());
    chain
}

/// Results in root-first order: prefix, company prefix, key.
fn validate_all(chain: &CredentialChain) -> Vec<ChainCheckResult> {
    chain
        .links_root_first()
        .map(|link| validate_link(&link).unwrap())
        .collect()
}

#[test]
fn test_valid_three_link_chain() {
    let results = validate_all(&chain("042700051126", COMPANY));
    assert_eq!(results.len(), 3);
    for result in &results {
        assert!(result.verified, "{}: {:?}", result.credential_name, result.errors);
    }
    assert_eq!(results[0].credential_name, "GS1PrefixLicenseCredential");
    assert_eq!(results[2].credential_id, "https://company.example/vc/key/01/04270005112602");
}

#[test]
fn test_corrupt_middle_link_fails_only_its_edges() {
    // Outside the prefix: fails the company prefix edge. The key no longer
    // lies in the company prefix either, so that edge fails too. The root
    // edge is untouched.
    let results = validate_all(&chain("0428000511", COMPANY));
    assert!(results[0].verified, "{:?}", results[0].errors);
    assert_eq!(results[1].errors, vec![INVALID_LICENSE_VALUE_FORMAT]);
    assert_eq!(results[2].errors, vec![INVALID_LICENSE_VALUE_FORMAT]);
}

#[test]
fn test_corrupt_middle_link_inside_prefix() {
    // Still inside the prefix, but no longer a prefix of the key.
    let results = validate_all(&chain("042799", COMPANY));
    assert!(results[0].verified);
    assert!(results[1].verified, "{:?}", results[1].errors);
    assert_eq!(results[2].errors, vec![INVALID_LICENSE_VALUE_FORMAT]);
}

#[test]
fn test_key_outside_license_still_checks_issuer() {
    let results = validate_all(&chain("042799", "did:web:rogue.example"));
    assert_eq!(results[2].errors, vec![INVALID_ISSUER, INVALID_LICENSE_VALUE_FORMAT]);
    assert!(!results[2].verified);
}

#[test]
fn test_unresolved_parent_yields_single_error() {
    let mut chain = CredentialChain::new(key_credential(COMPANY));
    chain.terminate(ChainTerminal::Unresolved {
        uri: "https://registry.example/vc/license/gs1_prefix/042700051126".into(),
        reason: "not found".into(),
    });
    let results = validate_all(&chain);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].errors, vec![EXTENDED_CREDENTIAL_MISSING]);
}

#[test]
fn test_valid_identification_key_license_chain() {
    let results = validate_all(&key_license_chain("04270005112602"));
    for result in &results {
        assert!(result.verified, "{}: {:?}", result.credential_name, result.errors);
    }
    assert_eq!(results[1].credential_name, "GS1IdentificationKeyLicenseCredential");
}

#[test]
fn test_identification_key_license_outside_prefix() {
    let results = validate_all(&key_license_chain("04280005112602"));
    assert!(results[0].verified);
    assert_eq!(results[1].errors, vec![INVALID_LICENSE_VALUE_FORMAT]);
}

#[test]
fn test_key_outside_identification_key_license() {
    // The license is inside the prefix but names a different GTIN.
    let results = validate_all(&key_license_chain("04270005112619"));
    assert!(results[1].verified, "{:?}", results[1].errors);
    assert_eq!(results[2].errors, vec![INVALID_LICENSE_VALUE_FORMAT]);
}
