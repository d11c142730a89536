//! End-to-end verification of GS1 license chains: resolution from the
//! inline pool and the loader, the root-first walk, and presentation
//! isolation.

use anyhow::bail;
use gs1_core::Timestamp;
use gs1_rules::catalog::{
    CREDENTIAL_CHAIN_CYCLE, CREDENTIAL_CHAIN_TOO_DEEP, EXTENDED_CREDENTIAL_MISSING,
    EXTERNAL_VERIFICATION_FAILED, INVALID_ROOT_ISSUER, VALID_FROM_FUTURE,
};
use gs1_rules::ChainCheckResult;
use gs1_schema::NoSchemaLoader;
use gs1_vc::{ChainTerminal, VerifiableCredential, VerifiablePresentation};
use gs1_verify::{
    resolve_chain, verify_credential, verify_presentation, walk_chain, CredentialLoader,
    CredentialVerifier, MemoryCredentialLoader, NoCredentialLoader, StructuralVerifier,
    VerificationRequest, VerifierConfig,
};
use serde_json::{json, Value};

const GS1_GLOBAL: &str = "did:web:gs1-global.example";
const MO: &str = "did:web:mo.example";
const COMPANY: &str = "did:web:company.example";

const PREFIX_ID: &str = "https://registry.example/vc/license/gs1_prefix/0427";
const COMPANY_PREFIX_ID: &str = "https://registry.example/vc/license/gs1_prefix/042700051126";
const KEY_ID: &str = "https://company.example/vc/key/01/04270005112602";
const PRODUCT_ID: &str = "https://company.example/vc/product/01/04270005112602";

const W3C: &str = "https://www.w3.org/ns/credentials/v2";
const LICENSE_CONTEXT: &str = "https://ref.gs1.org/gs1/vc/license-context";
const DECLARATION_CONTEXT: &str = "https://ref.gs1.org/gs1/vc/declaration-context";
const PRODUCT_CONTEXT: &str = "https://ref.gs1.org/gs1/vc/product-context";

fn now() -> Timestamp {
    Timestamp::parse("2026-03-01T12:00:00Z").unwrap()
}

fn credential(doc: Value) -> VerifiableCredential {
    VerifiableCredential::from_value(doc).unwrap()
}

fn prefix_license() -> Value {
    json!({
        "@context": [W3C, LICENSE_CONTEXT],
        "id": PREFIX_ID,
        "type": ["VerifiableCredential", "GS1PrefixLicenseCredential"],
        "issuer": GS1_GLOBAL,
        "validFrom": "2024-01-01T00:00:00Z",
        "credentialSubject": {"id": MO, "licenseValue": "0427", "alternativeLicenseValue": "427"}
    })
}

fn company_prefix_license() -> Value {
    json!({
        "@context": [W3C, LICENSE_CONTEXT],
        "id": COMPANY_PREFIX_ID,
        "type": ["VerifiableCredential", "GS1CompanyPrefixLicenseCredential"],
        "issuer": MO,
        "validFrom": "2024-01-01T00:00:00Z",
        "credentialSubject": {
            "id": COMPANY,
            "licenseValue": "042700051126",
            "extendsCredential": PREFIX_ID
        }
    })
}

fn key_credential() -> Value {
    json!({
        "@context": [W3C, DECLARATION_CONTEXT],
        "id": KEY_ID,
        "type": ["VerifiableCredential", "KeyCredential"],
        "issuer": COMPANY,
        "validFrom": "2024-01-01T00:00:00Z",
        "credentialSubject": {
            "id": "https://id.gs1.org/01/04270005112602",
            "extendsCredential": COMPANY_PREFIX_ID
        }
    })
}

fn product_credential() -> Value {
    json!({
        "@context": [W3C, DECLARATION_CONTEXT, PRODUCT_CONTEXT],
        "id": PRODUCT_ID,
        "type": ["VerifiableCredential", "ProductDataCredential"],
        "issuer": COMPANY,
        "validFrom": "2024-01-01T00:00:00Z",
        "credentialSubject": {
            "id": "https://id.gs1.org/01/04270005112602",
            "keyAuthorization": KEY_ID,
            "product": {"gs1:productDescription": "Sparkling water 500ml"}
        }
    })
}

fn registry() -> MemoryCredentialLoader {
    [prefix_license(), company_prefix_license(), key_credential()]
        .into_iter()
        .map(credential)
        .collect()
}

fn request<L: CredentialLoader>(
    loader: L,
    config: VerifierConfig,
) -> VerificationRequest<L, StructuralVerifier> {
    VerificationRequest::new(config, loader, StructuralVerifier).at(now())
}

/// Rejects one credential id; errors on another.
struct SelectiveVerifier {
    reject: &'static str,
    fail: &'static str,
}

impl CredentialVerifier for SelectiveVerifier {
    async fn verify(&self, credential: &VerifiableCredential) -> anyhow::Result<ChainCheckResult> {
        let id = credential.id_or_unknown();
        if id == self.fail {
            bail!("status list unreachable");
        }
        let mut result = ChainCheckResult::for_credential(credential);
        if id == self.reject {
            result.verified = false;
        }
        Ok(result)
    }
}

#[tokio::test]
async fn test_valid_key_chain() {
    let config = VerifierConfig::default().with_gs1_global_did(GS1_GLOBAL);
    let report = verify_credential(&request(registry(), config), credential(key_credential())).await;
    assert!(report.verified, "{:#?}", report.chain);
    assert_eq!(report.chain.len(), 3);
    assert_eq!(report.chain[0].credential_id, PREFIX_ID);
    assert_eq!(report.result.credential_id, KEY_ID);
    assert_eq!(report.terminal, ChainTerminal::Root);
}

#[tokio::test]
async fn test_product_data_resolves_through_key_authorization() {
    let report = verify_credential(
        &request(registry(), VerifierConfig::default()),
        credential(product_credential()),
    )
    .await;
    assert!(report.verified, "{:#?}", report.chain);
    assert_eq!(report.chain.len(), 4);
    assert_eq!(report.result.credential_name, "ProductDataCredential");
}

#[tokio::test]
async fn test_missing_parent_yields_exactly_one_error() {
    // validFrom in the future would add GS1-600 if the link were checked.
    let mut doc = key_credential();
    doc["validFrom"] = json!("2030-01-01T00:00:00Z");
    let report = verify_credential(
        &request(NoCredentialLoader, VerifierConfig::default()),
        credential(doc),
    )
    .await;
    assert!(!report.verified);
    assert_eq!(report.chain.len(), 1);
    assert_eq!(report.result.errors, vec![EXTENDED_CREDENTIAL_MISSING]);
    assert!(matches!(report.terminal, ChainTerminal::Unresolved { .. }));
}

#[tokio::test]
async fn test_undeclared_parent_yields_exactly_one_error() {
    // Expired, so GS1-601 would appear if the subject checks ran.
    let mut doc = key_credential();
    doc["validUntil"] = json!("2025-01-01T00:00:00Z");
    doc["credentialSubject"]
        .as_object_mut()
        .unwrap()
        .remove("extendsCredential");
    let report = verify_credential(&request(registry(), VerifierConfig::default()), credential(doc)).await;
    assert_eq!(report.terminal, ChainTerminal::Root);
    assert_eq!(report.chain.len(), 1);
    assert_eq!(report.result.errors, vec![EXTENDED_CREDENTIAL_MISSING]);
}

#[tokio::test]
async fn test_missing_root_only_fails_top_link() {
    let loader: MemoryCredentialLoader = [credential(company_prefix_license())].into_iter().collect();
    let report = verify_credential(&request(loader, VerifierConfig::default()), credential(key_credential())).await;
    assert_eq!(report.chain.len(), 2);
    assert_eq!(report.chain[0].errors, vec![EXTENDED_CREDENTIAL_MISSING]);
    assert!(report.result.verified, "{:?}", report.result.errors);
    assert!(!report.verified);
}

#[tokio::test]
async fn test_cycle_is_reported() {
    let mut prefix = prefix_license();
    prefix["credentialSubject"]["extendsCredential"] = json!(KEY_ID);
    let loader: MemoryCredentialLoader = [credential(prefix), credential(company_prefix_license())]
        .into_iter()
        .collect();
    let report = verify_credential(&request(loader, VerifierConfig::default()), credential(key_credential())).await;
    assert_eq!(report.terminal, ChainTerminal::Cycle { uri: KEY_ID.into() });
    assert_eq!(report.chain[0].errors, vec![CREDENTIAL_CHAIN_CYCLE]);
}

#[tokio::test]
async fn test_depth_limit_is_reported() {
    let config = VerifierConfig::default().with_max_chain_depth(2);
    let report = verify_credential(&request(registry(), config), credential(key_credential())).await;
    assert_eq!(report.chain.len(), 2);
    assert_eq!(report.chain[0].errors, vec![CREDENTIAL_CHAIN_TOO_DEEP]);
    assert!(report.result.verified);
}

#[tokio::test]
async fn test_root_must_be_issued_by_gs1_global() {
    let config = VerifierConfig::default().with_gs1_global_did("did:web:someone-else.example");
    let report = verify_credential(&request(registry(), config), credential(key_credential())).await;
    assert_eq!(report.chain[0].errors, vec![INVALID_ROOT_ISSUER]);
    assert!(report.result.verified);
}

#[tokio::test]
async fn test_valid_from_boundary() {
    let loader = registry();
    let config = VerifierConfig::default();

    let mut at_now = key_credential();
    at_now["validFrom"] = json!(now().to_iso8601());
    let chain = resolve_chain(credential(at_now), &[], &loader, &config).await;
    let results = walk_chain(&chain, &StructuralVerifier, &NoSchemaLoader, &config, now()).await;
    assert!(results[2].verified, "{:?}", results[2].errors);

    let mut one_second_later = key_credential();
    one_second_later["validFrom"] = json!(now().offset_secs(1).to_iso8601());
    let chain = resolve_chain(credential(one_second_later), &[], &loader, &config).await;
    let results = walk_chain(&chain, &StructuralVerifier, &NoSchemaLoader, &config, now()).await;
    assert_eq!(results[2].errors, vec![VALID_FROM_FUTURE]);
    assert!(results[0].verified && results[1].verified);
}

#[tokio::test]
async fn test_external_verifier_failures_are_per_link() {
    let verifier = SelectiveVerifier {
        reject: COMPANY_PREFIX_ID,
        fail: KEY_ID,
    };
    let request = VerificationRequest::new(VerifierConfig::default(), registry(), verifier).at(now());
    let report = verify_credential(&request, credential(key_credential())).await;
    assert!(report.chain[0].verified);
    assert_eq!(report.chain[1].errors, vec![EXTERNAL_VERIFICATION_FAILED]);
    assert_eq!(report.chain[2].errors, vec![EXTERNAL_VERIFICATION_FAILED]);
}

#[tokio::test]
async fn test_presentation_siblings_are_isolated() {
    let mut rogue = key_credential();
    rogue["id"] = json!("https://rogue.example/vc/key/01/04270005112619");
    rogue["issuer"] = json!("did:web:rogue.example");
    rogue["credentialSubject"]["id"] = json!("https://id.gs1.org/01/04270005112619");
    rogue["credentialSubject"]["extendsCredential"] = json!("https://rogue.example/vc/missing");

    let presentation: VerifiablePresentation = serde_json::from_value(json!({
        "@context": [W3C],
        "type": ["VerifiablePresentation"],
        "holder": COMPANY,
        "verifiableCredential": [
            key_credential(),
            rogue,
            company_prefix_license(),
            prefix_license()
        ]
    }))
    .unwrap();

    // Every parent of the genuine key is inline; the loader knows nothing.
    let report = verify_presentation(&request(NoCredentialLoader, VerifierConfig::default()), &presentation).await;
    assert_eq!(report.credentials.len(), 4);
    assert!(!report.verified);
    assert!(report.credentials[0].verified, "{:#?}", report.credentials[0].chain);
    assert_eq!(report.credentials[1].result.errors, vec![EXTENDED_CREDENTIAL_MISSING]);
    assert!(report.credentials[2].verified);
    assert!(report.credentials[3].verified);
    assert_eq!(report.holder.as_deref(), Some(COMPANY));
}

#[tokio::test]
async fn test_report_serialization() {
    let report = verify_credential(
        &request(NoCredentialLoader, VerifierConfig::default()),
        credential(key_credential()),
    )
    .await;
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["verified"], false);
    assert_eq!(json["result"]["credentialId"], KEY_ID);
    assert_eq!(json["result"]["errors"][0]["code"], "GS1-110");
    assert_eq!(json["terminal"]["kind"], "unresolved");
}
