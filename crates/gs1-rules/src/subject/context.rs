//! `@context` requirements per credential type.

use gs1_vc::{CredentialType, VerifiableCredential};

use crate::catalog::INVALID_CONTEXT;
use crate::result::RuleCheckResult;

/// W3C VC Data Model 2.0 base context.
pub const W3C_CREDENTIALS_V2: &str = "https://www.w3.org/ns/credentials/v2";
/// GS1 license vocabulary.
pub const GS1_LICENSE_CONTEXT: &str = "https://ref.gs1.org/gs1/vc/license-context";
/// GS1 declaration vocabulary (keys and data).
pub const GS1_DECLARATION_CONTEXT: &str = "https://ref.gs1.org/gs1/vc/declaration-context";
/// GS1 product vocabulary.
pub const GS1_PRODUCT_CONTEXT: &str = "https://ref.gs1.org/gs1/vc/product-context";
/// GS1 organization vocabulary.
pub const GS1_ORGANIZATION_CONTEXT: &str = "https://ref.gs1.org/gs1/vc/organization-context";

/// Contexts a credential of `credential_type` must declare besides the W3C
/// base context.
pub fn required_contexts(credential_type: CredentialType) -> &'static [&'static str] {
    match credential_type {
        CredentialType::PrefixLicense
        | CredentialType::CompanyPrefixLicense
        | CredentialType::IdentificationKeyLicense => &[GS1_LICENSE_CONTEXT],
        CredentialType::Key | CredentialType::Epcis => &[GS1_DECLARATION_CONTEXT],
        CredentialType::ProductData => &[GS1_DECLARATION_CONTEXT, GS1_PRODUCT_CONTEXT],
        CredentialType::OrganizationData => &[GS1_DECLARATION_CONTEXT, GS1_ORGANIZATION_CONTEXT],
    }
}

/// The W3C v2 context and every context required by the type are present,
/// in any order. Additional contexts are allowed.
pub fn check_credential_context(credential: &VerifiableCredential) -> RuleCheckResult {
    let urls: Vec<&str> = credential.context_urls().collect();
    let required = credential.credential_type().map_or(&[][..], required_contexts);
    let complete = std::iter::once(&W3C_CREDENTIALS_V2)
        .chain(required)
        .all(|r| urls.contains(r));
    RuleCheckResult::check(complete, INVALID_CONTEXT)
}
