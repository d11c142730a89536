//! Data credentials extending a key credential.
//!
//! The data credential is issued by the key's subject (or the key's
//! issuer) and describes the same primary key. Organization data must be
//! about a GLN, and a `gs1:partyGLN` inside the organization block must
//! repeat it.

use gs1_digital_link::{parse_gs1_digital_link, IdentifierType};
use gs1_vc::{ChainLink, CredentialType};

use crate::catalog::INVALID_SUBJECT_KEY;
use crate::issuer::reconcile_issuer;
use crate::result::ChainCheckResult;

use super::{begin, subject_key};

/// Organization data extending a GLN key credential.
pub fn validate_extended_key(
    credential_type: CredentialType,
    link: &ChainLink<'_>,
) -> ChainCheckResult {
    let (mut result, parent) = match begin(credential_type, link) {
        Ok(started) => started,
        Err(missing) => return missing,
    };
    let subject = &link.credential.credential_subject;
    result.record(reconcile_issuer(link.credential, parent));

    let parsed = parse_gs1_digital_link(subject.id.as_deref().unwrap_or_default());
    let key = subject_key(parent);
    let gln = parsed
        .parsed_value()
        .filter(|_| parsed.identifier_type() == IdentifierType::Gln);
    let same_key = gln.is_some() && gln == key.as_deref();
    let party_gln_matches = subject.party_gln().map_or(true, |p| Some(p) == gln);
    if !same_key || !party_gln_matches {
        result.push_error(INVALID_SUBJECT_KEY);
    }
    result
}

/// Product or EPCIS data extending a key credential.
pub fn validate_extended_key_data(
    credential_type: CredentialType,
    link: &ChainLink<'_>,
) -> ChainCheckResult {
    let (mut result, parent) = match begin(credential_type, link) {
        Ok(started) => started,
        Err(missing) => return missing,
    };
    result.record(reconcile_issuer(link.credential, parent));

    let key = subject_key(link.credential);
    if key.is_none() || key != subject_key(parent) {
        result.push_error(INVALID_SUBJECT_KEY);
    }
    result
}
