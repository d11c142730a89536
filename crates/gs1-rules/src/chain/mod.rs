//! # Per-Edge Chain Validators
//!
//! Each validator checks one credential against its resolved parent and
//! returns a [`ChainCheckResult`] for the child. A missing parent is the
//! only short-circuit: it yields exactly one
//! [`EXTENDED_CREDENTIAL_MISSING`] and nothing else is checked. All other
//! findings accumulate.

pub mod company_prefix;
pub mod key_data;
pub mod license_prefix;

use gs1_digital_link::parse_gs1_digital_link;
use gs1_vc::{ChainLink, CredentialType, VerifiableCredential};

use crate::catalog::EXTENDED_CREDENTIAL_MISSING;
use crate::result::ChainCheckResult;

pub use company_prefix::validate_extended_company_prefix;
pub use key_data::{validate_extended_key, validate_extended_key_data};
pub use license_prefix::validate_extended_license_prefix;

/// Start a result for `link`. Returns `Err` with the finished result when
/// the parent is missing.
fn begin<'a>(
    credential_type: CredentialType,
    link: &ChainLink<'a>,
) -> Result<(ChainCheckResult, &'a VerifiableCredential), ChainCheckResult> {
    let mut result = ChainCheckResult::new(link.credential.id_or_unknown(), credential_type.name());
    match link.extended {
        Some(parent) => Ok((result, parent)),
        None => {
            result.push_error(EXTENDED_CREDENTIAL_MISSING);
            Err(result)
        }
    }
}

/// Primary key value of a credential subject's Digital Link id.
fn subject_key(credential: &VerifiableCredential) -> Option<String> {
    let id = credential.credential_subject.id.as_deref()?;
    parse_gs1_digital_link(id).parsed_value().map(str::to_string)
}
