//! License value checks on a single subject.

use gs1_vc::CredentialSubject;

use crate::catalog::{
    ALTERNATIVE_LICENSE_NOT_SUPPORTED, INVALID_ALTERNATIVE_LICENSE_VALUE,
    INVALID_PREFIX_LICENSE_VALUE,
};
use crate::result::RuleCheckResult;

/// Longest GS1 Prefix a prefix license may carry.
pub const MAX_PREFIX_LENGTH: usize = 4;

/// `alternativeLicenseValue` is the license value minus its single leading
/// zero (U.P.C. company prefixes). Absent passes.
pub fn check_alternative_license_value(subject: &CredentialSubject) -> RuleCheckResult {
    let Some(alternative) = subject.alternative_license_value.as_deref() else {
        return RuleCheckResult::pass();
    };
    let license = subject.license_value.as_deref().unwrap_or_default();
    match license.strip_prefix('0') {
        None => RuleCheckResult::fail(ALTERNATIVE_LICENSE_NOT_SUPPORTED),
        Some(stripped) => RuleCheckResult::check(
            !stripped.is_empty() && stripped == alternative,
            INVALID_ALTERNATIVE_LICENSE_VALUE,
        ),
    }
}

/// A prefix license value is one to four ASCII digits.
pub fn check_prefix_license_value(subject: &CredentialSubject) -> RuleCheckResult {
    let ok = subject.license_value.as_deref().is_some_and(|v| {
        (1..=MAX_PREFIX_LENGTH).contains(&v.len()) && v.bytes().all(|b| b.is_ascii_digit())
    });
    RuleCheckResult::check(ok, INVALID_PREFIX_LICENSE_VALUE)
}
