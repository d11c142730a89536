//! Validity window checks. `now` is passed in so callers and tests control
//! the clock; comparisons happen at second granularity.

use gs1_core::Timestamp;
use gs1_vc::VerifiableCredential;

use crate::catalog::{INVALID_DATE_FORMAT, VALID_FROM_FUTURE, VALID_UNTIL_PAST};
use crate::result::RuleCheckResult;

/// `validFrom` must not be after `now`. Absent passes.
pub fn check_valid_from(credential: &VerifiableCredential, now: Timestamp) -> RuleCheckResult {
    let Some(raw) = credential.valid_from.as_deref() else {
        return RuleCheckResult::pass();
    };
    match Timestamp::parse_lenient(raw) {
        Ok(valid_from) => RuleCheckResult::check(valid_from <= now, VALID_FROM_FUTURE),
        Err(_) => RuleCheckResult::fail(INVALID_DATE_FORMAT),
    }
}

/// `validUntil` must not be before `now`. Absent passes.
pub fn check_valid_until(credential: &VerifiableCredential, now: Timestamp) -> RuleCheckResult {
    let Some(raw) = credential.valid_until.as_deref() else {
        return RuleCheckResult::pass();
    };
    match Timestamp::parse_lenient(raw) {
        Ok(valid_until) => RuleCheckResult::check(valid_until >= now, VALID_UNTIL_PAST),
        Err(_) => RuleCheckResult::fail(INVALID_DATE_FORMAT),
    }
}
