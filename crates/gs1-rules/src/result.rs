//! # Rule Results
//!
//! [`RuleCheckResult`] is the outcome of one assertion;
//! [`ChainCheckResult`] aggregates every finding for one credential.
//! A failed result always names the rule that failed.

use serde::Serialize;

use gs1_vc::VerifiableCredential;

use crate::catalog::RuleDescriptor;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleCheckResult {
    /// Whether the check passed.
    pub verified: bool,
    /// The violated rule, when `verified` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleDescriptor>,
}

impl RuleCheckResult {
    /// A passing check.
    pub const fn pass() -> Self {
        Self { verified: true, rule: None }
    }

    /// A failing check.
    pub const fn fail(rule: RuleDescriptor) -> Self {
        Self { verified: false, rule: Some(rule) }
    }

    /// Pass when `ok`, otherwise fail with `rule`.
    pub const fn check(ok: bool, rule: RuleDescriptor) -> Self {
        if ok {
            Self::pass()
        } else {
            Self::fail(rule)
        }
    }
}

/// Every finding for one credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainCheckResult {
    /// Id of the credential the result describes.
    pub credential_id: String,
    /// GS1 type name (or last declared type) of that credential.
    pub credential_name: String,
    /// True iff `errors` is empty.
    pub verified: bool,
    /// Violated rules, in the order they were found.
    pub errors: Vec<RuleDescriptor>,
}

impl ChainCheckResult {
    /// A passing result for `credential_id`.
    pub fn new(credential_id: impl Into<String>, credential_name: impl Into<String>) -> Self {
        Self {
            credential_id: credential_id.into(),
            credential_name: credential_name.into(),
            verified: true,
            errors: Vec::new(),
        }
    }

    /// A passing result describing `credential`.
    pub fn for_credential(credential: &VerifiableCredential) -> Self {
        Self::new(credential.id_or_unknown(), credential.credential_name())
    }

    /// Record a violated rule. A rule already recorded is not repeated.
    pub fn push_error(&mut self, rule: RuleDescriptor) {
        self.verified = false;
        if !self.errors.contains(&rule) {
            self.errors.push(rule);
        }
    }

    /// Fold in a single check.
    pub fn record(&mut self, result: RuleCheckResult) {
        if !result.verified {
            // A failing result without a rule cannot be built through the
            // constructors; treat it as a failure all the same.
            self.verified = false;
            if let Some(rule) = result.rule {
                self.push_error(rule);
            }
        }
    }

    /// Fold in another result for the same credential.
    pub fn merge(&mut self, other: ChainCheckResult) {
        if !other.verified {
            self.verified = false;
        }
        for rule in other.errors {
            self.push_error(rule);
        }
    }

    /// Whether `code` is among the errors.
    pub fn has_error(&self, code: &str) -> bool {
        self.errors.iter().any(|r| r.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{INVALID_ISSUER, INVALID_LICENSE_VALUE_FORMAT};

    #[test]
    fn test_rule_check_constructors() {
        assert_eq!(RuleCheckResult::check(true, INVALID_ISSUER), RuleCheckResult::pass());
        let failed = RuleCheckResult::check(false, INVALID_ISSUER);
        assert!(!failed.verified);
        assert_eq!(failed.rule, Some(INVALID_ISSUER));
    }

    #[test]
    fn test_errors_accumulate_without_duplicates() {
        let mut result = ChainCheckResult::new("urn:vc:1", "KeyCredential");
        assert!(result.verified);
        result.record(RuleCheckResult::pass());
        assert!(result.verified);
        result.push_error(INVALID_ISSUER);
        result.record(RuleCheckResult::fail(INVALID_LICENSE_VALUE_FORMAT));
        result.push_error(INVALID_ISSUER);
        assert!(!result.verified);
        assert_eq!(result.errors, vec![INVALID_ISSUER, INVALID_LICENSE_VALUE_FORMAT]);
    }

    #[test]
    fn test_merge() {
        let mut a = ChainCheckResult::new("urn:vc:1", "KeyCredential");
        let mut b = ChainCheckResult::new("urn:vc:1", "KeyCredential");
        b.push_error(INVALID_ISSUER);
        a.merge(b);
        assert!(!a.verified);
        assert!(a.has_error("GS1-100"));
    }

    #[test]
    fn test_serialized_shape() {
        let mut result = ChainCheckResult::new("urn:vc:1", "KeyCredential");
        result.push_error(INVALID_ISSUER);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["credentialId"], "urn:vc:1");
        assert_eq!(json["credentialName"], "KeyCredential");
        assert_eq!(json["verified"], false);
        assert_eq!(json["errors"][0]["code"], "GS1-100");
        assert!(json["errors"][0]["rule"].is_string());
    }
}
