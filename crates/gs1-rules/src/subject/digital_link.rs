//! Digital Link subject checks.

use gs1_digital_link::parse_gs1_digital_link;
use gs1_vc::CredentialSubject;

use crate::catalog::{RuleDescriptor, INVALID_DIGITAL_LINK, INVALID_DIGITAL_LINK_SAME_AS};
use crate::result::RuleCheckResult;

fn check_digital_link(value: Option<&str>, rule: RuleDescriptor, optional: bool) -> RuleCheckResult {
    match value.filter(|v| !v.is_empty()) {
        None => RuleCheckResult::check(optional, rule),
        Some(link) => RuleCheckResult::check(parse_gs1_digital_link(link).is_valid(), rule),
    }
}

/// `credentialSubject.id` is required and must be a valid Digital Link.
pub fn check_subject_id_digital_link(subject: &CredentialSubject) -> RuleCheckResult {
    check_digital_link(subject.id.as_deref(), INVALID_DIGITAL_LINK, false)
}

/// `credentialSubject.sameAs`, when present, must be a valid Digital Link.
pub fn check_same_as_digital_link(subject: &CredentialSubject) -> RuleCheckResult {
    check_digital_link(subject.same_as.as_deref(), INVALID_DIGITAL_LINK_SAME_AS, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(id: Option<&str>, same_as: Option<&str>) -> CredentialSubject {
        CredentialSubject {
            id: id.map(str::to_string),
            same_as: same_as.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_subject_id() {
        let ok = subject(Some("https://id.gs1.org/01/04270005112602"), None);
        assert!(check_subject_id_digital_link(&ok).verified);

        let bad = subject(Some("https://id.gs1.org/01/04270005112603"), None);
        assert_eq!(check_subject_id_digital_link(&bad).rule, Some(INVALID_DIGITAL_LINK));

        let missing = subject(None, None);
        assert_eq!(check_subject_id_digital_link(&missing).rule, Some(INVALID_DIGITAL_LINK));
    }

    #[test]
    fn test_same_as_is_optional() {
        assert!(check_same_as_digital_link(&subject(None, None)).verified);
        let ok = subject(None, Some("https://brand.example.com/01/04270005112602"));
        assert!(check_same_as_digital_link(&ok).verified);
        let bad = subject(None, Some("https://brand.example.com/about"));
        assert_eq!(check_same_as_digital_link(&bad).rule, Some(INVALID_DIGITAL_LINK_SAME_AS));
    }
}
