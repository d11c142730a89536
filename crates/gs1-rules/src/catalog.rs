//! # Rule Catalog
//!
//! Every business rule has a stable `GS1-xxx` code and a human-readable
//! rule text. Codes are grouped by concern:
//!
//! | Range | Concern |
//! |-------|---------|
//! | 0xx | document envelope (`@context`) |
//! | 1xx | chain structure and identity |
//! | 2xx | license values |
//! | 3xx | Digital Link subjects |
//! | 4xx | external verification |
//! | 5xx | JSON Schema |
//! | 6xx | validity window |
//!
//! Codes are part of the public contract and must never be renumbered.

use std::fmt;

use serde::Serialize;

/// A rule a credential can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RuleDescriptor {
    /// Stable code, e.g. `GS1-600`.
    pub code: &'static str,
    /// What the rule requires.
    pub rule: &'static str,
}

impl fmt::Display for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.rule)
    }
}

const fn rule(code: &'static str, rule: &'static str) -> RuleDescriptor {
    RuleDescriptor { code, rule }
}

// ─── Envelope ────────────────────────────────────────────────────────

/// `@context` lacks the W3C v2 context or a context required for the
/// credential type.
pub const INVALID_CONTEXT: RuleDescriptor = rule(
    "GS1-010",
    "Credential @context must include the W3C VC v2 context and every context required by its GS1 type.",
);

// ─── Chain structure and identity ────────────────────────────────────

/// Issuer/subject reconciliation failed.
pub const INVALID_ISSUER: RuleDescriptor = rule(
    "GS1-100",
    "Credential issuer must match the subject of the extended credential or share its issuer.",
);

/// Root prefix license not issued by GS1 Global.
pub const INVALID_ROOT_ISSUER: RuleDescriptor = rule(
    "GS1-101",
    "GS1 Prefix License credential must be issued by GS1 Global.",
);

/// Parent credential absent or unresolvable.
pub const EXTENDED_CREDENTIAL_MISSING: RuleDescriptor = rule(
    "GS1-110",
    "Extended credential is missing or could not be resolved.",
);

/// No GS1 type, or a type with no rule table entry.
pub const UNKNOWN_CREDENTIAL_TYPE: RuleDescriptor = rule(
    "GS1-120",
    "Credential type is not a known GS1 credential type.",
);

/// Parent type not permitted for this credential type.
pub const INVALID_EXTENDED_CREDENTIAL_TYPE: RuleDescriptor = rule(
    "GS1-130",
    "Extended credential type is not permitted for this credential type.",
);

/// The chain revisits a credential.
pub const CREDENTIAL_CHAIN_CYCLE: RuleDescriptor = rule(
    "GS1-140",
    "Credential chain must not reference a credential already in the chain.",
);

/// The chain exceeds the configured depth.
pub const CREDENTIAL_CHAIN_TOO_DEEP: RuleDescriptor = rule(
    "GS1-141",
    "Credential chain exceeds the maximum supported depth.",
);

// ─── License values ──────────────────────────────────────────────────

/// License value or key not contained in the parent license.
pub const INVALID_LICENSE_VALUE_FORMAT: RuleDescriptor = rule(
    "GS1-200",
    "License value must start with the license value of the extended credential.",
);

/// Prefix license value malformed.
pub const INVALID_PREFIX_LICENSE_VALUE: RuleDescriptor = rule(
    "GS1-201",
    "GS1 Prefix license value must be a numeric string of one to four digits.",
);

/// Alternative license value inconsistent with the license value.
pub const INVALID_ALTERNATIVE_LICENSE_VALUE: RuleDescriptor = rule(
    "GS1-210",
    "Alternative license value must equal the license value without its leading zero.",
);

/// Alternative license value given for a license without a leading zero.
pub const ALTERNATIVE_LICENSE_NOT_SUPPORTED: RuleDescriptor = rule(
    "GS1-211",
    "Alternative license value is only supported for license values starting with zero.",
);

// ─── Digital Link subjects ───────────────────────────────────────────

/// Subject id is not a valid Digital Link.
pub const INVALID_DIGITAL_LINK: RuleDescriptor = rule(
    "GS1-300",
    "Credential subject id must be a valid GS1 Digital Link.",
);

/// Subject sameAs is not a valid Digital Link.
pub const INVALID_DIGITAL_LINK_SAME_AS: RuleDescriptor = rule(
    "GS1-301",
    "Credential subject sameAs must be a valid GS1 Digital Link.",
);

/// Data credential subject does not match its key credential.
pub const INVALID_SUBJECT_KEY: RuleDescriptor = rule(
    "GS1-310",
    "Data credential subject must identify the same key as its key credential.",
);

// ─── External verification ───────────────────────────────────────────

/// External verifier rejected the credential or failed.
pub const EXTERNAL_VERIFICATION_FAILED: RuleDescriptor = rule(
    "GS1-400",
    "Credential failed external verification.",
);

// ─── JSON Schema ─────────────────────────────────────────────────────

/// Plain JSON Schema violation.
pub const SCHEMA_VALIDATION_FAILED: RuleDescriptor = rule(
    "GS1-500",
    "Credential does not conform to its JSON Schema.",
);

// ─── Validity window ─────────────────────────────────────────────────

/// `validFrom` after now.
pub const VALID_FROM_FUTURE: RuleDescriptor = rule(
    "GS1-600",
    "Credential validFrom must not be in the future.",
);

/// `validUntil` before now.
pub const VALID_UNTIL_PAST: RuleDescriptor = rule(
    "GS1-601",
    "Credential validUntil must not be in the past.",
);

/// Date string not RFC 3339.
pub const INVALID_DATE_FORMAT: RuleDescriptor = rule(
    "GS1-602",
    "Credential validity dates must be RFC 3339 date-time strings.",
);

/// Every rule, ordered by code.
pub const ALL_RULES: &[RuleDescriptor] = &[
    INVALID_CONTEXT,
    INVALID_ISSUER,
    INVALID_ROOT_ISSUER,
    EXTENDED_CREDENTIAL_MISSING,
    UNKNOWN_CREDENTIAL_TYPE,
    INVALID_EXTENDED_CREDENTIAL_TYPE,
    CREDENTIAL_CHAIN_CYCLE,
    CREDENTIAL_CHAIN_TOO_DEEP,
    INVALID_LICENSE_VALUE_FORMAT,
    INVALID_PREFIX_LICENSE_VALUE,
    INVALID_ALTERNATIVE_LICENSE_VALUE,
    ALTERNATIVE_LICENSE_NOT_SUPPORTED,
    INVALID_DIGITAL_LINK,
    INVALID_DIGITAL_LINK_SAME_AS,
    INVALID_SUBJECT_KEY,
    EXTERNAL_VERIFICATION_FAILED,
    SCHEMA_VALIDATION_FAILED,
    VALID_FROM_FUTURE,
    VALID_UNTIL_PAST,
    INVALID_DATE_FORMAT,
];

/// Look up a rule by code.
pub fn by_code(code: &str) -> Option<RuleDescriptor> {
    ALL_RULES.iter().copied().find(|r| r.code == code)
}

/// Look up a rule by its rule text.
pub fn by_rule_text(text: &str) -> Option<RuleDescriptor> {
    ALL_RULES.iter().copied().find(|r| r.rule == text)
}
