//! # Chain-Type Rule Table
//!
//! Which credential type may extend which, and the rule that governs each
//! edge. The table is static and never mutated.
//!
//! | Type | Extends | Rule |
//! |------|---------|------|
//! | GS1PrefixLicenseCredential | (root) | `prefixLicense` |
//! | GS1CompanyPrefixLicenseCredential | GS1PrefixLicenseCredential | `GS1PrefixLicenseCredential` |
//! | GS1IdentificationKeyLicenseCredential | GS1PrefixLicenseCredential | `GS1PrefixLicenseCredential` |
//! | KeyCredential | GS1CompanyPrefixLicenseCredential, GS1IdentificationKeyLicenseCredential, KeyCredential | `GS1CompanyPrefixLicenseCredential` |
//! | OrganizationDataCredential | KeyCredential | `KeyCredential` |
//! | ProductDataCredential | KeyCredential | `KeyDataCredential` |
//! | EpcisCredential | KeyCredential | `KeyDataCredential` |
//!
//! `children` mirrors the parent relation and is informational.

use std::fmt;

use gs1_vc::CredentialType;

use crate::error::RuleError;

/// Key of a validator in the rules manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKey {
    /// Root prefix license value shape (`prefixLicense`).
    PrefixLicense,
    /// License extending a prefix license (`GS1PrefixLicenseCredential`).
    ExtendedLicensePrefix,
    /// Key extending a company prefix, key license or key
    /// (`GS1CompanyPrefixLicenseCredential`).
    ExtendedCompanyPrefix,
    /// Organization data extending a key (`KeyCredential`).
    ExtendedKey,
    /// Product or EPCIS data extending a key (`KeyDataCredential`).
    ExtendedKeyData,
}

impl RuleKey {
    /// Every rule key.
    pub const ALL: [RuleKey; 5] = [
        Self::PrefixLicense,
        Self::ExtendedLicensePrefix,
        Self::ExtendedCompanyPrefix,
        Self::ExtendedKey,
        Self::ExtendedKeyData,
    ];

    /// The key's name in the rule table.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrefixLicense => "prefixLicense",
            Self::ExtendedLicensePrefix => "GS1PrefixLicenseCredential",
            Self::ExtendedCompanyPrefix => "GS1CompanyPrefixLicenseCredential",
            Self::ExtendedKey => "KeyCredential",
            Self::ExtendedKeyData => "KeyDataCredential",
        }
    }

    /// Look up a key by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Permitted parents of a type and the rule for that edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendsRule {
    /// Types the parent may have.
    pub parents: &'static [CredentialType],
    /// Validator for the edge.
    pub rule: RuleKey,
}

/// Adjacency facts for one credential type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainRuleEntry {
    /// The type described.
    pub credential_type: CredentialType,
    /// `None` for the root type.
    pub extends: Option<ExtendsRule>,
    /// Types that may extend this one.
    pub children: &'static [CredentialType],
}

impl ChainRuleEntry {
    /// Whether this type is the root of the hierarchy.
    pub fn is_root(&self) -> bool {
        self.extends.is_none()
    }

    /// The validator for this type: its edge rule, or the root rule.
    pub fn rule_key(&self) -> RuleKey {
        self.extends.map_or(RuleKey::PrefixLicense, |e| e.rule)
    }

    /// Whether a parent of `parent_type` is permitted.
    pub fn permits_parent(&self, parent_type: CredentialType) -> bool {
        self.extends.is_some_and(|e| e.parents.contains(&parent_type))
    }
}

use CredentialType::{
    CompanyPrefixLicense, Epcis, IdentificationKeyLicense, Key, OrganizationData, PrefixLicense,
    ProductData,
};

/// The rule table.
pub static CHAIN_RULES: [ChainRuleEntry; 7] = [
    ChainRuleEntry {
        credential_type: PrefixLicense,
        extends: None,
        children: &[CompanyPrefixLicense, IdentificationKeyLicense],
    },
    ChainRuleEntry {
        credential_type: CompanyPrefixLicense,
        extends: Some(ExtendsRule {
            parents: &[PrefixLicense],
            rule: RuleKey::ExtendedLicensePrefix,
        }),
        children: &[Key],
    },
    ChainRuleEntry {
        credential_type: IdentificationKeyLicense,
        extends: Some(ExtendsRule {
            parents: &[PrefixLicense],
            rule: RuleKey::ExtendedLicensePrefix,
        }),
        children: &[Key],
    },
    ChainRuleEntry {
        credential_type: Key,
        extends: Some(ExtendsRule {
            parents: &[CompanyPrefixLicense, IdentificationKeyLicense, Key],
            rule: RuleKey::ExtendedCompanyPrefix,
        }),
        children: &[Key, OrganizationData, ProductData, Epcis],
    },
    ChainRuleEntry {
        credential_type: OrganizationData,
        extends: Some(ExtendsRule {
            parents: &[Key],
            rule: RuleKey::ExtendedKey,
        }),
        children: &[],
    },
    ChainRuleEntry {
        credential_type: ProductData,
        extends: Some(ExtendsRule {
            parents: &[Key],
            rule: RuleKey::ExtendedKeyData,
        }),
        children: &[],
    },
    ChainRuleEntry {
        credential_type: Epcis,
        extends: Some(ExtendsRule {
            parents: &[Key],
            rule: RuleKey::ExtendedKeyData,
        }),
        children: &[],
    },
];

/// The entry for `credential_type`.
pub fn chain_rule(credential_type: CredentialType) -> Result<&'static ChainRuleEntry, RuleError> {
    CHAIN_RULES
        .iter()
        .find(|e| e.credential_type == credential_type)
        .ok_or(RuleError::MissingRuleEntry(credential_type))
}

/// The entry for a type given by name.
pub fn chain_rule_by_name(name: &str) -> Result<&'static ChainRuleEntry, RuleError> {
    let credential_type =
        CredentialType::from_name(name).ok_or_else(|| RuleError::UnknownTypeName(name.to_string()))?;
    chain_rule(credential_type)
}
