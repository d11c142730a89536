//! # GS1 Credential Types
//!
//! The closed set of credential types that participate in the GS1 license
//! hierarchy. A credential's `type` array usually holds
//! `VerifiableCredential` plus one GS1 type, and may hold further custom
//! types in any order; the first recognised GS1 name wins.
//!
//! ```text
//! GS1PrefixLicenseCredential (root)
//!   ├──▶ GS1CompanyPrefixLicenseCredential ──▶ KeyCredential ──▶ KeyCredential (qualified)
//!   └──▶ GS1IdentificationKeyLicenseCredential ──▶ KeyCredential
//!                                                  ├──▶ OrganizationDataCredential
//!                                                  ├──▶ ProductDataCredential
//!                                                  └──▶ EpcisCredential
//! ```

use serde::{Deserialize, Serialize};

/// A GS1 credential type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CredentialType {
    /// License to a GS1 Prefix, issued by GS1 Global to a Member Organisation.
    #[serde(rename = "GS1PrefixLicenseCredential")]
    PrefixLicense,
    /// License to a GS1 Company Prefix, issued by a Member Organisation.
    #[serde(rename = "GS1CompanyPrefixLicenseCredential")]
    CompanyPrefixLicense,
    /// License to one individually assigned identification key.
    #[serde(rename = "GS1IdentificationKeyLicenseCredential")]
    IdentificationKeyLicense,
    /// Assertion of one identification key (GTIN, GLN, ...), optionally qualified.
    #[serde(rename = "KeyCredential")]
    Key,
    /// Organisation master data bound to a GLN key.
    #[serde(rename = "OrganizationDataCredential")]
    OrganizationData,
    /// Product master data bound to a GTIN key.
    #[serde(rename = "ProductDataCredential")]
    ProductData,
    /// EPCIS event data bound to a key.
    #[serde(rename = "EpcisCredential")]
    Epcis,
}

impl CredentialType {
    /// Every GS1 credential type.
    pub const ALL: [CredentialType; 7] = [
        Self::PrefixLicense,
        Self::CompanyPrefixLicense,
        Self::IdentificationKeyLicense,
        Self::Key,
        Self::OrganizationData,
        Self::ProductData,
        Self::Epcis,
    ];

    /// The type name as it appears in a credential's `type` array.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrefixLicense => "GS1PrefixLicenseCredential",
            Self::CompanyPrefixLicense => "GS1CompanyPrefixLicenseCredential",
            Self::IdentificationKeyLicense => "GS1IdentificationKeyLicenseCredential",
            Self::Key => "KeyCredential",
            Self::OrganizationData => "OrganizationDataCredential",
            Self::ProductData => "ProductDataCredential",
            Self::Epcis => "EpcisCredential",
        }
    }

    /// Look up a type by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Extract the GS1 type from a credential's `type` array.
    pub fn from_types<S: AsRef<str>>(types: &[S]) -> Option<Self> {
        types.iter().find_map(|t| Self::from_name(t.as_ref()))
    }

    /// License credentials carry a `licenseValue`.
    pub fn is_license(&self) -> bool {
        matches!(
            self,
            Self::PrefixLicense | Self::CompanyPrefixLicense | Self::IdentificationKeyLicense
        )
    }

    /// Data credentials describe a key; they are leaves of the hierarchy.
    pub fn is_data(&self) -> bool {
        matches!(self, Self::OrganizationData | Self::ProductData | Self::Epcis)
    }
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
