//! # Rule Errors
//!
//! Structural failures that prevent a rule from being selected at all.
//! Rule violations are not errors; they are [`crate::ChainCheckResult`]
//! entries.

use thiserror::Error;

use gs1_vc::CredentialType;

use crate::catalog::{RuleDescriptor, UNKNOWN_CREDENTIAL_TYPE};

/// A credential could not be matched to a chain rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The credential's `type` array names no GS1 credential type.
    #[error("credential {credential_id} declares no GS1 credential type")]
    UnknownCredentialType {
        /// Id of the offending credential.
        credential_id: String,
    },

    /// A type name that is not a GS1 credential type.
    #[error("unknown credential type name: {0}")]
    UnknownTypeName(String),

    /// The chain rule table has no entry for this type.
    #[error("no chain rule entry for {0}")]
    MissingRuleEntry(CredentialType),
}

impl RuleError {
    /// The catalog rule reported for this error.
    pub fn descriptor(&self) -> RuleDescriptor {
        UNKNOWN_CREDENTIAL_TYPE
    }
}
