//! # Verification Errors
//!
//! [`ChainError`] describes why chain resolution stopped early. It never
//! escapes the resolver: each variant is recorded on the arena as a
//! [`ChainTerminal`] and surfaces as a rule violation on the last link.

use thiserror::Error;

use gs1_rules::catalog::{
    CREDENTIAL_CHAIN_CYCLE, CREDENTIAL_CHAIN_TOO_DEEP, EXTENDED_CREDENTIAL_MISSING,
};
use gs1_rules::RuleDescriptor;
use gs1_vc::ChainTerminal;

/// Failure to resolve the next parent of a chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Neither the inline pool nor the loader produced the parent.
    #[error("cannot resolve extended credential {uri}: {reason}")]
    Unresolved {
        /// The parent URI.
        uri: String,
        /// Loader diagnostic.
        reason: String,
    },

    /// The parent is already part of the chain.
    #[error("extended credential {uri} is already part of the chain")]
    Cycle {
        /// The URI that closed the cycle.
        uri: String,
    },

    /// The chain holds the maximum number of credentials.
    #[error("credential chain exceeds {max_depth} credentials")]
    TooDeep {
        /// Configured limit.
        max_depth: usize,
    },
}

impl ChainError {
    /// The rule reported against the link whose parent is missing.
    pub fn descriptor(&self) -> RuleDescriptor {
        match self {
            Self::Unresolved { .. } => EXTENDED_CREDENTIAL_MISSING,
            Self::Cycle { .. } => CREDENTIAL_CHAIN_CYCLE,
            Self::TooDeep { .. } => CREDENTIAL_CHAIN_TOO_DEEP,
        }
    }

    /// Rebuild the error from an arena terminal. `None` for a chain that
    /// ended at a root.
    pub fn from_terminal(terminal: &ChainTerminal) -> Option<Self> {
        match terminal {
            ChainTerminal::Root => None,
            ChainTerminal::Unresolved { uri, reason } => Some(Self::Unresolved {
                uri: uri.clone(),
                reason: reason.clone(),
            }),
            ChainTerminal::Cycle { uri } => Some(Self::Cycle { uri: uri.clone() }),
            ChainTerminal::TooDeep { max_depth } => Some(Self::TooDeep {
                max_depth: *max_depth,
            }),
        }
    }
}

impl From<ChainError> for ChainTerminal {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::Unresolved { uri, reason } => ChainTerminal::Unresolved { uri, reason },
            ChainError::Cycle { uri } => ChainTerminal::Cycle { uri },
            ChainError::TooDeep { max_depth } => ChainTerminal::TooDeep { max_depth },
        }
    }
}

/// Invalid verifier configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds a value of the wrong shape.
    #[error("invalid value {value:?} for {var}: expected {expected}")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
        /// What was expected instead.
        expected: &'static str,
    },
}
