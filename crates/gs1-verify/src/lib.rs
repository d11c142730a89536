//! # gs1-verify — Credential Chain Verification
//!
//! Ties the data model, the business rules and the schema adapter into a
//! verification service.
//!
//! - **Providers** (`provider.rs`): the external [`CredentialLoader`] and
//!   [`CredentialVerifier`] collaborators, plus in-memory implementations.
//! - **Configuration** (`config.rs`): [`VerifierConfig`].
//! - **Resolver** (`resolve.rs`): builds the [`CredentialChain`] arena,
//!   leaf first, from the inline pool and the loader.
//! - **Walker** (`walk.rs`): validates the arena root first, one
//!   [`ChainCheckResult`] per link.
//! - **Service** (`service.rs`): [`verify_credential`] and
//!   [`verify_presentation`].
//!
//! ## Concurrency
//!
//! Suspension happens only inside collaborator calls. A single chain is
//! resolved and walked sequentially; independent credentials share no
//! state and may be verified concurrently by the caller.
//!
//! [`CredentialChain`]: gs1_vc::CredentialChain
//! [`ChainCheckResult`]: gs1_rules::ChainCheckResult

pub mod config;
pub mod error;
pub mod provider;
pub mod resolve;
pub mod service;
pub mod walk;

pub use config::VerifierConfig;
pub use error::{ChainError, ConfigError};
pub use provider::{
    CredentialLoader, CredentialVerifier, MemoryCredentialLoader, NoCredentialLoader,
    StructuralVerifier,
};
pub use resolve::resolve_chain;
pub use service::{
    verify_credential, verify_presentation, ChainReport, PresentationReport, VerificationRequest,
};
pub use walk::walk_chain;
