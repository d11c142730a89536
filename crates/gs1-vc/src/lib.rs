//! # gs1-vc — Credential Data Model
//!
//! W3C Verifiable Credentials as they appear in a GS1 licensing hierarchy:
//!
//! - **Credential** (`credential.rs`): the credential envelope, its issuer
//!   (URI or object) and the type-dependent credential subject.
//!
//! - **Presentation** (`presentation.rs`): a holder-bundled set of credentials.
//!
//! - **Credential type** (`credential_type.rs`): the closed set of GS1
//!   credential types extracted from a credential's `type` array.
//!
//! - **Chain** (`chain.rs`): the arena of resolved links, leaf first, that
//!   the chain walker validates root first.
//!
//! ## Crate Policy
//!
//! - Depends only on `gs1-core` internally.
//! - Credentials are immutable once resolved; validation borrows them.
//! - `credentialSubject` remains extensible: unknown members are kept.

pub mod chain;
pub mod credential;
pub mod credential_type;
pub mod presentation;
mod serde_util;

pub use chain::{ChainLink, ChainTerminal, CredentialChain};
pub use credential::{CredentialSchema, CredentialSubject, Issuer, VerifiableCredential};
pub use credential_type::CredentialType;
pub use presentation::VerifiablePresentation;
