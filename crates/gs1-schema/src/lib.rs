//! # gs1-schema — Credential Schema Validation
//!
//! Validates credentials against their declared JSON Schema with the
//! `jsonschema` crate, extended with the GS1 business-rule keywords.
//!
//! - **Keywords** (`keywords.rs`): `altLicenseValidation`, `digitalLink`
//!   and `digitalLinkSameAs`, backed by `gs1-rules` subject predicates.
//! - **Errors** (`error.rs`): the violation object and
//!   [`create_schema_error`].
//! - **Loading** (`loader.rs`): the [`JsonSchemaLoader`] seam and stock
//!   loaders.
//! - **Validator** (`validator.rs`): compile, fall back to the generic
//!   schema, report violations as rule results.
//!
//! ## Security Invariant
//!
//! Schema compilation never fetches remote `$ref`s; unresolved references
//! are treated as permissive.

pub mod error;
pub mod keywords;
pub mod loader;
pub mod validator;

pub use error::{create_schema_error, SchemaError, SchemaErrorParams, SchemaValidationError};
pub use keywords::{register_keywords, Gs1Keyword};
pub use loader::{DirectorySchemaLoader, JsonSchemaLoader, MemorySchemaLoader, NoSchemaLoader};
pub use validator::{SchemaValidator, GENERIC_SCHEMA, GENERIC_SCHEMA_ID};
