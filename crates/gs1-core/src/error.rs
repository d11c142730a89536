//! # Error Types — Structured Error Hierarchy
//!
//! Errors here are reserved for conditions that are genuinely exceptional:
//! malformed input documents and timestamps.
//! Business-rule violations are never errors; they are reported as
//! rule results by `gs1-rules`.

use thiserror::Error;

/// Top-level error type for the GS1 validation workspace.
#[derive(Error, Debug)]
pub enum Gs1Error {
    /// A credential or presentation document is not well-formed JSON
    /// or does not match the credential data model.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error while parsing a [`crate::Timestamp`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The string is not valid RFC 3339.
    #[error("invalid RFC 3339 timestamp {input:?}: {reason}")]
    InvalidFormat {
        /// The rejected input.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Strict parsing requires the `Z` suffix.
    #[error("timestamp must use Z suffix (UTC only), got: {0:?}")]
    NotUtc(String),
}
