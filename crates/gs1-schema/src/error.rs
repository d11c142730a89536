//! # Schema Errors
//!
//! [`SchemaError`] is the violation object reported for one failing
//! keyword, shaped like the error objects JSON Schema engines emit so that
//! GS1 rule violations and plain schema violations can be reported side
//! by side. [`SchemaValidationError`] covers schemas that cannot be used.

use serde::Serialize;
use thiserror::Error;

use gs1_rules::{RuleCheckResult, RuleDescriptor};

/// Rule details attached to a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaErrorParams {
    /// Keyword that failed.
    pub keyword: String,
    /// True when the keyword is a GS1 business rule.
    #[serde(rename = "isGS1Error")]
    pub is_gs1_error: bool,
    /// The violated GS1 rule.
    #[serde(rename = "gs1Rule", skip_serializing_if = "Option::is_none")]
    pub gs1_rule: Option<RuleDescriptor>,
}

/// One schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaError {
    /// JSON Pointer to the offending value.
    pub instance_path: String,
    /// JSON Pointer to the failing keyword in the schema.
    pub schema_path: String,
    /// Keyword that failed.
    pub keyword: String,
    /// Rule details.
    pub params: SchemaErrorParams,
    /// Human-readable description.
    pub message: String,
}

impl SchemaError {
    /// The catalog rule this violation maps to.
    pub fn descriptor(&self) -> RuleDescriptor {
        self.params
            .gs1_rule
            .unwrap_or(gs1_rules::catalog::SCHEMA_VALIDATION_FAILED)
    }
}

/// Build the violation for a failed GS1 keyword.
pub fn create_schema_error(
    keyword: &str,
    result: &RuleCheckResult,
    instance_path: &str,
) -> SchemaError {
    let rule = result.rule;
    SchemaError {
        instance_path: instance_path.to_string(),
        schema_path: String::new(),
        keyword: keyword.to_string(),
        params: SchemaErrorParams {
            keyword: keyword.to_string(),
            is_gs1_error: true,
            gs1_rule: rule,
        },
        message: rule.map(|r| r.rule.to_string()).unwrap_or_default(),
    }
}

/// A schema that cannot be compiled.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The schema document is not valid JSON.
    #[error("schema '{schema_id}' is not valid JSON: {reason}")]
    InvalidJson {
        /// Schema identifier.
        schema_id: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The schema could not be compiled.
    #[error("validator build error for schema '{schema_id}': {reason}")]
    ValidatorBuild {
        /// Schema identifier.
        schema_id: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// The credential could not be serialized for validation.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
