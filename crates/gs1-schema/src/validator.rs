//! # Credential Schema Validation
//!
//! Compiles the schema a credential declares (Draft 2020-12, GS1 keywords
//! registered) and reports violations as rule results. Unknown, empty or
//! broken schemas fall back to the embedded generic schema.

use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use gs1_rules::catalog::by_rule_text;
use gs1_rules::ChainCheckResult;
use gs1_vc::VerifiableCredential;

use crate::error::{SchemaError, SchemaErrorParams, SchemaValidationError};
use crate::keywords::{register_keywords, Gs1Keyword};
use crate::loader::JsonSchemaLoader;

/// `$id` of the generic schema.
pub const GENERIC_SCHEMA_ID: &str = "Generic-Schema";

/// The generic credential schema.
pub const GENERIC_SCHEMA: &str = include_str!("../schemas/generic.schema.json");

/// Answers every remote `$ref` with an empty schema so validation never
/// touches the network.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!(uri = uri.as_str(), "unresolved schema reference, treating as permissive");
        Ok(serde_json::json!({}))
    }
}

/// A compiled credential schema.
pub struct SchemaValidator {
    schema_id: String,
    validator: Validator,
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("schema_id", &self.schema_id)
            .finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Compile `schema` under `schema_id`.
    pub fn compile(schema_id: &str, schema: &Value) -> Result<Self, SchemaValidationError> {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        opts.with_retriever(OfflineRetriever);
        register_keywords(&mut opts);
        let validator = opts
            .build(schema)
            .map_err(|e| SchemaValidationError::ValidatorBuild {
                schema_id: schema_id.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            schema_id: schema_id.to_string(),
            validator,
        })
    }

    /// Compile a schema document given as bytes.
    pub fn from_slice(schema_id: &str, bytes: &[u8]) -> Result<Self, SchemaValidationError> {
        let schema: Value =
            serde_json::from_slice(bytes).map_err(|e| SchemaValidationError::InvalidJson {
                schema_id: schema_id.to_string(),
                reason: e.to_string(),
            })?;
        Self::compile(schema_id, &schema)
    }

    /// The generic schema.
    pub fn generic() -> Result<Self, SchemaValidationError> {
        Self::from_slice(GENERIC_SCHEMA_ID, GENERIC_SCHEMA.as_bytes())
    }

    /// The schema `credential` declares, or the generic schema when it
    /// declares none or the loader cannot provide a usable one.
    pub fn for_credential(
        loader: &dyn JsonSchemaLoader,
        credential: &VerifiableCredential,
    ) -> Result<Self, SchemaValidationError> {
        let Some(schema) = credential.credential_schema.as_ref() else {
            return Self::generic();
        };
        let bytes = loader.load(&schema.id);
        if bytes.is_empty() {
            tracing::debug!(schema_id = %schema.id, "schema unknown, using generic schema");
            return Self::generic();
        }
        match Self::from_slice(&schema.id, &bytes) {
            Ok(validator) => Ok(validator),
            Err(e) => {
                tracing::warn!(schema_id = %schema.id, error = %e, "schema unusable, using generic schema");
                Self::generic()
            }
        }
    }

    /// Identifier of the compiled schema.
    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    /// Whether the generic schema is in use.
    pub fn is_generic(&self) -> bool {
        self.schema_id == GENERIC_SCHEMA_ID
    }

    /// Every violation of `instance`.
    pub fn errors(&self, instance: &Value) -> Vec<SchemaError> {
        self.validator
            .iter_errors(instance)
            .map(|e| {
                let message = e.to_string();
                let schema_path = e.schema_path.to_string();
                let gs1_rule = by_rule_text(&message);
                let keyword = match gs1_rule.and_then(Gs1Keyword::for_rule) {
                    Some(keyword) => keyword.name().to_string(),
                    None => schema_path.rsplit('/').next().unwrap_or_default().to_string(),
                };
                SchemaError {
                    instance_path: e.instance_path.to_string(),
                    schema_path,
                    params: SchemaErrorParams {
                        keyword: keyword.clone(),
                        is_gs1_error: gs1_rule.is_some(),
                        gs1_rule,
                    },
                    keyword,
                    message,
                }
            })
            .collect()
    }

    /// Validate `credential` and report violations against it.
    pub fn check_schema(
        &self,
        credential: &VerifiableCredential,
    ) -> Result<ChainCheckResult, SchemaValidationError> {
        let instance = serde_json::to_value(credential)?;
        let mut result = ChainCheckResult::for_credential(credential);
        for error in self.errors(&instance) {
            tracing::debug!(
                credential = credential.id_or_unknown(),
                schema_id = %self.schema_id,
                instance_path = %error.instance_path,
                message = %error.message,
                "schema violation"
            );
            result.push_error(error.descriptor());
        }
        Ok(result)
    }
}
