//! # Verifier Configuration
//!
//! | Field | Default | Environment |
//! |-------|---------|-------------|
//! | `full_json_schema_validation` | `true` | `GS1_FULL_JSON_SCHEMA_VALIDATION` |
//! | `gs1_global_did` | unset | `GS1_GLOBAL_DID` |
//! | `max_chain_depth` | `16` | `GS1_MAX_CHAIN_DEPTH` |

use serde::Serialize;

use crate::error::ConfigError;

/// Default limit on the number of credentials in one chain.
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 16;

const ENV_FULL_JSON_SCHEMA_VALIDATION: &str = "GS1_FULL_JSON_SCHEMA_VALIDATION";
const ENV_GS1_GLOBAL_DID: &str = "GS1_GLOBAL_DID";
const ENV_MAX_CHAIN_DEPTH: &str = "GS1_MAX_CHAIN_DEPTH";

/// How credentials are verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifierConfig {
    /// Validate every credential against its JSON Schema.
    pub full_json_schema_validation: bool,
    /// When set, the root prefix license must be issued by this DID.
    pub gs1_global_did: Option<String>,
    /// Maximum number of credentials in a chain, leaf included.
    pub max_chain_depth: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            full_json_schema_validation: true,
            gs1_global_did: None,
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
        }
    }
}

impl VerifierConfig {
    /// Enable or disable JSON Schema validation.
    pub fn with_schema_validation(mut self, enabled: bool) -> Self {
        self.full_json_schema_validation = enabled;
        self
    }

    /// Require the root prefix license to be issued by `did`.
    pub fn with_gs1_global_did(mut self, did: impl Into<String>) -> Self {
        self.gs1_global_did = Some(did.into());
        self
    }

    /// Limit chains to `depth` credentials. Zero is raised to one, since a
    /// chain always holds its leaf.
    pub fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = depth.max(1);
        self
    }

    /// Defaults overridden by the `GS1_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_FULL_JSON_SCHEMA_VALIDATION) {
            config.full_json_schema_validation = parse_bool(ENV_FULL_JSON_SCHEMA_VALIDATION, &value)?;
        }
        if let Some(did) = lookup(ENV_GS1_GLOBAL_DID).filter(|d| !d.trim().is_empty()) {
            config.gs1_global_did = Some(did.trim().to_string());
        }
        if let Some(value) = lookup(ENV_MAX_CHAIN_DEPTH) {
            let depth = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|d| *d > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: ENV_MAX_CHAIN_DEPTH,
                    value: value.clone(),
                    expected: "a positive integer",
                })?;
            config.max_chain_depth = depth;
        }
        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = VerifierConfig::default();
        assert!(config.full_json_schema_validation);
        assert_eq!(config.gs1_global_did, None);
        assert_eq!(config.max_chain_depth, 16);
        assert_eq!(VerifierConfig::from_lookup(lookup(&[])).unwrap(), config);
    }

    #[test]
    fn test_environment_overrides() {
        let config = VerifierConfig::from_lookup(lookup(&[
            ("GS1_FULL_JSON_SCHEMA_VALIDATION", "false"),
            ("GS1_GLOBAL_DID", " did:web:gs1-global.example "),
            ("GS1_MAX_CHAIN_DEPTH", "4"),
        ]))
        .unwrap();
        assert!(!config.full_json_schema_validation);
        assert_eq!(config.gs1_global_did.as_deref(), Some("did:web:gs1-global.example"));
        assert_eq!(config.max_chain_depth, 4);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = VerifierConfig::from_lookup(lookup(&[("GS1_MAX_CHAIN_DEPTH", "0")])).unwrap_err();
        assert!(err.to_string().contains("GS1_MAX_CHAIN_DEPTH"));
        assert!(VerifierConfig::from_lookup(lookup(&[("GS1_FULL_JSON_SCHEMA_VALIDATION", "maybe")])).is_err());
    }

    #[test]
    fn test_setters() {
        let config = VerifierConfig::default()
            .with_schema_validation(false)
            .with_gs1_global_did("did:web:gs1-global.example")
            .with_max_chain_depth(0);
        assert!(!config.full_json_schema_validation);
        assert_eq!(config.max_chain_depth, 1);
    }
}
