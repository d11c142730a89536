//! # Verifiable Credential Structure
//!
//! The credential envelope following the W3C VC Data Model v2.0, with the
//! credential-subject members the GS1 license hierarchy relies on.
//!
//! Dates are kept as the raw strings found in the document. An unparseable
//! `validFrom` is a rule violation reported by the date predicates, not a
//! deserialization failure that would hide every other finding.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use gs1_core::Gs1Error;

use crate::credential_type::CredentialType;
use crate::serde_util::one_or_many;

/// A W3C Verifiable Credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiableCredential {
    /// JSON-LD contexts. Strings in practice; objects are kept verbatim.
    #[serde(rename = "@context", default, deserialize_with = "one_or_many")]
    pub context: Vec<Value>,

    /// Credential identifier (URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Ordered set of type labels.
    #[serde(rename = "type", default, deserialize_with = "one_or_many")]
    pub types: Vec<String>,

    /// The issuing authority.
    pub issuer: Issuer,

    /// Start of the validity window (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,

    /// End of the validity window (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,

    /// Human readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The subject the credential makes claims about.
    pub credential_subject: CredentialSubject,

    /// JSON Schema the credential declares conformance to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_schema: Option<CredentialSchema>,

    /// Status list entry, opaque to chain validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_status: Option<Value>,

    /// Remaining members (proof, renderMethod, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VerifiableCredential {
    /// Parse a credential from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Gs1Error> {
        serde_json::from_str(json).map_err(|e| Gs1Error::MalformedDocument(e.to_string()))
    }

    /// Parse a credential from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, Gs1Error> {
        serde_json::from_value(value).map_err(|e| Gs1Error::MalformedDocument(e.to_string()))
    }

    /// Serialize back into a JSON value (for schema validation).
    pub fn to_value(&self) -> Result<Value, Gs1Error> {
        Ok(serde_json::to_value(self)?)
    }

    /// The GS1 type of this credential, if it declares one.
    pub fn credential_type(&self) -> Option<CredentialType> {
        CredentialType::from_types(&self.types)
    }

    /// Name used when reporting results: the GS1 type name, else the last
    /// declared type, else `"unknown"`.
    pub fn credential_name(&self) -> String {
        match self.credential_type() {
            Some(t) => t.name().to_string(),
            None => self
                .types
                .last()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }

    /// The credential id, or `"unknown"` for anonymous credentials.
    pub fn id_or_unknown(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }

    /// The issuer identifier.
    pub fn issuer_id(&self) -> &str {
        &self.issuer.id
    }

    /// URI of the parent credential this one extends.
    pub fn extends_credential(&self) -> Option<&str> {
        self.credential_subject.extends_credential.as_deref()
    }

    /// URI of the parent credential: `extendsCredential`, or for data
    /// credentials their `keyAuthorization`.
    pub fn parent_uri(&self) -> Option<&str> {
        self.extends_credential().or_else(|| {
            self.credential_type()
                .filter(CredentialType::is_data)
                .and(self.credential_subject.key_authorization.as_deref())
        })
    }

    /// The `@context` entries that are plain URLs.
    pub fn context_urls(&self) -> impl Iterator<Item = &str> {
        self.context.iter().filter_map(Value::as_str)
    }
}

// ─── Issuer ──────────────────────────────────────────────────────────

/// The issuer of a credential: a bare URI or an object carrying `id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Issuer {
    /// Issuer URI (usually a DID).
    pub id: String,
    /// Additional issuer members when the object form was used.
    pub extra: Map<String, Value>,
}

impl Issuer {
    /// Issuer with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IssuerRepr {
    Id(String),
    Object {
        id: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl<'de> Deserialize<'de> for Issuer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match IssuerRepr::deserialize(deserializer)? {
            IssuerRepr::Id(id) => Issuer::new(id),
            IssuerRepr::Object { id, extra } => Issuer { id, extra },
        })
    }
}

/// Serializes as a bare string unless extra members are present.
impl Serialize for Issuer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.extra.is_empty() {
            return serializer.serialize_str(&self.id);
        }
        let mut object = self.extra.clone();
        object.insert("id".to_string(), Value::String(self.id.clone()));
        object.serialize(serializer)
    }
}

// ─── Credential Subject ──────────────────────────────────────────────

/// The credential subject. Which members are populated depends on the
/// credential type: licenses carry `licenseValue`, keys and data
/// credentials carry a Digital Link `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSubject {
    /// Subject identifier: a DID for licensees, a Digital Link for keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The numeric prefix range a license grants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_value: Option<String>,

    /// License value without its leading zero (U.P.C. prefixes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_license_value: Option<String>,

    /// URI of the credential this one extends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends_credential: Option<String>,

    /// Alternative Digital Link for the same subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_as: Option<String>,

    /// Reference to the key credential authorising a data credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_authorization: Option<String>,

    /// Organisation master data (`gs1:partyGLN`, `gs1:organizationName`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Value>,

    /// Product master data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Value>,

    /// Remaining members.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CredentialSubject {
    /// `organization["gs1:partyGLN"]`, when present as a string.
    pub fn party_gln(&self) -> Option<&str> {
        self.organization
            .as_ref()
            .and_then(|o| o.get("gs1:partyGLN"))
            .and_then(Value::as_str)
    }
}

/// A `credentialSchema` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSchema {
    /// Schema identifier handed to the schema loader.
    pub id: String,
    /// Schema type, typically `JsonSchema`.
    #[serde(rename = "type", default)]
    pub schema_type: String,
}
