//! # Verifiable Presentation
//!
//! A holder-bundled set of credentials. GS1 presentations usually carry a
//! whole chain (key, company prefix license, prefix license) so parents can
//! be resolved inline before any external loader is consulted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use gs1_core::Gs1Error;

use crate::credential::VerifiableCredential;
use crate::serde_util::one_or_many;

/// A W3C Verifiable Presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiablePresentation {
    /// JSON-LD contexts.
    #[serde(rename = "@context", default, deserialize_with = "one_or_many")]
    pub context: Vec<Value>,

    /// Type labels, normally `["VerifiablePresentation"]`.
    #[serde(rename = "type", default, deserialize_with = "one_or_many")]
    pub types: Vec<String>,

    /// The presenting holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,

    /// Embedded credentials, in presentation order.
    #[serde(default, deserialize_with = "one_or_many")]
    pub verifiable_credential: Vec<VerifiableCredential>,

    /// Remaining members.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VerifiablePresentation {
    /// Parse a presentation from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Gs1Error> {
        serde_json::from_str(json).map_err(|e| Gs1Error::MalformedDocument(e.to_string()))
    }

    /// Find an embedded credential by its `id`.
    pub fn find(&self, id: &str) -> Option<&VerifiableCredential> {
        self.verifiable_credential
            .iter()
            .find(|vc| vc.id.as_deref() == Some(id))
    }
}
