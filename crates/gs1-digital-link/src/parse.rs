//! # Digital Link Value
//!
//! Parses a Digital Link into a [`DigitalLinkValue`]: grammar first, then
//! AI classification, then the positional check digit. Parsing never fails
//! with an error; every rejection is `is_valid == false`.

use serde::Serialize;

use crate::ai::IdentifierType;
use crate::check_digit::validate_check_digit;
use crate::grammar::{DigitalLinkGrammar, StandardGrammar};

/// Outcome of parsing a Digital Link.
///
/// `parsed_value` is present exactly when `is_valid` is true; the
/// constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalLinkValue {
    is_valid: bool,
    #[serde(rename = "type")]
    identifier_type: IdentifierType,
    original_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parsed_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_uri_elements: Option<Vec<String>>,
}

impl DigitalLinkValue {
    /// A rejected input.
    pub fn invalid(original: impl Into<String>, identifier_type: IdentifierType) -> Self {
        Self {
            is_valid: false,
            identifier_type,
            original_value: original.into(),
            parsed_value: None,
            other_uri_elements: None,
        }
    }

    /// An accepted input. An empty qualifier list is stored as absent.
    pub fn valid(
        original: impl Into<String>,
        identifier_type: IdentifierType,
        parsed_value: impl Into<String>,
        other_uri_elements: Vec<String>,
    ) -> Self {
        Self {
            is_valid: true,
            identifier_type,
            original_value: original.into(),
            parsed_value: Some(parsed_value.into()),
            other_uri_elements: (!other_uri_elements.is_empty()).then_some(other_uri_elements),
        }
    }

    /// Whether the input is a well-formed Digital Link with a correct
    /// check digit.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The identifier type of the primary key.
    pub fn identifier_type(&self) -> IdentifierType {
        self.identifier_type
    }

    /// The raw input.
    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    /// The full primary key value (check digit included).
    pub fn parsed_value(&self) -> Option<&str> {
        self.parsed_value.as_deref()
    }

    /// Key qualifiers flattened as `[ai, value, ai, value, ...]`.
    pub fn other_uri_elements(&self) -> Option<&[String]> {
        self.other_uri_elements.as_deref()
    }
}

/// Parser over a pluggable grammar.
#[derive(Debug, Clone, Default)]
pub struct DigitalLinkParser<G = StandardGrammar> {
    grammar: G,
}

impl<G: DigitalLinkGrammar> DigitalLinkParser<G> {
    /// Parser using `grammar` to split links.
    pub fn new(grammar: G) -> Self {
        Self { grammar }
    }

    /// Parse `input`.
    pub fn parse(&self, input: &str) -> DigitalLinkValue {
        if input.trim().is_empty() {
            return DigitalLinkValue::invalid(input, IdentifierType::Unknown);
        }

        let parts = match self.grammar.parse(input) {
            Ok(parts) => parts,
            Err(e) => {
                tracing::debug!(input, error = %e, "digital link grammar rejected input");
                return DigitalLinkValue::invalid(input, IdentifierType::Unknown);
            }
        };

        let (ai, value) = parts.identifier;
        let identifier_type = IdentifierType::from_ai(&ai);
        if !validate_check_digit(&ai, &value) {
            tracing::debug!(input, ai = %ai, "digital link check digit mismatch");
            return DigitalLinkValue::invalid(input, IdentifierType::Unknown);
        }

        let other = parts
            .key_qualifiers
            .into_iter()
            .flat_map(|(k, v)| [k, v])
            .collect();
        DigitalLinkValue::valid(input, identifier_type, value, other)
    }
}

/// Parse a Digital Link with the standard grammar.
pub fn parse_gs1_digital_link(input: &str) -> DigitalLinkValue {
    DigitalLinkParser::new(StandardGrammar).parse(input)
}
