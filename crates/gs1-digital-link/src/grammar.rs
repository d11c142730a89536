//! # Digital Link Grammar
//!
//! Splits a GS1 Digital Link URI into its primary key, key qualifiers and
//! query attributes, and checks each value against its AI syntax.
//!
//! The grammar is a capability behind [`DigitalLinkGrammar`] so callers can
//! plug in a stricter (or looser) implementation. It never looks at check
//! digits: that is done separately by [`crate::check_digit`] for every key
//! in the AI table.
//!
//! Accepted forms:
//!
//! ```text
//! https://id.gs1.org/01/04270005112602/21/ABC?17=261231
//! https://brand.example.com/shop/01/04270005112602      (custom path prefix)
//! /01/04270005112602/10/LOT-1                           (path only)
//! 01/04270005112602
//! ```

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

use crate::ai::{matches_syntax, PrimaryKey};

/// Resolver used to anchor path-only input.
const DEFAULT_RESOLVER: &str = "https://id.gs1.org";

/// The components of a Digital Link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalLinkParts {
    /// Host of the URI; `None` for path-only input.
    pub domain: Option<String>,
    /// Primary key as `(ai, value)`.
    pub identifier: (String, String),
    /// Key qualifiers as `(ai, value)`, in path order.
    pub key_qualifiers: Vec<(String, String)>,
    /// Query string attributes, in order.
    pub attributes: Vec<(String, String)>,
}

/// Why a string is not a Digital Link.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Nothing to parse.
    #[error("empty input")]
    Empty,

    /// The URI itself could not be parsed.
    #[error("invalid URI: {0}")]
    InvalidUri(String),

    /// Only `http` and `https` links are Digital Links.
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    /// No primary key AI with a value in the path.
    #[error("no primary identification key in path")]
    NoIdentifier,

    /// The primary key value violates its AI syntax.
    #[error("invalid value {value:?} for AI {ai}")]
    InvalidIdentifierValue {
        /// Primary key AI.
        ai: String,
        /// Rejected value.
        value: String,
    },

    /// A path AI that is not a permitted qualifier here, or out of order.
    #[error("unexpected key qualifier {qualifier:?} after AI {primary}")]
    UnexpectedQualifier {
        /// Primary key AI.
        primary: String,
        /// Offending qualifier.
        qualifier: String,
    },

    /// A qualifier value violates its AI syntax.
    #[error("invalid value {value:?} for qualifier {ai}")]
    InvalidQualifierValue {
        /// Qualifier AI.
        ai: String,
        /// Rejected value.
        value: String,
    },

    /// A qualifier AI without a value.
    #[error("trailing path segment {0:?} without value")]
    TrailingSegment(String),
}

/// A Digital Link grammar implementation.
pub trait DigitalLinkGrammar: Send + Sync {
    /// Split `input` into its Digital Link components.
    fn parse(&self, input: &str) -> Result<DigitalLinkParts, GrammarError>;
}

/// The GS1 Digital Link URI syntax over the primary keys in
/// [`crate::ai::PRIMARY_KEYS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardGrammar;

impl DigitalLinkGrammar for StandardGrammar {
    fn parse(&self, input: &str) -> Result<DigitalLinkParts, GrammarError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GrammarError::Empty);
        }

        let (url, domain) = if input.contains("://") {
            let url = Url::parse(input).map_err(|e| GrammarError::InvalidUri(e.to_string()))?;
            let domain = url.host_str().map(str::to_string);
            (url, domain)
        } else {
            let anchored = format!("{DEFAULT_RESOLVER}/{}", input.trim_start_matches('/'));
            let url = Url::parse(&anchored).map_err(|e| GrammarError::InvalidUri(e.to_string()))?;
            (url, None)
        };

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(GrammarError::UnsupportedScheme(url.scheme().to_string()));
        }

        let segments = url
            .path_segments()
            .map(|segs| {
                segs.filter(|s| !s.is_empty())
                    .map(percent_decode)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        let attributes = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        // Anything before the first primary key is a custom path prefix.
        let start = (0..segments.len().saturating_sub(1))
            .find(|&i| PrimaryKey::lookup(&segments[i]).is_some())
            .ok_or(GrammarError::NoIdentifier)?;
        let (ai, value) = (&segments[start], &segments[start + 1]);
        let Some(primary) = PrimaryKey::lookup(ai) else {
            return Err(GrammarError::NoIdentifier);
        };
        if !matches_syntax(value, primary.syntax) {
            return Err(GrammarError::InvalidIdentifierValue {
                ai: ai.clone(),
                value: value.clone(),
            });
        }

        let key_qualifiers = parse_qualifiers(primary, &segments[start + 2..])?;

        Ok(DigitalLinkParts {
            domain,
            identifier: (ai.clone(), value.clone()),
            key_qualifiers,
            attributes,
        })
    }
}

fn parse_qualifiers(
    primary: &PrimaryKey,
    rest: &[String],
) -> Result<Vec<(String, String)>, GrammarError> {
    let mut qualifiers = Vec::new();
    let mut next_allowed = 0;
    for pair in rest.chunks(2) {
        let [ai, value] = pair else {
            return Err(GrammarError::TrailingSegment(pair[0].clone()));
        };
        let position = match primary.qualifier(ai) {
            Some((position, _)) if position >= next_allowed => position,
            _ => {
                return Err(GrammarError::UnexpectedQualifier {
                    primary: primary.ai.to_string(),
                    qualifier: ai.clone(),
                })
            }
        };
        let qualifier = &primary.qualifiers[position];
        if !matches_syntax(value, qualifier.syntax) {
            return Err(GrammarError::InvalidQualifierValue {
                ai: ai.clone(),
                value: value.clone(),
            });
        }
        next_allowed = position + 1;
        qualifiers.push((ai.clone(), value.clone()));
    }
    Ok(qualifiers)
}

fn percent_decode(segment: &str) -> Result<String, GrammarError> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| GrammarError::InvalidUri(format!("{segment:?}: {e}")))
}
