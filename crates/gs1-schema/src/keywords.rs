//! # GS1 Schema Keywords
//!
//! Custom keywords registered on the JSON Schema engine. Each runs a
//! subject predicate from `gs1-rules` on the object it is attached to;
//! non-object instances pass.
//!
//! | Keyword | Predicate |
//! |---------|-----------|
//! | `altLicenseValidation` | alternative license value |
//! | `digitalLink` | subject `id` is a Digital Link |
//! | `digitalLinkSameAs` | subject `sameAs` is a Digital Link |
//!
//! A failing keyword reports the rule text as its message; the catalog
//! maps it back to the rule.

use jsonschema::paths::{LazyLocation, Location};
use jsonschema::{Keyword, ValidationError, ValidationOptions};
use serde_json::{Map, Value};

use gs1_rules::subject::{
    check_alternative_license_value, check_same_as_digital_link, check_subject_id_digital_link,
};
use gs1_rules::catalog::{
    ALTERNATIVE_LICENSE_NOT_SUPPORTED, INVALID_ALTERNATIVE_LICENSE_VALUE, INVALID_DIGITAL_LINK,
    INVALID_DIGITAL_LINK_SAME_AS,
};
use gs1_rules::{RuleCheckResult, RuleDescriptor};
use gs1_vc::CredentialSubject;

/// The GS1 keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gs1Keyword {
    /// `altLicenseValidation`
    AltLicenseValidation,
    /// `digitalLink`
    DigitalLink,
    /// `digitalLinkSameAs`
    DigitalLinkSameAs,
}

impl Gs1Keyword {
    /// Every GS1 keyword.
    pub const ALL: [Gs1Keyword; 3] = [
        Self::AltLicenseValidation,
        Self::DigitalLink,
        Self::DigitalLinkSameAs,
    ];

    /// Keyword name in schemas.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AltLicenseValidation => "altLicenseValidation",
            Self::DigitalLink => "digitalLink",
            Self::DigitalLinkSameAs => "digitalLinkSameAs",
        }
    }

    /// Look up a keyword by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// The keyword that reports `rule`.
    pub fn for_rule(rule: RuleDescriptor) -> Option<Self> {
        match rule {
            r if r == INVALID_ALTERNATIVE_LICENSE_VALUE || r == ALTERNATIVE_LICENSE_NOT_SUPPORTED => {
                Some(Self::AltLicenseValidation)
            }
            r if r == INVALID_DIGITAL_LINK => Some(Self::DigitalLink),
            r if r == INVALID_DIGITAL_LINK_SAME_AS => Some(Self::DigitalLinkSameAs),
            _ => None,
        }
    }

    /// Run the keyword's predicate on an instance.
    pub fn check(&self, instance: &Value) -> RuleCheckResult {
        let Some(object) = instance.as_object() else {
            return RuleCheckResult::pass();
        };
        let subject = subject_fields(object);
        match self {
            Self::AltLicenseValidation => check_alternative_license_value(&subject),
            Self::DigitalLink => check_subject_id_digital_link(&subject),
            Self::DigitalLinkSameAs => check_same_as_digital_link(&subject),
        }
    }
}

/// The subject members the predicates read. Members of the wrong JSON
/// type count as absent.
fn subject_fields(object: &Map<String, Value>) -> CredentialSubject {
    let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
    CredentialSubject {
        id: text("id"),
        license_value: text("licenseValue"),
        alternative_license_value: text("alternativeLicenseValue"),
        same_as: text("sameAs"),
        ..Default::default()
    }
}

struct RuleKeyword {
    keyword: Gs1Keyword,
    schema_path: Location,
}

impl Keyword for RuleKeyword {
    fn validate<'i>(
        &self,
        instance: &'i Value,
        location: &LazyLocation,
    ) -> Result<(), ValidationError<'i>> {
        let result = self.keyword.check(instance);
        match result.rule {
            Some(rule) if !result.verified => Err(ValidationError::custom(
                self.schema_path.clone(),
                location.into(),
                instance,
                rule.rule,
            )),
            _ => Ok(()),
        }
    }

    fn is_valid(&self, instance: &Value) -> bool {
        self.keyword.check(instance).verified
    }
}

fn factory<'a>(
    keyword: Gs1Keyword,
    path: Location,
) -> Result<Box<dyn Keyword>, ValidationError<'a>> {
    Ok(Box::new(RuleKeyword {
        keyword,
        schema_path: path,
    }))
}

fn alt_license_validation<'a>(
    _parent: &'a Map<String, Value>,
    _value: &'a Value,
    path: Location,
) -> Result<Box<dyn Keyword>, ValidationError<'a>> {
    factory(Gs1Keyword::AltLicenseValidation, path)
}

fn digital_link<'a>(
    _parent: &'a Map<String, Value>,
    _value: &'a Value,
    path: Location,
) -> Result<Box<dyn Keyword>, ValidationError<'a>> {
    factory(Gs1Keyword::DigitalLink, path)
}

fn digital_link_same_as<'a>(
    _parent: &'a Map<String, Value>,
    _value: &'a Value,
    path: Location,
) -> Result<Box<dyn Keyword>, ValidationError<'a>> {
    factory(Gs1Keyword::DigitalLinkSameAs, path)
}

/// Register every GS1 keyword on `opts`.
pub fn register_keywords(opts: &mut ValidationOptions) {
    opts.with_keyword(Gs1Keyword::AltLicenseValidation.name(), alt_license_validation);
    opts.with_keyword(Gs1Keyword::DigitalLink.name(), digital_link);
    opts.with_keyword(Gs1Keyword::DigitalLinkSameAs.name(), digital_link_same_as);
}
