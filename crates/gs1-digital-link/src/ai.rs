//! # Application Identifier Table
//!
//! The GS1 primary identification keys that may open a Digital Link path,
//! with their value syntax, permitted key qualifiers and check-digit
//! placement.
//!
//! | AI   | Key      | Syntax         | Check digit |
//! |------|----------|----------------|-------------|
//! | 01   | GTIN     | N14            | end         |
//! | 8006 | ITIP     | N18            | end         |
//! | 414  | GLN      | N13            | column 13   |
//! | 417  | partyGLN | N13            | column 13   |
//! | 00   | SSCC     | N18            | end         |
//! | 8003 | GRAI     | N14 + X..16    | column 14   |
//! | 8004 | GIAI     | X..30          | none        |
//! | 8018 | GSRN     | N18            | end         |
//! | 8017 | GSRNP    | N18            | none        |
//! | 253  | GDTI     | N13 + X..17    | column 13   |
//! | 255  | GCN      | N13 + N..12    | column 13   |
//! | 402  | GSIN     | N17            | end         |
//! | 8013 | GMN      | X..25          | none        |
//! | 8010 | CPID     | Y..30          | none        |
//! | 401  | GINC     | X..30          | none        |

use serde::{Deserialize, Serialize};

use crate::check_digit::CheckDigitPosition;

/// Identifier type of a parsed Digital Link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierType {
    /// Global Location Number (AI 414 and party GLN, AI 417).
    #[serde(rename = "GLN")]
    Gln,
    /// Global Trade Item Number.
    #[serde(rename = "GTIN")]
    Gtin,
    /// Serial Shipping Container Code.
    #[serde(rename = "SSCC")]
    Sscc,
    /// Global Returnable Asset Identifier.
    #[serde(rename = "GRAI")]
    Grai,
    /// Global Individual Asset Identifier.
    #[serde(rename = "GIAI")]
    Giai,
    /// Global Service Relation Number (provider).
    #[serde(rename = "GSRN")]
    Gsrn,
    /// Global Service Relation Number (recipient).
    #[serde(rename = "GSRNP")]
    Gsrnp,
    /// Global Document Type Identifier.
    #[serde(rename = "GDTI")]
    Gdti,
    /// Global Coupon Number.
    #[serde(rename = "GCN")]
    Gcn,
    /// Global Shipment Identification Number.
    #[serde(rename = "GSIN")]
    Gsin,
    /// Identification of an Individual Trade Item Piece.
    #[serde(rename = "ITIP")]
    Itip,
    /// Global Model Number.
    #[serde(rename = "GMN")]
    Gmn,
    /// Component/Part Identifier.
    #[serde(rename = "CPID")]
    Cpid,
    /// Global Identification Number for Consignment.
    #[serde(rename = "GINC")]
    Ginc,
    /// Not a recognised primary key.
    #[serde(rename = "Unknown")]
    Unknown,
}

impl IdentifierType {
    /// Classify an Application Identifier code.
    pub fn from_ai(ai: &str) -> Self {
        PrimaryKey::lookup(ai).map_or(Self::Unknown, |pk| pk.identifier_type)
    }

    /// Short name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gln => "GLN",
            Self::Gtin => "GTIN",
            Self::Sscc => "SSCC",
            Self::Grai => "GRAI",
            Self::Giai => "GIAI",
            Self::Gsrn => "GSRN",
            Self::Gsrnp => "GSRNP",
            Self::Gdti => "GDTI",
            Self::Gcn => "GCN",
            Self::Gsin => "GSIN",
            Self::Itip => "ITIP",
            Self::Gmn => "GMN",
            Self::Cpid => "CPID",
            Self::Ginc => "GINC",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character class of a value component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Digits only.
    Numeric,
    /// GS1 AI encodable character set 82.
    Cset82,
    /// GS1 AI encodable character set 39.
    Cset39,
}

impl Charset {
    /// Whether `c` belongs to this character set.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Numeric => c.is_ascii_digit(),
            Self::Cset82 => {
                c.is_ascii_alphanumeric() || "!\"%&'()*+,-./:;<=>?_".contains(c)
            }
            Self::Cset39 => c.is_ascii_digit() || c.is_ascii_uppercase() || "#-/".contains(c),
        }
    }
}

/// One component of a value: `len` characters from `charset`, either
/// exactly (`fixed`) or up to `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Allowed characters.
    pub charset: Charset,
    /// Length, exact or maximum.
    pub len: usize,
    /// `true` for exactly `len`, `false` for `1..=len`.
    pub fixed: bool,
}

const fn fixed(charset: Charset, len: usize) -> Component {
    Component { charset, len, fixed: true }
}

const fn upto(charset: Charset, len: usize) -> Component {
    Component { charset, len, fixed: false }
}

/// Validate `value` against a component sequence. Variable-length
/// components other than the first are optional.
pub fn matches_syntax(value: &str, syntax: &[Component]) -> bool {
    let chars: Vec<char> = value.chars().collect();
    let mut pos = 0;
    for (i, component) in syntax.iter().enumerate() {
        let remaining = chars.len() - pos;
        let take = if component.fixed {
            if remaining < component.len {
                return false;
            }
            component.len
        } else {
            if remaining == 0 && i > 0 {
                continue;
            }
            if remaining == 0 || remaining > component.len && i + 1 == syntax.len() {
                return false;
            }
            remaining.min(component.len)
        };
        if !chars[pos..pos + take].iter().all(|&c| component.charset.contains(c)) {
            return false;
        }
        pos += take;
    }
    pos == chars.len()
}

/// A key qualifier permitted after a primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Qualifier {
    /// Qualifier AI code.
    pub ai: &'static str,
    /// Value syntax.
    pub syntax: &'static [Component],
}

/// A primary identification key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryKey {
    /// AI code opening the Digital Link path.
    pub ai: &'static str,
    /// Identifier type reported for this key.
    pub identifier_type: IdentifierType,
    /// Value syntax.
    pub syntax: &'static [Component],
    /// Qualifiers in the order they must appear.
    pub qualifiers: &'static [Qualifier],
    /// Where the check digit sits.
    pub check_digit: CheckDigitPosition,
}

use Charset::{Cset39, Cset82, Numeric};

const CPV: Qualifier = Qualifier { ai: "22", syntax: &[upto(Cset82, 20)] };
const LOT: Qualifier = Qualifier { ai: "10", syntax: &[upto(Cset82, 20)] };
const SERIAL: Qualifier = Qualifier { ai: "21", syntax: &[upto(Cset82, 20)] };
const GLN_EXTENSION: Qualifier = Qualifier { ai: "254", syntax: &[upto(Cset82, 20)] };
const RFID_CODE: Qualifier = Qualifier { ai: "7040", syntax: &[fixed(Cset82, 4)] };
const SRIN: Qualifier = Qualifier { ai: "8019", syntax: &[upto(Numeric, 10)] };
const CPID_SERIAL: Qualifier = Qualifier { ai: "8011", syntax: &[upto(Numeric, 12)] };

/// All primary keys, in classification order.
pub const PRIMARY_KEYS: &[PrimaryKey] = &[
    PrimaryKey {
        ai: "01",
        identifier_type: IdentifierType::Gtin,
        syntax: &[fixed(Numeric, 14)],
        qualifiers: &[CPV, LOT, SERIAL],
        check_digit: CheckDigitPosition::End,
    },
    PrimaryKey {
        ai: "8006",
        identifier_type: IdentifierType::Itip,
        syntax: &[fixed(Numeric, 18)],
        qualifiers: &[CPV, LOT, SERIAL],
        check_digit: CheckDigitPosition::End,
    },
    PrimaryKey {
        ai: "414",
        identifier_type: IdentifierType::Gln,
        syntax: &[fixed(Numeric, 13)],
        qualifiers: &[GLN_EXTENSION, RFID_CODE],
        check_digit: CheckDigitPosition::Column(13),
    },
    PrimaryKey {
        ai: "417",
        identifier_type: IdentifierType::Gln,
        syntax: &[fixed(Numeric, 13)],
        qualifiers: &[RFID_CODE],
        check_digit: CheckDigitPosition::Column(13),
    },
    PrimaryKey {
        ai: "00",
        identifier_type: IdentifierType::Sscc,
        syntax: &[fixed(Numeric, 18)],
        qualifiers: &[],
        check_digit: CheckDigitPosition::End,
    },
    PrimaryKey {
        ai: "8003",
        identifier_type: IdentifierType::Grai,
        syntax: &[fixed(Numeric, 14), upto(Cset82, 16)],
        qualifiers: &[],
        check_digit: CheckDigitPosition::Column(14),
    },
    PrimaryKey {
        ai: "8004",
        identifier_type: IdentifierType::Giai,
        syntax: &[upto(Cset82, 30)],
        qualifiers: &[],
        check_digit: CheckDigitPosition::None,
    },
    PrimaryKey {
        ai: "8018",
        identifier_type: IdentifierType::Gsrn,
        syntax: &[fixed(Numeric, 18)],
        qualifiers: &[SRIN],
        check_digit: CheckDigitPosition::End,
    },
    PrimaryKey {
        ai: "8017",
        identifier_type: IdentifierType::Gsrnp,
        syntax: &[fixed(Numeric, 18)],
        qualifiers: &[SRIN],
        check_digit: CheckDigitPosition::None,
    },
    PrimaryKey {
        ai: "253",
        identifier_type: IdentifierType::Gdti,
        syntax: &[fixed(Numeric, 13), upto(Cset82, 17)],
        qualifiers: &[],
        check_digit: CheckDigitPosition::Column(13),
    },
    PrimaryKey {
        ai: "255",
        identifier_type: IdentifierType::Gcn,
        syntax: &[fixed(Numeric, 13), upto(Numeric, 12)],
        qualifiers: &[],
        check_digit: CheckDigitPosition::Column(13),
    },
    PrimaryKey {
        ai: "402",
        identifier_type: IdentifierType::Gsin,
        syntax: &[fixed(Numeric, 17)],
        qualifiers: &[],
        check_digit: CheckDigitPosition::End,
    },
    PrimaryKey {
        ai: "8013",
        identifier_type: IdentifierType::Gmn,
        syntax: &[upto(Cset82, 25)],
        qualifiers: &[],
        check_digit: CheckDigitPosition::None,
    },
    PrimaryKey {
        ai: "8010",
        identifier_type: IdentifierType::Cpid,
        syntax: &[upto(Cset39, 30)],
        qualifiers: &[CPID_SERIAL],
        check_digit: CheckDigitPosition::None,
    },
    PrimaryKey {
        ai: "401",
        identifier_type: IdentifierType::Ginc,
        syntax: &[upto(Cset82, 30)],
        qualifiers: &[],
        check_digit: CheckDigitPosition::None,
    },
];

impl PrimaryKey {
    /// Look up a primary key by AI code.
    pub fn lookup(ai: &str) -> Option<&'static PrimaryKey> {
        PRIMARY_KEYS.iter().find(|pk| pk.ai == ai)
    }

    /// Look up a qualifier permitted for this key.
    pub fn qualifier(&self, ai: &str) -> Option<(usize, &'static Qualifier)> {
        self.qualifiers.iter().enumerate().find(|(_, q)| q.ai == ai)
    }
}
