//! # gs1-digital-link — GS1 Digital Link Identifiers
//!
//! Parses GS1 Digital Link URIs into typed, check-digit-validated
//! identifier records.
//!
//! - **Grammar** (`grammar.rs`): splits a link into primary key, key
//!   qualifiers and attributes. Pluggable via [`DigitalLinkGrammar`].
//!
//! - **AI table** (`ai.rs`): primary keys, their value syntax, permitted
//!   qualifiers and the [`IdentifierType`] each maps to.
//!
//! - **Check digit** (`check_digit.rs`): the GS1 mod-10 algorithm at the
//!   position each key defines. Never delegated to the grammar.
//!
//! - **Parse** (`parse.rs`): [`parse_gs1_digital_link`] ties the three
//!   together and yields a [`DigitalLinkValue`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gs1-*` crates.
//! - Parsing never panics and never returns an error; rejections are
//!   values.

pub mod ai;
pub mod check_digit;
pub mod grammar;
pub mod parse;

pub use ai::IdentifierType;
pub use check_digit::{calculate_check_digit, validate_check_digit, CheckDigitPosition};
pub use grammar::{DigitalLinkGrammar, DigitalLinkParts, GrammarError, StandardGrammar};
pub use parse::{parse_gs1_digital_link, DigitalLinkParser, DigitalLinkValue};
