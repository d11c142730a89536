//! # GS1 Check Digit
//!
//! The GS1 mod-10 check digit: reverse the digits preceding the check
//! digit, weight positions 0, 2, 4, ... by 3 and the others by 1, and take
//! `(10 - sum % 10) % 10`.
//!
//! Where the check digit sits depends on the identifier. For most keys it
//! is the last character; for keys followed by a serial component (GRAI,
//! GDTI, GCN) and for GLNs it is a fixed 1-based column.

use crate::ai::PrimaryKey;

/// Where the check digit of an identifier sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckDigitPosition {
    /// Last character of the value.
    End,
    /// Fixed 1-based column.
    Column(usize),
    /// The identifier carries no check digit.
    None,
}

/// Compute the check digit for a digit string. Returns `None` when `digits`
/// contains anything other than ASCII digits.
pub fn calculate_check_digit(digits: &str) -> Option<u8> {
    let mut sum: u32 = 0;
    for (i, c) in digits.chars().rev().enumerate() {
        let d = c.to_digit(10)?;
        sum += if i % 2 == 0 { d * 3 } else { d };
    }
    Some(((10 - sum % 10) % 10) as u8)
}

/// Validate the check digit of `value` at `position`.
///
/// A value shorter than the required column fails rather than passing.
pub fn verify_check_digit(value: &str, position: CheckDigitPosition) -> bool {
    let column = match position {
        CheckDigitPosition::None => return true,
        CheckDigitPosition::End => value.len(),
        CheckDigitPosition::Column(c) => c,
    };
    if column == 0 || value.len() < column || !value.is_char_boundary(column - 1) {
        return false;
    }
    let (body, rest) = value.split_at(column - 1);
    let Some(actual) = rest.chars().next().and_then(|c| c.to_digit(10)) else {
        return false;
    };
    calculate_check_digit(body) == Some(actual as u8)
}

/// Validate the check digit of a primary key value identified by its AI.
/// Unknown AIs carry no check digit.
pub fn validate_check_digit(ai: &str, value: &str) -> bool {
    let position = PrimaryKey::lookup(ai).map_or(CheckDigitPosition::None, |pk| pk.check_digit);
    verify_check_digit(value, position)
}
