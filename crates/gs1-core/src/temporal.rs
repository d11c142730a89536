//! Second-granularity UTC instants for credential validity windows.
//!
//! `validFrom` and `validUntil` are compared against the verification time
//! after dropping sub-second digits on both sides, so a credential that
//! becomes valid at exactly "now" passes and one becoming valid a second
//! later does not.
//!
//! Issuers write dates with explicit offsets (`+01:00`) about as often as
//! with `Z`. Dates read out of credentials go through
//! [`Timestamp::parse_lenient`]; [`Timestamp::parse`] only admits the `Z`
//! form and is meant for timestamps produced locally (fixtures, CLI flags).

use std::fmt;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimestampError;

/// A point in time, UTC, whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Self {
        Self::whole_seconds(Utc::now())
    }

    /// Wraps a chrono instant, discarding its fractional second.
    fn whole_seconds(instant: DateTime<Utc>) -> Self {
        // Going through the epoch value cannot fail for an instant chrono
        // already represents.
        match DateTime::from_timestamp(instant.timestamp(), 0) {
            Some(whole) => Self(whole),
            None => Self(instant),
        }
    }

    /// Strict RFC 3339: the value must be written in `Z` form.
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        match input.strip_suffix('Z') {
            Some(_) => Self::parse_lenient(input),
            None => Err(TimestampError::NotUtc(input.to_owned())),
        }
    }

    /// RFC 3339 with any UTC offset; the result is normalized to UTC.
    pub fn parse_lenient(input: &str) -> Result<Self, TimestampError> {
        DateTime::parse_from_rfc3339(input)
            .map(|fixed| Self::whole_seconds(fixed.to_utc()))
            .map_err(|source| TimestampError::InvalidFormat {
                input: input.to_owned(),
                reason: source.to_string(),
            })
    }

    /// This instant moved by `secs` (negative moves backwards). Past the
    /// representable range the instant is returned unchanged.
    pub fn offset_secs(&self, secs: i64) -> Self {
        Duration::try_seconds(secs)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map_or(*self, Self)
    }

    /// `YYYY-MM-DDThh:mm:ssZ`
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}
