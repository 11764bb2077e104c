use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Scheduled send time (`sendAt`).
///
/// Invariants, checked against the clock at construction:
/// - strict RFC3339 with an uppercase `T` separator and an explicit offset
///   (`2024-10-25T10:30:00+03:30`, `2024-10-25T07:00:00Z`, fractional seconds allowed);
///   lowercase `t`/`z`, a space separator, leap second `60` and the unknown-offset
///   form `-00:00` are rejected,
/// - not earlier than "now" (there is no clock-skew allowance),
/// - not later than the same date and time one year after "now"; a Feb 29 "now"
///   rolls over to Mar 1 of the following year.
///
/// The value is sent to the API exactly as it was provided.
pub struct SendAt {
    raw: String,
    at: DateTime<FixedOffset>,
}

impl SendAt {
    /// JSON field name used by the API (`sendAt`).
    pub const FIELD: &'static str = "sendAt";

    /// Validate a timestamp against the current wall-clock time.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse_at(value, Utc::now())
    }

    /// Validate a timestamp against an explicit `now`.
    pub fn parse_at(value: impl Into<String>, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let raw = value.into();

        let at = parse_strict_rfc3339(&raw)
            .ok_or_else(|| ValidationError::InvalidSendAtFormat { input: raw.clone() })?;

        let at_utc = at.with_timezone(&Utc);
        if at_utc < now {
            return Err(ValidationError::SendAtInPast { input: raw });
        }
        let too_far = one_year_after(now).is_some_and(|limit| at_utc > limit);
        if too_far {
            return Err(ValidationError::SendAtTooFarInFuture { input: raw });
        }

        Ok(Self { raw, at })
    }

    /// Validate an optional timestamp; `None` is always accepted.
    pub fn validate_optional(
        value: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Option<Self>, ValidationError> {
        value.map(|raw| Self::parse_at(raw, now)).transpose()
    }

    /// The timestamp exactly as provided.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed timestamp with its original offset.
    pub fn at(&self) -> DateTime<FixedOffset> {
        self.at
    }
}

fn parse_strict_rfc3339(input: &str) -> Option<DateTime<FixedOffset>> {
    // chrono also accepts these relaxations of the RFC3339 profile.
    let bytes = input.as_bytes();
    if bytes.get(10) != Some(&b'T')
        || bytes.get(17..19) == Some(&b"60"[..])
        || input.ends_with('z')
        || input.ends_with("-00:00")
    {
        return None;
    }
    DateTime::parse_from_rfc3339(input).ok()
}

fn one_year_after(now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let date = now.date_naive();
    let year = date.year().checked_add(1)?;
    let next = date
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))?;
    Some(next.and_time(now.time()).and_utc())
}
