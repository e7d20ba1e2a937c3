//! Temporal values: absolute times and durations
//!
//! Times have millisecond resolution. Durations come in two kinds, because
//! Arden keeps `1 month` distinct from `30 days`: a months-based duration
//! adds calendar months, a seconds-based one adds elapsed time. When the two
//! kinds meet in a comparison or a sum, months are converted at the length of
//! the average Gregorian month.

use crate::error::{ParseError, ParseResult};
use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Seconds in an average Gregorian month (365.2425 days / 12)
pub const SECONDS_PER_MONTH: i64 = 2_629_746;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_WEEK: i64 = 604_800;

// ============================================================================
// ArdenTime
// ============================================================================

/// An absolute point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArdenTime(NaiveDateTime);

impl ArdenTime {
    /// Wrap a chrono datetime, dropping sub-millisecond precision
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self::from_millis(datetime.and_utc().timestamp_millis()).unwrap_or(Self(datetime))
    }

    /// Build a time from calendar components
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .map(Self)
    }

    /// Build a time from milliseconds since the Unix epoch
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|dt| Self(dt.naive_utc()))
    }

    /// Milliseconds since the Unix epoch
    pub fn as_millis(&self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }

    /// The underlying chrono value
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Parse `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS[.fff]`
    ///
    /// A leading `@` is accepted for parity with literal syntax.
    pub fn parse(s: &str) -> ParseResult<Self> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('@').unwrap_or(trimmed);

        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self::new(dt));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
            return Ok(Self::new(dt));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return date
                .and_hms_opt(0, 0, 0)
                .map(Self)
                .ok_or_else(|| ParseError::TimeOutOfRange { input: s.to_string() });
        }
        Err(ParseError::invalid_time(s))
    }

    /// Shift this time forward by a duration
    ///
    /// Returns `None` when the result leaves chrono's representable range.
    pub fn add_duration(&self, duration: &ArdenDuration) -> Option<Self> {
        match duration {
            ArdenDuration::Seconds(secs) => {
                let delta = TimeDelta::try_milliseconds(seconds_to_millis(*secs)?)?;
                self.0.checked_add_signed(delta).map(Self)
            }
            ArdenDuration::Months(months) => {
                let whole = months.trunc();
                let whole_months = whole.to_i64()?;
                let shifted = if whole_months >= 0 {
                    self.0.checked_add_months(Months::new(u32::try_from(whole_months).ok()?))?
                } else {
                    self.0.checked_sub_months(Months::new(u32::try_from(-whole_months).ok()?))?
                };
                let remainder = (*months - whole) * Decimal::from(SECONDS_PER_MONTH);
                let delta = TimeDelta::try_milliseconds(seconds_to_millis(remainder)?)?;
                shifted.checked_add_signed(delta).map(Self)
            }
        }
    }

    /// Shift this time backward by a duration
    pub fn sub_duration(&self, duration: &ArdenDuration) -> Option<Self> {
        self.add_duration(&duration.negated())
    }

    /// Elapsed time from `earlier` to `self`, seconds-based
    pub fn duration_since(&self, earlier: &ArdenTime) -> Option<ArdenDuration> {
        let millis = self.as_millis().checked_sub(earlier.as_millis())?;
        Some(ArdenDuration::Seconds(Decimal::new(millis, 3).normalize()))
    }
}

fn seconds_to_millis(seconds: Decimal) -> Option<i64> {
    seconds.checked_mul(Decimal::from(1000))?.round().to_i64()
}

impl fmt::Display for ArdenTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.as_millis().rem_euclid(1000) == 0 {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3f"))
        }
    }
}

impl FromStr for ArdenTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDateTime> for ArdenTime {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// ArdenDuration
// ============================================================================

/// A length of time
///
/// Equality and ordering compare the seconds-equivalent, so `12 months`
/// equals `1 year` and `1 month` sorts below `31 days`. The unit
/// constructors saturate at the bounds of `Decimal`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "unit", content = "amount", rename_all = "lowercase")]
pub enum ArdenDuration {
    /// Elapsed seconds
    Seconds(Decimal),
    /// Calendar months
    Months(Decimal),
}

impl ArdenDuration {
    /// The zero-length duration
    pub const ZERO: Self = Self::Seconds(Decimal::ZERO);

    pub fn seconds(amount: impl Into<Decimal>) -> Self {
        Self::Seconds(amount.into())
    }

    pub fn minutes(amount: impl Into<Decimal>) -> Self {
        Self::Seconds(amount.into().saturating_mul(Decimal::from(SECONDS_PER_MINUTE)))
    }

    pub fn hours(amount: impl Into<Decimal>) -> Self {
        Self::Seconds(amount.into().saturating_mul(Decimal::from(SECONDS_PER_HOUR)))
    }

    pub fn days(amount: impl Into<Decimal>) -> Self {
        Self::Seconds(amount.into().saturating_mul(Decimal::from(SECONDS_PER_DAY)))
    }

    pub fn weeks(amount: impl Into<Decimal>) -> Self {
        Self::Seconds(amount.into().saturating_mul(Decimal::from(SECONDS_PER_WEEK)))
    }

    pub fn months(amount: impl Into<Decimal>) -> Self {
        Self::Months(amount.into())
    }

    pub fn years(amount: impl Into<Decimal>) -> Self {
        Self::Months(amount.into().saturating_mul(Decimal::from(12)))
    }

    /// Check if this is a months-based duration
    pub fn is_months(&self) -> bool {
        matches!(self, Self::Months(_))
    }

    /// Seconds-equivalent of this duration
    ///
    /// `None` when a months-based amount has no seconds-equivalent within
    /// the range of `Decimal`.
    pub fn as_seconds(&self) -> Option<Decimal> {
        match self {
            Self::Seconds(s) => Some(*s),
            Self::Months(m) => m.checked_mul(Decimal::from(SECONDS_PER_MONTH)),
        }
    }

    /// The raw amount in this duration's own unit
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Seconds(a) | Self::Months(a) => *a,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount().is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount().is_sign_negative() && !self.is_zero()
    }

    /// Same kind, opposite sign
    pub fn negated(&self) -> Self {
        self.map_amount(|a| -a)
    }

    /// Apply `f` to the amount, keeping the kind
    pub fn map_amount(&self, f: impl FnOnce(Decimal) -> Decimal) -> Self {
        match self {
            Self::Seconds(a) => Self::Seconds(f(*a)),
            Self::Months(a) => Self::Months(f(*a)),
        }
    }

    /// Sum of two durations
    ///
    /// Months-based only if both operands are months-based.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::Months(a), Self::Months(b)) => a.checked_add(*b).map(Self::Months),
            _ => self.as_seconds()?.checked_add(other.as_seconds()?).map(Self::Seconds),
        }
    }
}

impl PartialEq for ArdenDuration {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ArdenDuration {}

impl PartialOrd for ArdenDuration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArdenDuration {
    fn cmp(&self, other: &Self) -> Ordering {
        // A months amount without a seconds-equivalent lies beyond every
        // representable seconds amount, on the side of its sign.
        match (self.as_seconds(), other.as_seconds()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (None, Some(_)) => beyond_range(self.amount()),
            (Some(_), None) => beyond_range(other.amount()).reverse(),
            (None, None) => self.amount().cmp(&other.amount()),
        }
    }
}

fn beyond_range(amount: Decimal) -> Ordering {
    if amount.is_sign_negative() { Ordering::Less } else { Ordering::Greater }
}

impl Default for ArdenDuration {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for ArdenDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (amount, unit) = match self {
            Self::Months(m) => {
                let years = *m / Decimal::from(12);
                if !m.is_zero() && years.fract().is_zero() {
                    (years, "year")
                } else {
                    (*m, "month")
                }
            }
            Self::Seconds(s) => {
                let units = [
                    (SECONDS_PER_DAY, "day"),
                    (SECONDS_PER_HOUR, "hour"),
                    (SECONDS_PER_MINUTE, "minute"),
                ];
                units
                    .iter()
                    .map(|(per, name)| (*s / Decimal::from(*per), *name))
                    .find(|(n, _)| !s.is_zero() && n.fract().is_zero())
                    .unwrap_or((*s, "second"))
            }
        };
        let amount = amount.normalize();
        if amount == Decimal::ONE {
            write!(f, "{} {}", amount, unit)
        } else {
            write!(f, "{} {}s", amount, unit)
        }
    }
}
