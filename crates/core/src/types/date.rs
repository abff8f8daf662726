//! Calendar date normalization.
//!
//! Records carry dates as `DD/MM/YYYY` and the back-office inputs submit
//! `YYYY-MM-DD`. Both are parsed into [`NaiveDate`], which has no timezone
//! component, so `15/03/2024` and `2024-03-15` always compare equal.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// `chrono` format of dates stored on records (`15/03/2024`).
pub const RECORD_DATE_FORMAT: &str = "%d/%m/%Y";

/// `chrono` format of dates submitted by date inputs (`2024-03-15`).
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Errors that can occur when parsing a date string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input does not match the expected layout or is not a real date.
    #[error("invalid date {input:?}, expected {expected}")]
    Malformed {
        /// The rejected input.
        input: String,
        /// Human-readable layout that was expected.
        expected: &'static str,
    },
}

/// Errors that can occur when building a [`DateRange`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// One of the boundaries could not be parsed.
    #[error(transparent)]
    Date(#[from] DateError),
    /// The start is after the end.
    #[error("range start {start} is after range end {end}")]
    Inverted {
        /// Requested start.
        start: NaiveDate,
        /// Requested end.
        end: NaiveDate,
    },
}

/// Parse a record date (`DD/MM/YYYY`).
///
/// # Errors
///
/// Returns `DateError::Malformed` if the input is not a valid `DD/MM/YYYY` date.
pub fn parse_record_date(s: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(s.trim(), RECORD_DATE_FORMAT).map_err(|_| DateError::Malformed {
        input: s.to_owned(),
        expected: "DD/MM/YYYY",
    })
}

/// Parse a date input value (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DateError::Malformed` if the input is not a valid `YYYY-MM-DD` date.
pub fn parse_input_date(s: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(s.trim(), INPUT_DATE_FORMAT).map_err(|_| DateError::Malformed {
        input: s.to_owned(),
        expected: "YYYY-MM-DD",
    })
}

/// Format a date for a date input (`YYYY-MM-DD`).
#[must_use]
pub fn format_for_input(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// Format a date the way records store it (`DD/MM/YYYY`).
#[must_use]
pub fn format_record_date(date: NaiveDate) -> String {
    date.format(RECORD_DATE_FORMAT).to_string()
}

/// Serde adapter storing a [`NaiveDate`] as `DD/MM/YYYY`.
///
/// ```rust
/// # use chrono::NaiveDate;
/// #[derive(serde::Deserialize)]
/// struct Row {
///     #[serde(with = "magnet_kit_core::types::date::record_date")]
///     date: NaiveDate,
/// }
/// ```
pub mod record_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as `DD/MM/YYYY`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_record_date(*date))
    }

    /// Deserialize from `DD/MM/YYYY`.
    ///
    /// # Errors
    ///
    /// Fails if the string is not a valid record date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_record_date(&raw).map_err(serde::de::Error::custom)
    }

    /// Same adapter for optional dates.
    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serialize as `DD/MM/YYYY` or `null`.
        ///
        /// # Errors
        ///
        /// Propagates serializer errors.
        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        /// Deserialize from `DD/MM/YYYY` or `null`.
        ///
        /// # Errors
        ///
        /// Fails if a present string is not a valid record date.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| crate::types::date::parse_record_date(&raw))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}

/// An inclusive range of calendar days with `start <= end`.
///
/// The ordering invariant is enforced at construction, so iteration over a
/// `DateRange` always terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRangeParts")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct DateRangeParts {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<DateRangeParts> for DateRange {
    type Error = RangeError;

    fn try_from(parts: DateRangeParts) -> Result<Self, Self::Error> {
        Self::new(parts.start, parts.end)
    }
}

impl DateRange {
    /// Create a range from two dates.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Inverted` if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Parse a range from two `YYYY-MM-DD` input values.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Date` for malformed inputs and
    /// `RangeError::Inverted` if the start is after the end.
    pub fn from_inputs(start: &str, end: &str) -> Result<Self, RangeError> {
        Self::new(parse_input_date(start)?, parse_input_date(end)?)
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, counting both ends.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Overlap of two ranges, or `None` if they are disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        Self::new(start, end).ok()
    }

    /// Timestamp bounds covering every instant of the range.
    #[must_use]
    pub fn filter_range(&self) -> FilterRange {
        FilterRange::from(*self)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} – {}",
            format_record_date(self.start),
            format_record_date(self.end)
        )
    }
}

/// Timestamp interval used to attribute records to a bucket or a list filter.
///
/// Starts at `00:00:00.000` of the first day and ends at `23:59:59.999` of
/// the last day, so same-day comparisons are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterRange {
    /// First instant covered.
    pub start: NaiveDateTime,
    /// Last instant covered (`23:59:59.999`).
    pub end: NaiveDateTime,
}

impl From<DateRange> for FilterRange {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start.and_time(NaiveTime::MIN),
            end: range.end.and_time(NaiveTime::MIN) + TimeDelta::milliseconds(MILLIS_PER_DAY - 1),
        }
    }
}

impl FilterRange {
    /// Whether the instant falls inside the interval.
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Whether a calendar date (taken at local midnight) falls inside.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(date.and_time(NaiveTime::MIN))
    }

    /// First calendar day covered.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Last calendar day covered.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// The calendar days covered, for reuse as a list date filter.
    #[must_use]
    pub fn to_date_range(&self) -> DateRange {
        DateRange {
            start: self.start_date(),
            end: self.end_date().max(self.start_date()),
        }
    }
}
