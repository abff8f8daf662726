//! Bucket generation.
//!
//! Buckets are emitted in ascending order and their filter-ranges tile the
//! query range exactly. Each filter-range is re-derived from the bucket id
//! and clamped to the query range, so the first and last buckets never
//! attribute orders from outside it even when their calendar period does.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use magnet_kit_core::{
    DateRange, FilterRange, format_for_input, format_record_date, parse_input_date,
};

use super::{AnalyticsError, Granularity};
use crate::locale::Locale;

/// The calendar period a bucket stands for.
///
/// Its `Display` form is the bucket id:
/// `YYYY-MM-DD`, `W-YYYY-MM-DD`, `M-<month>-<year>` or `Y-<year>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKey {
    /// A single day.
    Day(NaiveDate),
    /// Seven days starting at the given date.
    Week(NaiveDate),
    /// A calendar month (`month` in `1..=12`).
    Month { year: i32, month: u32 },
    /// A calendar year.
    Year(i32),
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", format_for_input(*date)),
            Self::Week(start) => write!(f, "W-{}", format_for_input(*start)),
            Self::Month { year, month } => write!(f, "M-{month}-{year}"),
            Self::Year(year) => write!(f, "Y-{year}"),
        }
    }
}

impl std::str::FromStr for BucketKey {
    type Err = AnalyticsError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let invalid = || AnalyticsError::InvalidBucketId(id.to_owned());

        if let Some(rest) = id.strip_prefix("W-") {
            return parse_input_date(rest).map(Self::Week).map_err(|_| invalid());
        }
        if let Some(rest) = id.strip_prefix("M-") {
            let (month, year) = rest.split_once('-').ok_or_else(invalid)?;
            let month: u32 = month.parse().map_err(|_| invalid())?;
            let year: i32 = year.parse().map_err(|_| invalid())?;
            if !(1..=12).contains(&month) {
                return Err(invalid());
            }
            return Ok(Self::Month { year, month });
        }
        if let Some(rest) = id.strip_prefix("Y-") {
            return rest.parse().map(Self::Year).map_err(|_| invalid());
        }
        parse_input_date(id).map(Self::Day).map_err(|_| invalid())
    }
}

impl BucketKey {
    /// The full calendar period encoded by the key, before clamping.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidBucketId` if the period cannot be
    /// represented (out-of-range month or year).
    pub fn natural_period(&self) -> Result<DateRange, AnalyticsError> {
        let invalid = || AnalyticsError::InvalidBucketId(self.to_string());

        let (start, end) = match *self {
            Self::Day(date) => (date, date),
            Self::Week(start) => (start, start.checked_add_days(Days::new(6)).ok_or_else(invalid)?),
            Self::Month { year, month } => {
                let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
                (first, month_end(first))
            }
            Self::Year(year) => (
                NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?,
                NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?,
            ),
        };

        Ok(DateRange::new(start, end)?)
    }
}

/// A chart bar: one period of the query range with its aggregated revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// Period id (see [`BucketKey`]).
    pub id: String,
    /// Short axis label (`15/03`, `04/Mar`, `Mar/24`, `2024`).
    pub label: String,
    /// Longer label for the hover tooltip.
    pub tooltip_label: String,
    /// Span shown for the bar: from the bucket start to the end of its
    /// natural period. Year bars cover the whole calendar year. May extend
    /// past either end of the query range.
    pub period: DateRange,
    /// Clamped interval used to attribute orders; inclusive of the last day.
    pub filter_range: FilterRange,
    /// Sum of non-cancelled order totals in `filter_range`.
    pub total: Decimal,
    /// Number of non-cancelled orders in `filter_range`.
    pub order_count: usize,
}

/// Compute a bucket's filter-range from its id.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidBucketId` for ids that do not parse and
/// `AnalyticsError::BucketOutsideRange` when the period misses `range`.
pub fn filter_range_for(id: &str, range: &DateRange) -> Result<FilterRange, AnalyticsError> {
    let key: BucketKey = id.parse()?;
    let clipped = key
        .natural_period()?
        .intersect(range)
        .ok_or_else(|| AnalyticsError::BucketOutsideRange(id.to_owned()))?;
    Ok(clipped.filter_range())
}

/// Walk `range` and produce one empty bucket per period of `granularity`.
///
/// # Errors
///
/// Returns an `AnalyticsError` if a generated id fails to round-trip into a
/// filter-range, which indicates the id encoding and the walk disagree.
pub fn generate_buckets(
    range: &DateRange,
    granularity: Granularity,
    locale: Locale,
) -> Result<Vec<Bucket>, AnalyticsError> {
    let mut buckets = Vec::new();
    let mut current = range.start();

    while current <= range.end() {
        let (key, period_start, period_end, next) = match granularity {
            Granularity::Day => (BucketKey::Day(current), current, current, current.succ_opt()),
            Granularity::Week => (
                BucketKey::Week(current),
                current,
                current
                    .checked_add_days(Days::new(6))
                    .unwrap_or(NaiveDate::MAX),
                current.checked_add_days(Days::new(7)),
            ),
            Granularity::Month => (
                BucketKey::Month {
                    year: current.year(),
                    month: current.month(),
                },
                current,
                month_end(current),
                first_of_next_month(current),
            ),
            Granularity::Year => (
                BucketKey::Year(current.year()),
                NaiveDate::from_ymd_opt(current.year(), 1, 1).unwrap_or(current),
                NaiveDate::from_ymd_opt(current.year(), 12, 31).unwrap_or(NaiveDate::MAX),
                NaiveDate::from_ymd_opt(current.year() + 1, 1, 1),
            ),
        };

        let id = key.to_string();
        let filter_range = filter_range_for(&id, range)?;
        let (label, tooltip_label) = labels(key, current, &filter_range, locale);

        buckets.push(Bucket {
            id,
            label,
            tooltip_label,
            period: DateRange::new(period_start, period_end)?,
            filter_range,
            total: Decimal::ZERO,
            order_count: 0,
        });

        match next {
            Some(next) => current = next,
            None => break,
        }
    }

    tracing::debug!(
        granularity = %granularity,
        buckets = buckets.len(),
        start = %range.start(),
        end = %range.end(),
        "Generated revenue buckets"
    );

    Ok(buckets)
}

fn labels(
    key: BucketKey,
    current: NaiveDate,
    filter_range: &FilterRange,
    locale: Locale,
) -> (String, String) {
    match key {
        BucketKey::Day(date) => (
            date.format("%d/%m").to_string(),
            format_record_date(date),
        ),
        BucketKey::Week(start) => (
            format!("{:02}/{}", start.day(), locale.month_abbr(start.month())),
            format!(
                "{} {} {}",
                format_record_date(filter_range.start_date()),
                locale.range_joiner(),
                format_record_date(filter_range.end_date())
            ),
        ),
        BucketKey::Month { year, month } => (
            format!("{}/{:02}", locale.month_abbr(month), year.rem_euclid(100)),
            format!("{} {year}", locale.month_name(current.month())),
        ),
        BucketKey::Year(year) => (year.to_string(), year.to_string()),
    }
}

fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

fn month_end(date: NaiveDate) -> NaiveDate {
    first_of_next_month(date)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
