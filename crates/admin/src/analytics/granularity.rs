//! Automatic bucket size selection.

use serde::{Deserialize, Serialize};

use magnet_kit_core::DateRange;

/// Size of a chart bucket. Ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    /// Granularity for a span of `days` calendar days (both ends counted).
    ///
    /// `> 366` → year, `> 60` → month, `> 30` → week, otherwise day.
    #[must_use]
    pub const fn for_days(days: i64) -> Self {
        if days > 366 {
            Self::Year
        } else if days > 60 {
            Self::Month
        } else if days > 30 {
            Self::Week
        } else {
            Self::Day
        }
    }

    /// Granularity for a date range.
    #[must_use]
    pub fn for_range(range: &DateRange) -> Self {
        Self::for_days(range.days())
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}
