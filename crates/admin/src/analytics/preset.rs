//! Quick range selections for the finance screen.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use magnet_kit_core::DateRange;

/// A named range relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePreset {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    /// From the first of the current month to today.
    ThisMonth,
    /// From January 1st of the current year to today.
    ThisYear,
}

impl RangePreset {
    /// Resolve the preset to concrete dates. Both ends are inclusive and the
    /// range always ends at `today`.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> DateRange {
        let start = match self {
            Self::Last7Days => back(today, 6),
            Self::Last30Days => back(today, 29),
            Self::Last90Days => back(today, 89),
            Self::ThisMonth => today.with_day(1).unwrap_or(today),
            Self::ThisYear => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        };
        DateRange::new(start, today).unwrap_or_else(|_| DateRange::single_day(today))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::Last90Days => "90d",
            Self::ThisMonth => "month",
            Self::ThisYear => "year",
        }
    }
}

fn back(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

impl std::fmt::Display for RangePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RangePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7d" => Ok(Self::Last7Days),
            "30d" => Ok(Self::Last30Days),
            "90d" => Ok(Self::Last90Days),
            "month" => Ok(Self::ThisMonth),
            "year" => Ok(Self::ThisYear),
            _ => Err(format!("invalid range preset: {s}")),
        }
    }
}

/// What the user picked in the range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeSelection {
    Preset(RangePreset),
    Custom(DateRange),
}

impl Default for RangeSelection {
    fn default() -> Self {
        Self::Preset(RangePreset::default())
    }
}

impl RangeSelection {
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> DateRange {
        match self {
            Self::Preset(preset) => preset.resolve(today),
            Self::Custom(range) => range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn test_presets_end_today_and_count_inclusively() {
        let today = ymd(2024, 3, 15);
        assert_eq!(RangePreset::Last7Days.resolve(today).days(), 7);
        assert_eq!(RangePreset::Last30Days.resolve(today).days(), 30);
        assert_eq!(RangePreset::Last90Days.resolve(today).days(), 90);
        assert_eq!(RangePreset::ThisMonth.resolve(today).start(), ymd(2024, 3, 1));
        assert_eq!(RangePreset::ThisYear.resolve(today).start(), ymd(2024, 1, 1));
        assert_eq!(RangePreset::ThisYear.resolve(today).end(), today);
    }

    #[test]
    fn test_this_month_on_the_first() {
        let today = ymd(2024, 5, 1);
        assert_eq!(RangePreset::ThisMonth.resolve(today).days(), 1);
    }

    #[test]
    fn test_default_selection_is_last_30_days() {
        let today = ymd(2024, 3, 15);
        let range = RangeSelection::default().resolve(today);
        assert_eq!(range.start(), ymd(2024, 2, 15));
    }

    #[test]
    fn test_preset_from_str() {
        for preset in [
            RangePreset::Last7Days,
            RangePreset::Last30Days,
            RangePreset::Last90Days,
            RangePreset::ThisMonth,
            RangePreset::ThisYear,
        ] {
            assert_eq!(preset.as_str().parse(), Ok(preset));
        }
        assert!("14d".parse::<RangePreset>().is_err());
    }
}
