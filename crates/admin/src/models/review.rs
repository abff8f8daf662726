//! Product review domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use magnet_kit_core::types::date::record_date;
use magnet_kit_core::{ReviewId, ReviewStatus};

/// A customer review awaiting or past moderation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique review ID.
    pub id: ReviewId,
    /// Reviewer display name.
    pub customer_name: String,
    /// Reviewed kit.
    pub product: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Review text.
    #[serde(default)]
    pub comment: String,
    /// Moderation status.
    #[serde(default)]
    pub status: ReviewStatus,
    /// Day the review was submitted.
    #[serde(with = "record_date")]
    pub date: NaiveDate,
}

impl Review {
    /// Lowest accepted rating.
    pub const MIN_RATING: u8 = 1;
    /// Highest accepted rating.
    pub const MAX_RATING: u8 = 5;

    /// Whether the rating is within `1..=5`.
    #[must_use]
    pub const fn has_valid_rating(&self) -> bool {
        self.rating >= Self::MIN_RATING && self.rating <= Self::MAX_RATING
    }
}
