//! Finance analytics.
//!
//! Turns an order snapshot and a date range into chart-ready revenue buckets
//! and KPI figures:
//!
//! 1. [`Granularity::for_range`] picks day/week/month/year from the span.
//! 2. [`generate_buckets`] walks the range into contiguous buckets.
//! 3. [`aggregate`] attaches revenue and order counts.
//!
//! Callers remove soft-deleted orders with [`live_orders`] before step 3.

pub mod aggregate;
pub mod buckets;
pub mod granularity;
pub mod preset;
pub mod summary;

use magnet_kit_core::RangeError;
use thiserror::Error;

use crate::models::Order;

pub use aggregate::{RevenueChart, aggregate, build_revenue_chart};
pub use buckets::{Bucket, BucketKey, filter_range_for, generate_buckets};
pub use granularity::Granularity;
pub use preset::{RangePreset, RangeSelection};
pub use summary::{FinanceSummary, summarize};

/// Errors that can occur while building analytics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// The requested range is malformed or inverted.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// A bucket id does not encode a known period.
    #[error("invalid bucket id: {0}")]
    InvalidBucketId(String),

    /// A bucket's period does not overlap the requested range.
    #[error("bucket {0} does not overlap the requested range")]
    BucketOutsideRange(String),
}

/// Orders that are not in the trash.
pub fn live_orders(orders: &[Order]) -> impl Iterator<Item = &Order> {
    orders.iter().filter(|o| o.is_live())
}
