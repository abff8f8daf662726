//! Revenue aggregation into buckets.

use rust_decimal::Decimal;
use serde::Serialize;

use magnet_kit_core::DateRange;

use super::{AnalyticsError, Bucket, Granularity, generate_buckets};
use crate::locale::Locale;
use crate::models::Order;

/// Attach revenue totals and order counts to `buckets`.
///
/// Buckets must be in ascending, non-overlapping order, as produced by
/// [`generate_buckets`]. Totals are reset first so calling this twice with the
/// same input gives the same result. Cancelled orders are skipped; orders
/// outside every bucket are ignored.
pub fn aggregate<'a>(buckets: &mut [Bucket], orders: impl IntoIterator<Item = &'a Order>) {
    for bucket in buckets.iter_mut() {
        bucket.total = Decimal::ZERO;
        bucket.order_count = 0;
    }

    for order in orders {
        if !order.counts_as_revenue() {
            continue;
        }
        let idx = buckets.partition_point(|b| b.filter_range.end_date() < order.date);
        if let Some(bucket) = buckets.get_mut(idx) {
            if bucket.filter_range.contains_date(order.date) {
                bucket.total += order.total;
                bucket.order_count += 1;
            }
        }
    }
}

/// Chart data for the finance screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueChart {
    pub range: DateRange,
    pub granularity: Granularity,
    pub buckets: Vec<Bucket>,
    /// Largest bucket total, used to scale the bars.
    pub peak: Decimal,
    /// Sum of all bucket totals.
    pub total: Decimal,
    pub order_count: usize,
}

impl RevenueChart {
    /// Whether any order contributed to the chart.
    ///
    /// The presentation layer shows an explicit empty state when this is false.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.order_count > 0
    }
}

/// Build the complete revenue chart for `range`.
///
/// `orders` should already exclude soft-deleted records.
///
/// # Errors
///
/// Propagates bucket generation failures.
pub fn build_revenue_chart<'a>(
    range: &DateRange,
    orders: impl IntoIterator<Item = &'a Order>,
    locale: Locale,
) -> Result<RevenueChart, AnalyticsError> {
    let granularity = Granularity::for_range(range);
    let mut buckets = generate_buckets(range, granularity, locale)?;
    aggregate(&mut buckets, orders);

    let peak = buckets
        .iter()
        .map(|b| b.total)
        .max()
        .unwrap_or(Decimal::ZERO);
    let total = buckets.iter().map(|b| b.total).sum();
    let order_count = buckets.iter().map(|b| b.order_count).sum();

    Ok(RevenueChart {
        range: *range,
        granularity,
        buckets,
        peak,
        total,
        order_count,
    })
}
