//! KPI figures shown above the revenue chart.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use magnet_kit_core::{DateRange, OrderStatus};

use crate::models::Order;

/// Headline numbers for the finance screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinanceSummary {
    /// Sum of non-cancelled order totals.
    pub gross_revenue: Decimal,
    /// Number of non-cancelled orders.
    pub order_count: usize,
    /// `gross_revenue / order_count`, zero when there are no orders.
    pub average_ticket: Decimal,
    pub cancelled_count: usize,
    pub cancelled_value: Decimal,
    /// Orders per status, cancelled included.
    pub by_status: BTreeMap<OrderStatus, usize>,
}

/// Summarize the orders dated inside `range`.
///
/// `orders` should already exclude soft-deleted records.
pub fn summarize<'a>(
    range: &DateRange,
    orders: impl IntoIterator<Item = &'a Order>,
) -> FinanceSummary {
    let mut gross_revenue = Decimal::ZERO;
    let mut order_count = 0;
    let mut cancelled_count = 0;
    let mut cancelled_value = Decimal::ZERO;
    let mut by_status: BTreeMap<OrderStatus, usize> =
        OrderStatus::ALL.into_iter().map(|s| (s, 0)).collect();

    for order in orders.into_iter().filter(|o| range.contains(o.date)) {
        *by_status.entry(order.status).or_default() += 1;
        if order.counts_as_revenue() {
            gross_revenue += order.total;
            order_count += 1;
        } else {
            cancelled_count += 1;
            cancelled_value += order.total;
        }
    }

    let average_ticket = gross_revenue
        .checked_div(Decimal::from(order_count))
        .unwrap_or(Decimal::ZERO);

    FinanceSummary {
        gross_revenue,
        order_count,
        average_ticket,
        cancelled_count,
        cancelled_value,
        by_status,
    }
}
