//! Finance screen: revenue chart and KPI cards.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::instrument;

use magnet_kit_core::{CurrencyCode, DateRange};

use super::format_money;
use super::orders::OrderTab;
use crate::analytics::{
    FinanceSummary, RangeSelection, RevenueChart, build_revenue_chart, filter_range_for,
    live_orders, summarize,
};
use crate::error::AppError;
use crate::listing::{ListAction, ListState};
use crate::state::AppState;

/// Everything the finance screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinanceDashboard {
    pub selection: RangeSelection,
    pub range: DateRange,
    pub chart: RevenueChart,
    pub summary: FinanceSummary,
    pub currency: CurrencyCode,
}

impl FinanceDashboard {
    /// Format an amount in the dashboard currency.
    #[must_use]
    pub fn money(&self, amount: rust_decimal::Decimal) -> String {
        format_money(amount, self.currency)
    }
}

/// Build the finance dashboard for `selection`, resolved against `today`.
///
/// Chart and summary come from the same snapshot of live orders.
///
/// # Errors
///
/// Returns `AppError::Analytics` if bucket generation fails.
#[instrument(skip(state))]
pub fn dashboard(
    state: &AppState,
    selection: RangeSelection,
    today: NaiveDate,
) -> Result<FinanceDashboard, AppError> {
    let range = selection.resolve(today);
    let orders = state.orders().snapshot();

    let chart = build_revenue_chart(&range, live_orders(&orders), state.locale())?;
    let summary = summarize(&range, live_orders(&orders));

    tracing::info!(
        start = %range.start(),
        end = %range.end(),
        granularity = %chart.granularity,
        buckets = chart.buckets.len(),
        orders = chart.order_count,
        "Finance dashboard built"
    );

    Ok(FinanceDashboard {
        selection,
        range,
        chart,
        summary,
        currency: state.currency(),
    })
}

/// Orders-list state showing the orders behind one chart bar.
///
/// The bar's filter-range becomes the list's date range; every other filter
/// starts from its default.
///
/// # Errors
///
/// Returns `AppError::Analytics` if `bucket_id` is malformed or does not
/// overlap `range`.
pub fn drill_down(
    state: &AppState,
    range: &DateRange,
    bucket_id: &str,
) -> Result<ListState<OrderTab>, AppError> {
    let filter_range = filter_range_for(bucket_id, range)?;
    tracing::debug!(bucket_id, "Drilling down into bucket");
    Ok(ListState::with_page_size(state.config().page_size)
        .reduce(ListAction::DateRange(Some(filter_range.to_date_range()))))
}
