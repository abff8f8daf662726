//! Integration tests for the finance screen over the fixture seed.
//!
//! Run with: cargo test -p magnet-kit-integration-tests --test finance_dashboard

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::NaiveDate;
use magnet_kit_admin::analytics::{AnalyticsError, Granularity, RangePreset, RangeSelection};
use magnet_kit_admin::{AppError, AppState};
use magnet_kit_admin::screens::{finance, orders};
use magnet_kit_core::{DateRange, OrderId, OrderStatus};
use magnet_kit_integration_tests::{fixture_state, fixture_today};
use rust_decimal::Decimal;

fn state() -> AppState {
    fixture_state().expect("fixture seed loads")
}

fn custom(start: &str, end: &str) -> RangeSelection {
    RangeSelection::Custom(DateRange::from_inputs(start, end).expect("valid range"))
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[test]
fn test_year_to_date_uses_monthly_buckets() {
    let dashboard = finance::dashboard(
        &state(),
        custom("2024-01-01", "2024-04-10"),
        fixture_today(),
    )
    .unwrap();

    let chart = &dashboard.chart;
    assert_eq!(chart.granularity, Granularity::Month);

    let ids: Vec<_> = chart.buckets.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["M-1-2024", "M-2-2024", "M-3-2024", "M-4-2024"]);

    let labels: Vec<_> = chart.buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Jan/24", "Fev/24", "Mar/24", "Abr/24"]);

    let totals: Vec<_> = chart.buckets.iter().map(|b| b.total).collect();
    assert_eq!(
        totals,
        [money(23_980), money(45_960), money(54_950), money(29_970)]
    );
    let counts: Vec<_> = chart.buckets.iter().map(|b| b.order_count).collect();
    assert_eq!(counts, [2, 3, 4, 3]);

    assert_eq!(chart.peak, money(54_950));
    assert_eq!(chart.total, money(154_860));
    assert!(chart.has_data());
}

#[test]
fn test_last_month_bucket_is_clipped_to_range() {
    let dashboard = finance::dashboard(
        &state(),
        custom("2024-01-01", "2024-04-10"),
        fixture_today(),
    )
    .unwrap();

    let april = &dashboard.chart.buckets[3];
    assert_eq!(april.filter_range.end_date(), fixture_today());
    assert_eq!(april.period.end(), NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
}

#[test]
fn test_summary_matches_chart() {
    let dashboard = finance::dashboard(
        &state(),
        custom("2024-01-01", "2024-04-10"),
        fixture_today(),
    )
    .unwrap();

    let summary = &dashboard.summary;
    assert_eq!(summary.gross_revenue, dashboard.chart.total);
    assert_eq!(summary.order_count, dashboard.chart.order_count);
    assert_eq!(summary.order_count, 12);
    assert_eq!(summary.average_ticket, money(12_905));
    assert_eq!(summary.cancelled_count, 2);
    assert_eq!(summary.cancelled_value, money(20_980));
    assert_eq!(dashboard.money(summary.gross_revenue), "R$ 1.548,60");
}

#[test]
fn test_march_uses_weekly_buckets_from_range_start() {
    let dashboard = finance::dashboard(
        &state(),
        custom("2024-03-01", "2024-03-31"),
        fixture_today(),
    )
    .unwrap();

    let chart = &dashboard.chart;
    assert_eq!(chart.granularity, Granularity::Week);
    assert_eq!(chart.buckets.len(), 5);
    assert_eq!(chart.buckets[0].id, "W-2024-03-01");
    assert_eq!(chart.buckets[4].id, "W-2024-03-29");

    let totals: Vec<_> = chart.buckets.iter().map(|b| b.total).collect();
    assert_eq!(
        totals,
        [
            money(5_990),
            money(17_990),
            money(8_990),
            Decimal::ZERO,
            money(21_980)
        ]
    );
}

#[test]
fn test_presets_resolve_against_today() {
    let state = state();

    let week = finance::dashboard(
        &state,
        RangeSelection::Preset(RangePreset::Last7Days),
        fixture_today(),
    )
    .unwrap();
    assert_eq!(week.chart.granularity, Granularity::Day);
    assert_eq!(week.chart.buckets.len(), 7);
    assert_eq!(week.chart.buckets[0].label, "04/04");
    // 1014 on 05/04 and 1015 on 10/04
    assert_eq!(week.summary.order_count, 2);

    let default = finance::dashboard(&state, RangeSelection::default(), fixture_today()).unwrap();
    assert_eq!(default.chart.buckets.len(), 30);

    let year = finance::dashboard(
        &state,
        RangeSelection::Preset(RangePreset::ThisYear),
        fixture_today(),
    )
    .unwrap();
    assert_eq!(year.chart.granularity, Granularity::Month);
    assert_eq!(year.summary.gross_revenue, money(154_860));
}

#[test]
fn test_range_without_orders_shows_empty_state() {
    let dashboard = finance::dashboard(
        &state(),
        custom("2023-06-01", "2023-06-30"),
        fixture_today(),
    )
    .unwrap();

    assert!(!dashboard.chart.has_data());
    assert_eq!(dashboard.chart.peak, Decimal::ZERO);
    assert_eq!(dashboard.summary.average_ticket, Decimal::ZERO);
}

#[test]
fn test_drill_down_lists_orders_behind_bar() {
    let state = state();
    let range = DateRange::from_inputs("2024-03-01", "2024-03-31").unwrap();

    let list_state = finance::drill_down(&state, &range, "W-2024-03-15").unwrap();
    assert_eq!(list_state.page, 1);

    let screen = orders::list(&state, &list_state);
    let ids: Vec<_> = screen.page.items.iter().map(|o| o.id).collect();
    // The bar excludes the cancelled 1010; the list shows it.
    assert_eq!(ids, [OrderId::new(1009), OrderId::new(1010)]);
    assert_eq!(screen.page.items[1].status, OrderStatus::Cancelled);
}

#[test]
fn test_drill_down_on_clipped_month_stops_at_range_end() {
    let state = state();
    let range = DateRange::from_inputs("2024-01-01", "2024-04-10").unwrap();

    let list_state = finance::drill_down(&state, &range, "M-4-2024").unwrap();
    let screen = orders::list(&state, &list_state);
    let ids: Vec<_> = screen.page.items.iter().map(|o| o.id.as_i32()).collect();
    // 1016 is dated 11/04, after the range end.
    assert_eq!(ids, [1013, 1014, 1015]);
}

#[test]
fn test_drill_down_rejects_unknown_bucket() {
    let state = state();
    let range = DateRange::from_inputs("2024-03-01", "2024-03-31").unwrap();

    let err = finance::drill_down(&state, &range, "Q-2024-1").unwrap_err();
    assert!(matches!(
        err,
        AppError::Analytics(AnalyticsError::InvalidBucketId(_))
    ));

    let err = finance::drill_down(&state, &range, "M-6-2024").unwrap_err();
    assert!(matches!(
        err,
        AppError::Analytics(AnalyticsError::BucketOutsideRange(_))
    ));
}
