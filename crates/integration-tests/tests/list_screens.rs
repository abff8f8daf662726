//! Integration tests for the customers, reviews and coupons screens.
//!
//! Run with: cargo test -p magnet-kit-integration-tests --test list_screens

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use magnet_kit_admin::listing::{ListAction, ListState};
use magnet_kit_admin::models::{Coupon, Discount};
use magnet_kit_admin::screens::coupons::{self, CouponFilter};
use magnet_kit_admin::screens::customers::{self, CustomerSegment};
use magnet_kit_admin::screens::reviews::{self, ReviewFacet};
use magnet_kit_admin::{AdminConfig, AppState, Locale, RepositoryError};
use magnet_kit_core::{CouponId, CustomerId, DateRange, ReviewId, ReviewStatus};
use magnet_kit_integration_tests::{fixture_state, fixture_state_with, fixture_today};
use rust_decimal::Decimal;

fn state() -> AppState {
    fixture_state().expect("fixture seed loads")
}

// =============================================================================
// Customers
// =============================================================================

#[test]
fn test_customer_totals_exclude_cancelled_and_deleted_orders() {
    let screen = customers::list(&state(), &ListState::default());
    let rows: Vec<_> = screen
        .page
        .items
        .iter()
        .map(|c| (c.id.as_i32(), c.order_count, c.total_spent))
        .collect();

    assert_eq!(
        rows,
        [
            (1, 3, Decimal::new(38_970, 2)),
            (2, 3, Decimal::new(39_960, 2)),
            (3, 2, Decimal::new(39_970, 2)),
            (4, 1, Decimal::new(14_990, 2)),
            (5, 2, Decimal::new(26_980, 2)),
            (7, 0, Decimal::ZERO),
        ]
    );
    assert_eq!(screen.page.items[0].total_spent_display, "R$ 389,70");
}

#[test]
fn test_customer_segments() {
    let state = state();

    let screen = customers::list(&state, &ListState::default());
    assert_eq!(screen.stats.all, 6);
    assert_eq!(screen.stats.buyers, 5);
    assert_eq!(screen.stats.no_orders, 1);

    let no_orders = ListState::default().reduce(ListAction::Facet(CustomerSegment::NoOrders));
    let screen = customers::list(&state, &no_orders);
    assert_eq!(screen.page.items.len(), 1);
    assert_eq!(screen.page.items[0].id, CustomerId::new(7));
}

#[test]
fn test_customer_search_and_signup_range() {
    let state = state();

    let by_city = ListState::default().reduce(ListAction::Search("recife".into()));
    let screen = customers::list(&state, &by_city);
    assert_eq!(screen.page.items[0].name, "Eduarda Alves");

    let by_phone = ListState::default().reduce(ListAction::Search("+55 21".into()));
    let screen = customers::list(&state, &by_phone);
    assert_eq!(screen.page.items[0].id, CustomerId::new(2));

    let march = DateRange::from_inputs("2024-03-01", "2024-03-31").unwrap();
    let signed_up = ListState::default().reduce(ListAction::DateRange(Some(march)));
    let ids: Vec<_> = customers::list(&state, &signed_up)
        .page
        .items
        .iter()
        .map(|c| c.id.as_i32())
        .collect();
    assert_eq!(ids, [5, 7]);
}

// =============================================================================
// Reviews
// =============================================================================

#[test]
fn test_review_stats() {
    let screen = reviews::list(&state(), &ListState::default());
    let stats = &screen.stats;

    assert_eq!(stats.total, 6);
    assert_eq!(stats.get(ReviewStatus::Pending), 2);
    assert_eq!(stats.get(ReviewStatus::Approved), 3);
    assert_eq!(stats.get(ReviewStatus::Rejected), 1);
    assert_eq!(stats.average_rating, Some(Decimal::new(47, 1)));
}

#[test]
fn test_review_facets_combine() {
    let state = state();

    let pending = ListState::default().reduce(ListAction::Facet(ReviewFacet {
        status: Some(ReviewStatus::Pending),
        rating: None,
    }));
    let ids: Vec<_> = reviews::list(&state, &pending)
        .page
        .items
        .iter()
        .map(|r| r.id.as_i32())
        .collect();
    assert_eq!(ids, [3, 5]);

    let five_stars = ListState::default().reduce(ListAction::Facet(ReviewFacet {
        status: Some(ReviewStatus::Approved),
        rating: Some(5),
    }));
    let screen = reviews::list(&state, &five_stars);
    assert_eq!(screen.page.total_count, 2);
    assert_eq!(screen.page.items[0].stars, "★★★★★");
}

#[test]
fn test_moderation_updates_stats() {
    let state = state();
    state.reviews().approve(ReviewId::new(5)).unwrap();
    state.reviews().reject(ReviewId::new(3)).unwrap();

    let stats = reviews::list(&state, &ListState::default()).stats;
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.approved, 4);
    assert_eq!(stats.rejected, 2);
    // (5 + 4 + 5 + 2) / 4
    assert_eq!(stats.average_rating, Some(Decimal::new(40, 1)));
}

// =============================================================================
// Coupons
// =============================================================================

#[test]
fn test_coupons_list_active_first() {
    let screen = coupons::list(&state(), &ListState::default(), fixture_today());
    let codes: Vec<_> = screen.page.items.iter().map(|c| c.code.as_str()).collect();

    assert_eq!(
        codes,
        ["BEMVINDO10", "MAES20", "VOLTA25", "FRETEGRATIS", "BLACK30"]
    );
    assert_eq!(screen.stats.active, 3);
    assert_eq!(screen.stats.inactive, 2);
}

#[test]
fn test_coupon_rows_flag_usage_and_expiry() {
    let screen = coupons::list(&state(), &ListState::default(), fixture_today());
    let row = |code: &str| {
        screen
            .page
            .items
            .iter()
            .find(|c| c.code == code)
            .cloned()
            .unwrap()
    };

    let maes = row("MAES20");
    assert_eq!(maes.usage, "100/100");
    assert!(maes.exhausted);
    assert!(!maes.expired);

    let frete = row("FRETEGRATIS");
    assert_eq!(frete.discount, "R$ 15,00");
    assert_eq!(frete.expires_on.as_deref(), Some("31/12/2023"));
    assert!(frete.expired);

    let welcome = row("BEMVINDO10");
    assert_eq!(welcome.discount, "10%");
    assert_eq!(welcome.usage, "42");
}

#[test]
fn test_coupon_filter_ignores_date_range() {
    let range = DateRange::from_inputs("2020-01-01", "2020-01-02").unwrap();
    let list = ListState::default()
        .reduce(ListAction::Facet(CouponFilter::Inactive))
        .reduce(ListAction::DateRange(Some(range)));

    let screen = coupons::list(&state(), &list, fixture_today());
    assert_eq!(screen.page.total_count, 2);
}

#[test]
fn test_coupon_create_and_toggle() {
    let state = state();
    let created = state
        .coupons()
        .create(Coupon {
            id: CouponId::new(6),
            code: " natal15 ".into(),
            description: "Natal".into(),
            discount: Discount::Percent(Decimal::new(15, 0)),
            active: false,
            usage_count: 0,
            usage_limit: None,
            expires_on: None,
        })
        .unwrap();
    assert_eq!(created.code, "NATAL15");

    let duplicate = state.coupons().create(Coupon {
        id: CouponId::new(7),
        ..created.clone()
    });
    assert!(matches!(duplicate, Err(RepositoryError::Conflict(_))));

    state.coupons().set_active(created.id, true).unwrap();
    let active = ListState::default().reduce(ListAction::Facet(CouponFilter::Active));
    let screen = coupons::list(&state, &active, fixture_today());
    assert_eq!(screen.page.total_count, 4);
    assert!(state.coupons().find_by_code("natal15").is_some());
}

#[test]
fn test_english_locale_labels() {
    let config = AdminConfig {
        locale: Locale::En,
        ..AdminConfig::default()
    };
    let state = fixture_state_with(config).unwrap();

    let screen = reviews::list(&state, &ListState::default());
    assert_eq!(screen.page.items[0].status_label, "Approved");
}
