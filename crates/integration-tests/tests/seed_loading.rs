//! Integration tests for seed files.
//!
//! Run with: cargo test -p magnet-kit-integration-tests --test seed_loading

#![allow(clippy::unwrap_used)]

use magnet_kit_admin::{MemoryStore, Seed, SeedError, SeedFormat};
use magnet_kit_integration_tests::{fixture_path, load_seed};

#[test]
fn test_json_and_yaml_fixtures_agree() {
    let json = load_seed("seed.json").unwrap();
    let yaml = load_seed("seed.yaml").unwrap();

    assert_eq!(
        serde_json::to_value(&json).unwrap(),
        serde_json::to_value(&yaml).unwrap()
    );
    assert_eq!(json.orders.len(), 16);
    assert_eq!(json.customers.len(), 7);
    assert_eq!(json.reviews.len(), 6);
    assert_eq!(json.coupons.len(), 5);
}

#[test]
fn test_fixture_seed_is_valid() {
    let seed = load_seed("seed.json").unwrap();
    assert!(seed.validate().is_empty());
    assert!(MemoryStore::from_seed(seed).is_ok());
}

#[tokio::test]
async fn test_seed_parses_from_async_read() {
    let path = fixture_path("seed.yaml");
    let content = tokio::fs::read_to_string(&path).await.unwrap();
    let format = SeedFormat::from_path(&path).unwrap();

    let seed = Seed::parse(&content, format).unwrap();
    assert_eq!(seed.orders.len(), 16);
}

#[test]
fn test_invalid_seed_reports_every_problem() {
    let seed = load_seed("invalid_seed.json").unwrap();
    let errors = seed.validate();

    assert_eq!(
        errors,
        [
            "Duplicate order id: 2001",
            "Order 2002 references unknown customer 99",
            "Rating 7 out of range on review 1",
            "Duplicate coupon code: promo",
        ]
    );

    let err = MemoryStore::from_seed(seed).unwrap_err();
    assert!(matches!(err, SeedError::Invalid(ref list) if list.len() == 4));
    assert!(err.to_string().starts_with("4 seed validation error(s)"));
}

#[test]
fn test_missing_and_unknown_files() {
    assert!(matches!(
        load_seed("does_not_exist.json"),
        Err(SeedError::Io { .. })
    ));
    assert!(matches!(
        Seed::load(&fixture_path("seed.toml")),
        Err(SeedError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_malformed_date_is_a_parse_error() {
    let content = r#"{"orders":[{"id":1,"customer_name":"x","status":"pending","total":"1.00","date":"2024-03-01"}]}"#;
    assert!(matches!(
        Seed::parse(content, SeedFormat::Json),
        Err(SeedError::Json(_))
    ));
}
