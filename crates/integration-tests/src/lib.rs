//! Integration tests for the Magnet Kit back-office.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p magnet-kit-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `finance_dashboard` - Revenue chart, KPIs and drill-down over the fixture seed
//! - `order_listing` - Orders tabs, search, date filter, pagination and mutations
//! - `list_screens` - Customers, reviews and coupons screens
//! - `seed_loading` - JSON/YAML seed parsing and validation
//!
//! Fixtures live in the workspace `fixtures/` directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::NaiveDate;
use magnet_kit_admin::{AdminConfig, AppState, MemoryStore, Seed, SeedError};

/// Path of a file in the workspace `fixtures/` directory.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name)
}

/// Parse a fixture seed.
///
/// # Errors
///
/// Returns `SeedError` if the fixture is missing or malformed.
pub fn load_seed(name: &str) -> Result<Seed, SeedError> {
    Seed::load(&fixture_path(name))
}

/// Application state over `fixtures/seed.json` with the given config.
///
/// # Errors
///
/// Returns `SeedError` if the fixture cannot be loaded or is invalid.
pub fn fixture_state_with(config: AdminConfig) -> Result<AppState, SeedError> {
    let store = MemoryStore::from_seed(load_seed("seed.json")?)?;
    Ok(AppState::new(config, store))
}

/// Application state over `fixtures/seed.json` with default config.
///
/// # Errors
///
/// Returns `SeedError` if the fixture cannot be loaded or is invalid.
pub fn fixture_state() -> Result<AppState, SeedError> {
    fixture_state_with(AdminConfig::default())
}

/// The "today" the fixture data was written against.
#[must_use]
pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 10).unwrap_or(NaiveDate::MIN)
}
