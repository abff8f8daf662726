//! Screen view builders.
//!
//! Each builder takes the shared [`AppState`](crate::state::AppState) plus
//! the screen's serializable state, reads one store snapshot and returns a
//! view model ready for rendering. Builders never mutate the store.

pub mod coupons;
pub mod customers;
pub mod finance;
pub mod orders;
pub mod reviews;

use rust_decimal::Decimal;
use serde::Serialize;

use magnet_kit_core::{CurrencyCode, Price};

use crate::listing::{ListState, Page, TableConfig};

/// A rendered list screen: table layout, one page of rows, the state that
/// produced it, and screen-specific figures.
#[derive(Debug, Clone, Serialize)]
pub struct ListScreen<R, F, S> {
    pub table: TableConfig,
    pub page: Page<R>,
    pub state: ListState<F>,
    pub stats: S,
}

/// Format an amount in the configured currency.
pub(crate) fn format_money(amount: Decimal, currency: CurrencyCode) -> String {
    Price::new(amount, currency).display()
}
