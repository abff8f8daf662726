//! Order domain model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use magnet_kit_core::types::date::record_date;
use magnet_kit_core::{CustomerId, OrderId, OrderStatus};

/// A customer order for a magnet kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Name shown on the order (free text from checkout).
    pub customer_name: String,
    /// Customer account that placed the order, if any.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// Current fulfillment status.
    pub status: OrderStatus,
    /// Order total in the store currency.
    pub total: Decimal,
    /// Day the order was placed.
    #[serde(with = "record_date")]
    pub date: NaiveDate,
    /// Soft-delete flag; deleted orders only show up in the trash view.
    #[serde(default)]
    pub deleted: bool,
}

impl Order {
    /// Whether the order is visible outside the trash view.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        !self.deleted
    }

    /// Whether the order contributes to revenue figures.
    #[must_use]
    pub const fn counts_as_revenue(&self) -> bool {
        self.status.is_revenue()
    }
}
