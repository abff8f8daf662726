//! Discount coupon domain model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use magnet_kit_core::types::date::record_date;
use magnet_kit_core::{CouponId, CurrencyCode, Price};

/// How a coupon discounts the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage off the subtotal.
    Percent(Decimal),
    /// Fixed amount off the subtotal.
    Fixed(Decimal),
}

impl Discount {
    /// Display string such as `15%` or `R$ 20,00`.
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        match self {
            Self::Percent(pct) => format!("{}%", pct.normalize()),
            Self::Fixed(amount) => Price::new(*amount, currency).display(),
        }
    }
}

/// A discount coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique coupon ID.
    pub id: CouponId,
    /// Code typed at checkout (stored upper-case).
    pub code: String,
    /// Internal description.
    #[serde(default)]
    pub description: String,
    /// Discount applied.
    pub discount: Discount,
    /// Whether checkout accepts the code.
    pub active: bool,
    /// Times the code has been redeemed.
    #[serde(default)]
    pub usage_count: u32,
    /// Maximum redemptions, if capped.
    #[serde(default)]
    pub usage_limit: Option<u32>,
    /// Last valid day, if the coupon expires.
    #[serde(default, with = "record_date::option")]
    pub expires_on: Option<NaiveDate>,
}

impl Coupon {
    /// Whether the redemption cap has been reached.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.usage_limit
            .is_some_and(|limit| self.usage_count >= limit)
    }

    /// Whether the coupon's last valid day is before `today`.
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on.is_some_and(|last_day| last_day < today)
    }
}
