//! Customer (storefront user) domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use magnet_kit_core::CustomerId;
use magnet_kit_core::types::date::record_date;

/// A registered storefront customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Contact phone (WhatsApp), if provided.
    #[serde(default)]
    pub phone: Option<String>,
    /// City from the default shipping address.
    #[serde(default)]
    pub city: Option<String>,
    /// Sign-up day.
    #[serde(with = "record_date")]
    pub created_at: NaiveDate,
    /// Soft-delete flag.
    #[serde(default)]
    pub deleted: bool,
}
