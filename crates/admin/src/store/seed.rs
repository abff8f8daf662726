//! Seed files for the in-memory store.
//!
//! A seed lists every collection; missing collections default to empty.
//! Dates use `DD/MM/YYYY`, amounts are decimal strings.
//!
//! ## YAML Format
//!
//! ```yaml
//! orders:
//!   - id: 1001
//!     customer_name: Ana Souza
//!     status: delivered
//!     total: "149.90"
//!     date: 15/01/2024
//! coupons:
//!   - id: 1
//!     code: IMA10
//!     discount: { kind: percent, value: "10" }
//!     active: true
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Coupon, Customer, Order, Review};

/// Errors that can occur while loading a seed.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not a known seed format.
    #[error("unsupported seed format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    /// JSON parsing failed.
    #[error("invalid JSON seed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("invalid YAML seed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The seed parsed but contains inconsistent records.
    #[error("{} seed validation error(s): {}", .0.len(), .0.join("; "))]
    Invalid(Vec<String>),
}

/// Serialization format of a seed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Yaml,
}

impl SeedFormat {
    /// Pick the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::UnsupportedFormat` for unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(SeedError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Contents of a seed file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub reviews: Vec<Review>,
    pub coupons: Vec<Coupon>,
}

impl Seed {
    /// Parse seed content in the given format.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Json` or `SeedError::Yaml` on parse failures.
    pub fn parse(content: &str, format: SeedFormat) -> Result<Self, SeedError> {
        match format {
            SeedFormat::Json => Ok(serde_json::from_str(content)?),
            SeedFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }

    /// Read and parse a seed file synchronously.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Io` if the file cannot be read, or a parse error.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let format = SeedFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, format)
    }

    /// Check cross-record consistency.
    ///
    /// Returns every problem found; an empty list means the seed is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut order_ids = HashSet::new();
        for order in &self.orders {
            if !order_ids.insert(order.id) {
                errors.push(format!("Duplicate order id: {}", order.id));
            }
            if order.total.is_sign_negative() {
                errors.push(format!("Negative total on order {}", order.id));
            }
        }

        let mut customer_ids = HashSet::new();
        for customer in &self.customers {
            if !customer_ids.insert(customer.id) {
                errors.push(format!("Duplicate customer id: {}", customer.id));
            }
        }

        for order in &self.orders {
            if let Some(customer_id) = order.customer_id {
                if !customer_ids.contains(&customer_id) {
                    errors.push(format!(
                        "Order {} references unknown customer {customer_id}",
                        order.id
                    ));
                }
            }
        }

        let mut review_ids = HashSet::new();
        for review in &self.reviews {
            if !review_ids.insert(review.id) {
                errors.push(format!("Duplicate review id: {}", review.id));
            }
            if !review.has_valid_rating() {
                errors.push(format!(
                    "Rating {} out of range on review {}",
                    review.rating, review.id
                ));
            }
        }

        let mut coupon_ids = HashSet::new();
        let mut coupon_codes = HashSet::new();
        for coupon in &self.coupons {
            if !coupon_ids.insert(coupon.id) {
                errors.push(format!("Duplicate coupon id: {}", coupon.id));
            }
            if coupon.code.trim().is_empty() {
                errors.push(format!("Empty code on coupon {}", coupon.id));
            } else if !coupon_codes.insert(coupon.code.to_uppercase()) {
                errors.push(format!("Duplicate coupon code: {}", coupon.code));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
orders:
  - id: 1
    customer_name: Ana Souza
    customer_id: 10
    status: delivered
    total: "100.00"
    date: 15/01/2024
customers:
  - id: 10
    name: Ana Souza
    email: ana@example.com
    created_at: 02/01/2024
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SeedFormat::from_path(Path::new("seed.JSON")).expect("json"),
            SeedFormat::Json
        );
        assert_eq!(
            SeedFormat::from_path(Path::new("a/b/seed.yml")).expect("yml"),
            SeedFormat::Yaml
        );
        assert!(matches!(
            SeedFormat::from_path(Path::new("seed.toml")),
            Err(SeedError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_yaml_with_missing_collections() {
        let seed = Seed::parse(YAML, SeedFormat::Yaml).expect("parse");
        assert_eq!(seed.orders.len(), 1);
        assert_eq!(seed.customers.len(), 1);
        assert!(seed.reviews.is_empty());
        assert!(seed.coupons.is_empty());
        assert!(seed.validate().is_empty());
    }

    #[test]
    fn test_parse_empty_json_object() {
        let seed = Seed::parse("{}", SeedFormat::Json).expect("parse");
        assert!(seed.orders.is_empty());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let json = r#"{
            "orders": [
                {"id":1,"customer_name":"A","customer_id":99,"status":"pending","total":"10","date":"01/01/2024"},
                {"id":1,"customer_name":"B","status":"pending","total":"-5","date":"01/01/2024"}
            ],
            "reviews": [
                {"id":1,"customer_name":"C","product":"Kit 9","rating":6,"date":"01/01/2024"}
            ],
            "coupons": [
                {"id":1,"code":"ima10","discount":{"kind":"percent","value":"10"},"active":true},
                {"id":2,"code":"IMA10","discount":{"kind":"percent","value":"5"},"active":false}
            ]
        }"#;
        let seed = Seed::parse(json, SeedFormat::Json).expect("parse");
        let errors = seed.validate();

        assert!(errors.iter().any(|e| e.contains("Duplicate order id: 1")));
        assert!(errors.iter().any(|e| e.contains("Negative total")));
        assert!(errors.iter().any(|e| e.contains("unknown customer 99")));
        assert!(errors.iter().any(|e| e.contains("Rating 6")));
        assert!(errors.iter().any(|e| e.contains("Duplicate coupon code")));
    }

    #[test]
    fn test_invalid_error_message_lists_count() {
        let err = SeedError::Invalid(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "2 seed validation error(s): a; b");
    }
}
