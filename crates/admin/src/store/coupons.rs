//! Coupon repository.

use std::sync::Arc;

use magnet_kit_core::CouponId;

use super::{MemoryStore, RepositoryError};
use crate::models::Coupon;

/// Repository for coupon operations.
pub struct CouponRepository<'a> {
    store: &'a MemoryStore,
}

impl<'a> CouponRepository<'a> {
    /// Create a new coupon repository.
    #[must_use]
    pub const fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    /// Every coupon in source order.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Coupon>> {
        self.store.coupons.snapshot()
    }

    /// Look up a coupon by code, ignoring case.
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<Coupon> {
        let code = code.trim();
        self.snapshot()
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned()
    }

    /// Add a coupon. Codes are stored upper-case.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the ID or code is already taken.
    pub fn create(&self, mut coupon: Coupon) -> Result<Coupon, RepositoryError> {
        coupon.code = coupon.code.trim().to_uppercase();

        let created = self.store.coupons.write(|coupons| {
            if coupons.iter().any(|c| c.id == coupon.id) {
                return Err(RepositoryError::Conflict(format!(
                    "coupon id {} already exists",
                    coupon.id
                )));
            }
            if coupons.iter().any(|c| c.code.eq_ignore_ascii_case(&coupon.code)) {
                return Err(RepositoryError::Conflict(format!(
                    "coupon code {} already exists",
                    coupon.code
                )));
            }
            coupons.push(coupon.clone());
            Ok(coupon)
        })?;

        tracing::info!(coupon_id = %created.id, code = %created.code, "Coupon created");
        Ok(created)
    }

    /// Enable or disable a coupon.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no coupon has this ID.
    pub fn set_active(&self, id: CouponId, active: bool) -> Result<Coupon, RepositoryError> {
        let updated = self.store.coupons.write(|coupons| {
            let coupon = coupons
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(RepositoryError::NotFound)?;
            coupon.active = active;
            Ok(coupon.clone())
        })?;

        tracing::info!(coupon_id = %id, active, "Coupon toggled");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::Discount;

    fn coupon(id: i32, code: &str) -> Coupon {
        Coupon {
            id: CouponId::new(id),
            code: code.to_string(),
            description: String::new(),
            discount: Discount::Percent(Decimal::new(10, 0)),
            active: true,
            usage_count: 0,
            usage_limit: None,
            expires_on: None,
        }
    }

    #[test]
    fn test_create_normalizes_code_and_rejects_duplicates() {
        let store = MemoryStore::empty();
        let repo = CouponRepository::new(&store);

        let created = repo.create(coupon(1, " ima10 ")).expect("create");
        assert_eq!(created.code, "IMA10");

        assert!(matches!(
            repo.create(coupon(2, "Ima10")),
            Err(RepositoryError::Conflict(_))
        ));
        assert!(matches!(
            repo.create(coupon(1, "OTHER")),
            Err(RepositoryError::Conflict(_))
        ));
        assert!(repo.find_by_code("ima10").is_some());
    }

    #[test]
    fn test_set_active() {
        let store = MemoryStore::empty();
        let repo = CouponRepository::new(&store);
        repo.create(coupon(1, "FRETE")).expect("create");

        let updated = repo.set_active(CouponId::new(1), false).expect("toggle");
        assert!(!updated.active);
        assert!(matches!(
            repo.set_active(CouponId::new(9), true),
            Err(RepositoryError::NotFound)
        ));
    }
}
