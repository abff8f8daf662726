//! In-memory persistence for the back-office.
//!
//! # Collections
//!
//! - `orders` - Customer orders (soft-deletable)
//! - `customers` - Storefront customer accounts
//! - `reviews` - Product reviews under moderation
//! - `coupons` - Discount codes
//!
//! Each collection lives behind `RwLock<Arc<Vec<T>>>`. Readers take an `Arc`
//! snapshot and never observe a half-applied write; writers go through
//! [`Arc::make_mut`], which clones the rows only while a snapshot is alive.
//!
//! The store is filled from a [`Seed`] file:
//! ```bash
//! mk-cli --seed fixtures/seed.json orders
//! ```

pub mod coupons;
pub mod customers;
pub mod orders;
pub mod reviews;
pub mod seed;

use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use crate::models::{Coupon, Customer, Order, Review};

pub use coupons::CouponRepository;
pub use customers::CustomerRepository;
pub use orders::OrderRepository;
pub use reviews::ReviewRepository;
pub use seed::{Seed, SeedError, SeedFormat};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// The write conflicts with the current state (e.g., duplicate code).
    #[error("conflict: {0}")]
    Conflict(String),
}

/// A copy-on-write collection of records.
#[derive(Debug)]
pub struct Collection<T> {
    rows: RwLock<Arc<Vec<T>>>,
}

impl<T: Clone> Collection<T> {
    fn new(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(Arc::new(rows)),
        }
    }

    /// Immutable view of every row at this instant.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        let guard = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Apply `f` to the rows under the write lock.
    ///
    /// Outstanding snapshots keep seeing the previous rows.
    fn write<R>(
        &self,
        f: impl FnOnce(&mut Vec<T>) -> Result<R, RepositoryError>,
    ) -> Result<R, RepositoryError> {
        let mut guard = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        f(Arc::make_mut(&mut guard))
    }
}

/// The mock back-office database.
#[derive(Debug)]
pub struct MemoryStore {
    orders: Collection<Order>,
    customers: Collection<Customer>,
    reviews: Collection<Review>,
    coupons: Collection<Coupon>,
}

impl MemoryStore {
    /// Build a store from a seed after validating it.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Invalid` listing every validation failure.
    pub fn from_seed(seed: Seed) -> Result<Self, SeedError> {
        let errors = seed.validate();
        if !errors.is_empty() {
            return Err(SeedError::Invalid(errors));
        }

        tracing::info!(
            orders = seed.orders.len(),
            customers = seed.customers.len(),
            reviews = seed.reviews.len(),
            coupons = seed.coupons.len(),
            "Store seeded"
        );

        Ok(Self {
            orders: Collection::new(seed.orders),
            customers: Collection::new(seed.customers),
            reviews: Collection::new(seed.reviews),
            coupons: Collection::new(seed.coupons),
        })
    }

    /// A store with no records.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            orders: Collection::new(Vec::new()),
            customers: Collection::new(Vec::new()),
            reviews: Collection::new(Vec::new()),
            coupons: Collection::new(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_isolated_from_later_writes() {
        let collection = Collection::new(vec![1, 2, 3]);
        let before = collection.snapshot();

        collection
            .write(|rows| {
                rows.push(4);
                Ok(())
            })
            .expect("write");

        assert_eq!(*before, vec![1, 2, 3]);
        assert_eq!(*collection.snapshot(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_failed_write_surfaces_error() {
        let collection = Collection::new(vec![1]);
        let result: Result<(), _> = collection.write(|_| Err(RepositoryError::NotFound));
        assert!(matches!(result, Err(RepositoryError::NotFound)));
        assert_eq!(*collection.snapshot(), vec![1]);
    }

    #[test]
    fn test_repository_error_display() {
        assert_eq!(RepositoryError::NotFound.to_string(), "not found");
        assert_eq!(
            RepositoryError::Conflict("duplicate code".to_string()).to_string(),
            "conflict: duplicate code"
        );
    }
}
