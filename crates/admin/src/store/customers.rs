//! Customer repository.

use std::sync::Arc;

use magnet_kit_core::CustomerId;

use super::{MemoryStore, RepositoryError};
use crate::models::Customer;

/// Repository for customer operations.
pub struct CustomerRepository<'a> {
    store: &'a MemoryStore,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    /// Every customer in source order.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Customer>> {
        self.store.customers.snapshot()
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this ID.
    pub fn get(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        self.snapshot()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}
