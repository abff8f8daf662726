//! Order repository.

use std::sync::Arc;

use magnet_kit_core::{OrderId, OrderStatus};

use super::{MemoryStore, RepositoryError};
use crate::models::Order;

/// Repository for order operations.
pub struct OrderRepository<'a> {
    store: &'a MemoryStore,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    /// Every order, including soft-deleted ones, in source order.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Order>> {
        self.store.orders.snapshot()
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    pub fn get(&self, id: OrderId) -> Result<Order, RepositoryError> {
        self.snapshot()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    /// Change the status of a live order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for unknown IDs and
    /// `RepositoryError::Conflict` if the order is in the trash.
    pub fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let updated = self.store.orders.write(|orders| {
            let order = find_mut(orders, id)?;
            if order.deleted {
                return Err(RepositoryError::Conflict(format!(
                    "order {id} is in the trash"
                )));
            }
            order.status = status;
            Ok(order.clone())
        })?;

        tracing::info!(order_id = %id, status = %status, "Order status updated");
        Ok(updated)
    }

    /// Move an order to the trash. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    pub fn soft_delete(&self, id: OrderId) -> Result<Order, RepositoryError> {
        let updated = self.set_deleted(id, true)?;
        tracing::info!(order_id = %id, "Order moved to trash");
        Ok(updated)
    }

    /// Bring an order back from the trash. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    pub fn restore(&self, id: OrderId) -> Result<Order, RepositoryError> {
        let updated = self.set_deleted(id, false)?;
        tracing::info!(order_id = %id, "Order restored from trash");
        Ok(updated)
    }

    fn set_deleted(&self, id: OrderId, deleted: bool) -> Result<Order, RepositoryError> {
        self.store.orders.write(|orders| {
            let order = find_mut(orders, id)?;
            order.deleted = deleted;
            Ok(order.clone())
        })
    }
}

fn find_mut(orders: &mut [Order], id: OrderId) -> Result<&mut Order, RepositoryError> {
    orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or(RepositoryError::NotFound)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::store::Seed;

    fn store() -> MemoryStore {
        let order = Order {
            id: OrderId::new(1),
            customer_name: "Ana".to_string(),
            customer_id: None,
            status: OrderStatus::Pending,
            total: Decimal::new(100, 0),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
            deleted: false,
        };
        MemoryStore::from_seed(Seed {
            orders: vec![order],
            ..Seed::default()
        })
        .expect("seed")
    }

    #[test]
    fn test_update_status() {
        let store = store();
        let repo = OrderRepository::new(&store);
        let order = repo
            .update_status(OrderId::new(1), OrderStatus::Shipped)
            .expect("update");
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(repo.get(OrderId::new(1)).expect("get").status, OrderStatus::Shipped);
    }

    #[test]
    fn test_update_status_unknown_order() {
        let store = store();
        let repo = OrderRepository::new(&store);
        assert!(matches!(
            repo.update_status(OrderId::new(99), OrderStatus::Shipped),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn test_trashed_order_rejects_status_change() {
        let store = store();
        let repo = OrderRepository::new(&store);
        repo.soft_delete(OrderId::new(1)).expect("delete");
        assert!(matches!(
            repo.update_status(OrderId::new(1), OrderStatus::Delivered),
            Err(RepositoryError::Conflict(_))
        ));

        let restored = repo.restore(OrderId::new(1)).expect("restore");
        assert!(!restored.deleted);
    }

    #[test]
    fn test_snapshot_survives_delete() {
        let store = store();
        let repo = OrderRepository::new(&store);
        let before = repo.snapshot();
        repo.soft_delete(OrderId::new(1)).expect("delete");
        assert!(before.iter().all(|o| !o.deleted));
        assert!(repo.snapshot().iter().all(|o| o.deleted));
    }
}
