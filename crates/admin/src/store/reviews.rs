//! Review repository.

use std::sync::Arc;

use magnet_kit_core::{ReviewId, ReviewStatus};

use super::{MemoryStore, RepositoryError};
use crate::models::Review;

/// Repository for review moderation.
pub struct ReviewRepository<'a> {
    store: &'a MemoryStore,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    /// Every review in source order.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Review>> {
        self.store.reviews.snapshot()
    }

    /// Set the moderation status of a review.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no review has this ID.
    pub fn set_status(
        &self,
        id: ReviewId,
        status: ReviewStatus,
    ) -> Result<Review, RepositoryError> {
        let updated = self.store.reviews.write(|reviews| {
            let review = reviews
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(RepositoryError::NotFound)?;
            review.status = status;
            Ok(review.clone())
        })?;

        tracing::info!(review_id = %id, status = %status, "Review moderated");
        Ok(updated)
    }

    /// Publish a review.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no review has this ID.
    pub fn approve(&self, id: ReviewId) -> Result<Review, RepositoryError> {
        self.set_status(id, ReviewStatus::Approved)
    }

    /// Hide a review.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no review has this ID.
    pub fn reject(&self, id: ReviewId) -> Result<Review, RepositoryError> {
        self.set_status(id, ReviewStatus::Rejected)
    }
}
