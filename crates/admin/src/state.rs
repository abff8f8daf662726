//! Application state shared across screens.

use std::sync::Arc;

use magnet_kit_core::CurrencyCode;

use crate::config::AdminConfig;
use crate::locale::Locale;
use crate::store::{
    CouponRepository, CustomerRepository, MemoryStore, OrderRepository, ReviewRepository,
};

/// Application state shared by every screen builder.
///
/// Cheap to clone; all clones see the same store.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: AdminConfig,
    store: MemoryStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: AdminConfig, store: MemoryStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.inner.config.locale
    }

    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.inner.config.currency
    }

    #[must_use]
    pub fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(&self.inner.store)
    }

    #[must_use]
    pub fn customers(&self) -> CustomerRepository<'_> {
        CustomerRepository::new(&self.inner.store)
    }

    #[must_use]
    pub fn reviews(&self) -> ReviewRepository<'_> {
        ReviewRepository::new(&self.inner.store)
    }

    #[must_use]
    pub fn coupons(&self) -> CouponRepository<'_> {
        CouponRepository::new(&self.inner.store)
    }
}
