//! Magnet Kit back-office engine.
//!
//! Everything the admin screens need, minus the rendering:
//!
//! - [`store`] - in-memory collections seeded from JSON/YAML
//! - [`analytics`] - date-bucketed revenue chart and finance KPIs
//! - [`listing`] - filter/paginate pipeline and list-state reducer
//! - [`screens`] - view builders for finance, orders, customers, reviews and coupons
//!
//! ```rust,no_run
//! use magnet_kit_admin::{AdminConfig, AppState, MemoryStore, Seed};
//! use magnet_kit_admin::analytics::RangeSelection;
//! use magnet_kit_admin::screens::finance;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let seed = Seed::load(std::path::Path::new("fixtures/seed.json"))?;
//! let state = AppState::new(AdminConfig::default(), MemoryStore::from_seed(seed)?);
//! let today = chrono::Local::now().date_naive();
//! let dashboard = finance::dashboard(&state, RangeSelection::default(), today)?;
//! assert_eq!(dashboard.chart.total, dashboard.summary.gross_revenue);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod config;
pub mod error;
pub mod listing;
pub mod locale;
pub mod models;
pub mod screens;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{AdminConfig, ConfigError, LogFormat};
pub use error::AppError;
pub use locale::Locale;
pub use state::AppState;
pub use store::{MemoryStore, RepositoryError, Seed, SeedError, SeedFormat};
