//! Subcommand implementations.

pub mod coupons;
pub mod customers;
pub mod finance;
pub mod orders;
pub mod reviews;

pub use coupons::CouponsArgs;
pub use customers::CustomersArgs;
pub use finance::FinanceArgs;
pub use orders::OrdersArgs;
pub use reviews::ReviewsArgs;

use chrono::NaiveDate;
use clap::Args;
use thiserror::Error;

use magnet_kit_admin::listing::{ListAction, ListState};
use magnet_kit_admin::{AdminConfig, AppError, AppState, MemoryStore, Seed, SeedError, SeedFormat};
use magnet_kit_core::{DateRange, parse_input_date};

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Whether the command failed because of its arguments.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::App(e) => e.is_user_error(),
            Self::Seed(_) | Self::Io(_) | Self::Json(_) => false,
        }
    }
}

/// Filters and paging shared by every list command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive text search
    #[arg(long)]
    pub search: Option<String>,

    /// First day of the date filter (YYYY-MM-DD)
    #[arg(long, value_parser = parse_input_date, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Last day of the date filter (YYYY-MM-DD)
    #[arg(long, value_parser = parse_input_date, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to `ADMIN_PAGE_SIZE`)
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ListArgs {
    /// Replay the arguments as reducer actions on a fresh list state.
    ///
    /// The page is applied last so filter changes do not reset it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Range` if `--from` is after `--to`.
    pub fn to_state<F: Default + PartialEq>(
        &self,
        config: &AdminConfig,
        facet: F,
    ) -> Result<ListState<F>, AppError> {
        let date_range = match (self.from, self.to) {
            (Some(from), Some(to)) => Some(DateRange::new(from, to)?),
            _ => None,
        };

        let state = ListState::with_page_size(self.page_size.unwrap_or(config.page_size))
            .reduce(ListAction::Search(self.search.clone().unwrap_or_default()))
            .reduce(ListAction::Facet(facet))
            .reduce(ListAction::DateRange(date_range))
            .reduce(ListAction::GoTo(self.page));
        Ok(state)
    }
}

/// `ListArgs` without the date filter, for screens that have none.
#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    /// Case-insensitive text search
    #[arg(long)]
    pub search: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to `ADMIN_PAGE_SIZE`)
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl From<&PageArgs> for ListArgs {
    fn from(args: &PageArgs) -> Self {
        Self {
            search: args.search.clone(),
            from: None,
            to: None,
            page: args.page,
            page_size: args.page_size,
        }
    }
}

/// Read the seed (if any) and build the application state.
///
/// # Errors
///
/// Returns `SeedError` if the file cannot be read, parsed or validated.
pub async fn load_state(config: AdminConfig) -> Result<AppState, CliError> {
    let store = match &config.seed_path {
        Some(path) => {
            let format = SeedFormat::from_path(path)?;
            tracing::info!(path = %path.display(), "Loading seed");
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SeedError::Io {
                    path: path.clone(),
                    source,
                })?;
            let seed = Seed::parse(&content, format)?;
            MemoryStore::from_seed(seed)?
        }
        None => {
            tracing::warn!("No seed file configured, starting with an empty store");
            MemoryStore::empty()
        }
    };
    Ok(AppState::new(config, store))
}

/// The date used for "today": `--today` if given, otherwise the local date.
pub fn today_or_now(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args_keep_requested_page() {
        let args = ListArgs {
            search: Some("ana".to_owned()),
            page: 3,
            page_size: Some(5),
            ..ListArgs::default()
        };
        let state = args.to_state(&AdminConfig::default(), ()).expect("state");
        assert_eq!(state.page, 3);
        assert_eq!(state.page_size, 5);
        assert_eq!(state.search, "ana");
    }

    #[test]
    fn test_list_args_reject_inverted_range() {
        let args = ListArgs {
            from: NaiveDate::from_ymd_opt(2024, 2, 1),
            to: NaiveDate::from_ymd_opt(2024, 1, 1),
            page: 1,
            ..ListArgs::default()
        };
        assert!(matches!(
            args.to_state(&AdminConfig::default(), ()),
            Err(AppError::Range(_))
        ));
    }

    #[test]
    fn test_missing_seed_gives_empty_store() {
        let state = tokio::runtime::Runtime::new()
            .expect("runtime")
            .block_on(load_state(AdminConfig::default()))
            .expect("state");
        assert!(state.orders().snapshot().is_empty());
    }
}
