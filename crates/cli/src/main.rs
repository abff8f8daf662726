//! Magnet Kit CLI - back-office screens in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Revenue chart for the last 30 days
//! mk-cli --seed fixtures/seed.json finance
//!
//! # Custom range, as JSON
//! mk-cli --seed fixtures/seed.json --json finance --start 2024-01-01 --end 2024-04-10
//!
//! # Pending orders matching "ana", second page
//! mk-cli orders --view pending --search ana --page 2
//!
//! # Check a seed file without rendering anything
//! mk-cli --seed fixtures/seed.yaml validate
//! ```
//!
//! # Commands
//!
//! - `finance` - Revenue chart and KPI cards
//! - `orders` - Orders list (tabs per status, trash)
//! - `customers` - Customers with purchase stats
//! - `reviews` - Review moderation list
//! - `coupons` - Coupons, active first
//! - `validate` - Load and validate the seed
//!
//! Configuration comes from the environment (`ADMIN_SEED_PATH`,
//! `ADMIN_PAGE_SIZE`, `ADMIN_LOCALE`, `ADMIN_CURRENCY`, `ADMIN_LOG_FORMAT`);
//! `--seed` overrides `ADMIN_SEED_PATH`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use magnet_kit_admin::telemetry::{self, DEFAULT_LOG_FILTER};
use magnet_kit_admin::{AdminConfig, AppError, LogFormat};

mod commands;
mod output;

use commands::{CliError, CouponsArgs, CustomersArgs, FinanceArgs, OrdersArgs, ReviewsArgs};

/// Exit status for bad arguments, matching clap's usage errors.
const EXIT_USAGE: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "mk-cli")]
#[command(author, version, about = "Magnet Kit back-office tools")]
struct Cli {
    /// Seed file (.json, .yaml or .yml); overrides `ADMIN_SEED_PATH`
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Print the view model as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Revenue chart and KPI cards
    Finance(FinanceArgs),
    /// Orders list
    Orders(OrdersArgs),
    /// Customers list
    Customers(CustomersArgs),
    /// Reviews list
    Reviews(ReviewsArgs),
    /// Coupons list
    Coupons(CouponsArgs),
    /// Load the seed and report validation errors
    Validate,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = AdminConfig::from_env();
    let log_format = config.as_ref().map_or(LogFormat::Text, |c| c.log_format);
    // A subscriber may already be installed when embedded; keep it.
    let _ = telemetry::init(log_format, DEFAULT_LOG_FILTER);

    let result = match config {
        Ok(config) => run(cli, config).await,
        Err(e) => Err(AppError::from(e).into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(if e.is_user_error() { EXIT_USAGE } else { 1 });
    }
}

async fn run(cli: Cli, mut config: AdminConfig) -> Result<(), CliError> {
    if let Some(seed) = cli.seed {
        config.seed_path = Some(seed);
    }
    if matches!(cli.command, Commands::Validate) && config.seed_path.is_none() {
        return Err(
            AppError::BadRequest("validate needs --seed or ADMIN_SEED_PATH".into()).into(),
        );
    }
    let state = commands::load_state(config).await?;
    let json = cli.json;

    match cli.command {
        Commands::Finance(args) => commands::finance::run(&state, &args, json)?,
        Commands::Orders(args) => commands::orders::run(&state, &args, json)?,
        Commands::Customers(args) => commands::customers::run(&state, &args, json)?,
        Commands::Reviews(args) => commands::reviews::run(&state, &args, json)?,
        Commands::Coupons(args) => commands::coupons::run(&state, &args, json)?,
        Commands::Validate => tracing::info!("Seed is valid"),
    }
    Ok(())
}
