//! `mk-cli coupons` - coupons list.

use chrono::NaiveDate;
use clap::Args;

use magnet_kit_admin::AppState;
use magnet_kit_admin::screens::coupons::{self, CouponFilter};
use magnet_kit_core::parse_input_date;

use super::{CliError, ListArgs, PageArgs, today_or_now};
use crate::output::{write_json, write_list};

#[derive(Debug, Clone, Args)]
pub struct CouponsArgs {
    /// Filter: all, active or inactive
    #[arg(long, default_value = "all")]
    pub filter: CouponFilter,

    /// Reference date for the expired flag (YYYY-MM-DD, default: today)
    #[arg(long, value_parser = parse_input_date)]
    pub today: Option<NaiveDate>,

    #[command(flatten)]
    pub page: PageArgs,
}

pub fn run(state: &AppState, args: &CouponsArgs, json: bool) -> Result<(), CliError> {
    let list_state = ListArgs::from(&args.page).to_state(state.config(), args.filter)?;
    let screen = coupons::list(state, &list_state, today_or_now(args.today));

    let mut out = std::io::stdout().lock();
    if json {
        write_json(&mut out, &screen)
    } else {
        write_list(&mut out, &screen, state.locale())
    }
}
