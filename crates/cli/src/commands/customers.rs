//! `mk-cli customers` - customers list.

use clap::Args;

use magnet_kit_admin::AppState;
use magnet_kit_admin::screens::customers::{self, CustomerSegment};

use super::{CliError, ListArgs};
use crate::output::{write_json, write_list};

#[derive(Debug, Clone, Args)]
pub struct CustomersArgs {
    /// Segment: all, buyers or no-orders
    #[arg(long, default_value = "all")]
    pub segment: CustomerSegment,

    /// Date filters apply to the sign-up day
    #[command(flatten)]
    pub list: ListArgs,
}

pub fn run(state: &AppState, args: &CustomersArgs, json: bool) -> Result<(), CliError> {
    let list_state = args.list.to_state(state.config(), args.segment)?;
    let screen = customers::list(state, &list_state);

    let mut out = std::io::stdout().lock();
    if json {
        write_json(&mut out, &screen)
    } else {
        write_list(&mut out, &screen, state.locale())
    }
}
