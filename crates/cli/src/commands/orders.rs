//! `mk-cli orders` - orders list.

use clap::Args;

use magnet_kit_admin::AppState;
use magnet_kit_admin::screens::orders::{self, OrderTab};

use super::{CliError, ListArgs};
use crate::output::{write_json, write_list};

#[derive(Debug, Clone, Args)]
pub struct OrdersArgs {
    /// Tab: all, trash, or a status (pending, production, shipped, delivered, cancelled)
    #[arg(long, default_value = "all")]
    pub view: OrderTab,

    #[command(flatten)]
    pub list: ListArgs,
}

pub fn run(state: &AppState, args: &OrdersArgs, json: bool) -> Result<(), CliError> {
    let list_state = args.list.to_state(state.config(), args.view)?;
    let screen = orders::list(state, &list_state);

    let mut out = std::io::stdout().lock();
    if json {
        write_json(&mut out, &screen)
    } else {
        write_list(&mut out, &screen, state.locale())
    }
}
