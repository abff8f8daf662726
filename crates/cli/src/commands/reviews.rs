//! `mk-cli reviews` - review moderation list.

use clap::Args;

use magnet_kit_admin::AppState;
use magnet_kit_admin::screens::reviews::{self, ReviewFacet};
use magnet_kit_core::ReviewStatus;

use super::{CliError, ListArgs};
use crate::output::{write_json, write_list};

#[derive(Debug, Clone, Args)]
pub struct ReviewsArgs {
    /// Moderation status: pending, approved or rejected
    #[arg(long)]
    pub status: Option<ReviewStatus>,

    /// Exact star rating
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    #[command(flatten)]
    pub list: ListArgs,
}

pub fn run(state: &AppState, args: &ReviewsArgs, json: bool) -> Result<(), CliError> {
    let facet = ReviewFacet {
        status: args.status,
        rating: args.rating,
    };
    let list_state = args.list.to_state(state.config(), facet)?;
    let screen = reviews::list(state, &list_state);

    let mut out = std::io::stdout().lock();
    if json {
        write_json(&mut out, &screen)
    } else {
        write_list(&mut out, &screen, state.locale())
    }
}
