//! `mk-cli finance` - revenue chart and KPI cards.

use std::io::Write;

use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use magnet_kit_admin::AppState;
use magnet_kit_admin::analytics::{RangePreset, RangeSelection};
use magnet_kit_admin::screens::finance::{self, FinanceDashboard};
use magnet_kit_admin::screens::orders::{self, OrdersScreen};
use magnet_kit_core::{DateRange, parse_input_date};

use super::{CliError, today_or_now};
use crate::output::{write_json, write_list};

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Args)]
pub struct FinanceArgs {
    /// Quick range: 7d, 30d, 90d, month or year
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub preset: Option<RangePreset>,

    /// Custom range start (YYYY-MM-DD)
    #[arg(long, value_parser = parse_input_date, requires = "end")]
    pub start: Option<NaiveDate>,

    /// Custom range end (YYYY-MM-DD)
    #[arg(long, value_parser = parse_input_date, requires = "start")]
    pub end: Option<NaiveDate>,

    /// Reference date for presets (YYYY-MM-DD, default: today)
    #[arg(long, value_parser = parse_input_date)]
    pub today: Option<NaiveDate>,

    /// List the orders behind one bar instead of drawing the chart
    /// (bar id such as `2024-03-15`, `W-2024-03-11`, `M-3-2024` or `Y-2024`)
    #[arg(long)]
    pub bucket: Option<String>,
}

impl FinanceArgs {
    fn selection(&self) -> Result<RangeSelection, CliError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(RangeSelection::Custom(
                DateRange::new(start, end).map_err(magnet_kit_admin::AppError::from)?,
            )),
            _ => Ok(RangeSelection::Preset(self.preset.unwrap_or_default())),
        }
    }
}

pub fn run(state: &AppState, args: &FinanceArgs, json: bool) -> Result<(), CliError> {
    if let Some(bucket_id) = &args.bucket {
        let screen = bucket_orders(state, args, bucket_id)?;
        let mut out = std::io::stdout().lock();
        return if json {
            write_json(&mut out, &screen)
        } else {
            write_list(&mut out, &screen, state.locale())
        };
    }

    let dashboard = finance::dashboard(state, args.selection()?, today_or_now(args.today))?;

    let mut out = std::io::stdout().lock();
    if json {
        write_json(&mut out, &dashboard)
    } else {
        write_dashboard(&mut out, &dashboard, state)
    }
}

/// Orders screen filtered to the period of one chart bar.
fn bucket_orders(
    state: &AppState,
    args: &FinanceArgs,
    bucket_id: &str,
) -> Result<OrdersScreen, CliError> {
    let range = args.selection()?.resolve(today_or_now(args.today));
    let list_state = finance::drill_down(state, &range, bucket_id)?;
    Ok(orders::list(state, &list_state))
}

fn write_dashboard(
    out: &mut impl Write,
    dashboard: &FinanceDashboard,
    state: &AppState,
) -> Result<(), CliError> {
    let locale = state.locale();
    let summary = &dashboard.summary;

    writeln!(out, "{}: {}", locale.pick("Período", "Period"), dashboard.range)?;
    writeln!(
        out,
        "{}: {}  |  {}: {}  |  {}: {}  |  {}: {} ({})",
        locale.pick("Faturamento", "Revenue"),
        dashboard.money(summary.gross_revenue),
        locale.pick("Pedidos", "Orders"),
        summary.order_count,
        locale.pick("Ticket médio", "Average ticket"),
        dashboard.money(summary.average_ticket),
        locale.pick("Cancelados", "Cancelled"),
        summary.cancelled_count,
        dashboard.money(summary.cancelled_value),
    )?;
    writeln!(out)?;

    if !dashboard.chart.has_data() {
        writeln!(
            out,
            "{}",
            locale.pick("Sem vendas no período", "No sales in this period")
        )?;
        return Ok(());
    }

    let label_width = dashboard
        .chart
        .buckets
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);
    for bucket in &dashboard.chart.buckets {
        let bar = "█".repeat(bar_len(bucket.total, dashboard.chart.peak));
        writeln!(
            out,
            "{:<label_width$}  {:<width$}  {}",
            bucket.label,
            bar,
            dashboard.money(bucket.total),
            width = BAR_WIDTH,
        )?;
    }
    Ok(())
}

/// Bar length proportional to `total / peak`, at least one cell for any
/// non-zero total.
fn bar_len(total: Decimal, peak: Decimal) -> usize {
    if total <= Decimal::ZERO || peak <= Decimal::ZERO {
        return 0;
    }
    let scaled = (total * Decimal::from(BAR_WIDTH) / peak).round();
    scaled.to_usize().unwrap_or(0).max(1)
}
