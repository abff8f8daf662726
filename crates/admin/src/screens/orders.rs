//! Orders list screen.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use magnet_kit_core::{OrderId, OrderStatus, format_record_date};

use super::{ListScreen, format_money};
use crate::listing::{
    FacetOption, Filter, ListState, TableColumn, TableConfig, filter_and_paginate, in_date_range,
    text_matches,
};
use crate::locale::Locale;
use crate::models::Order;
use crate::state::AppState;

/// Which tab of the orders screen is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderTab {
    /// Every live order.
    #[default]
    All,
    /// Live orders with one status.
    Status(OrderStatus),
    /// Soft-deleted orders, whatever their status.
    Trash,
}

impl std::fmt::Display for OrderTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Status(status) => write!(f, "{status}"),
            Self::Trash => f.write_str("trash"),
        }
    }
}

impl std::str::FromStr for OrderTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Self::All),
            "trash" => Ok(Self::Trash),
            other => other
                .parse()
                .map(Self::Status)
                .map_err(|_| format!("invalid order view: {s}")),
        }
    }
}

/// Order row for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub customer_name: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub total: Decimal,
    pub total_display: String,
    /// `DD/MM/YYYY`.
    pub date: String,
    pub deleted: bool,
}

/// Badge counts for the tab bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    /// Live orders.
    pub all: usize,
    /// Live orders per status.
    pub by_status: BTreeMap<OrderStatus, usize>,
    /// Orders in the trash.
    pub trash: usize,
}

impl TabCounts {
    #[must_use]
    pub fn get(&self, tab: OrderTab) -> usize {
        match tab {
            OrderTab::All => self.all,
            OrderTab::Status(status) => self.by_status.get(&status).copied().unwrap_or(0),
            OrderTab::Trash => self.trash,
        }
    }
}

/// The orders screen.
pub type OrdersScreen = ListScreen<OrderView, OrderTab, TabCounts>;

// =============================================================================
// Filtering
// =============================================================================

/// Predicates for the orders list.
///
/// The trash tab shows only deleted orders and ignores status; every other
/// tab shows only live orders matching its status. Search looks at the
/// customer name and the order number, with or without `#`.
#[must_use]
pub fn filter(state: &ListState<OrderTab>) -> Filter<'_, Order> {
    let tab = state.facet;
    Filter::new()
        .matching(move |o: &Order| match tab {
            OrderTab::Trash => o.deleted,
            OrderTab::All => o.is_live(),
            OrderTab::Status(status) => o.is_live() && o.status == status,
        })
        .matching(move |o: &Order| {
            let number = format!("#{}", o.id);
            text_matches(&state.search, &[o.customer_name.as_str(), number.as_str()])
        })
        .matching(move |o: &Order| in_date_range(state.date_range.as_ref(), o.date))
}

/// Count orders per tab over the whole collection.
#[must_use]
pub fn tab_counts(orders: &[Order]) -> TabCounts {
    let mut counts = TabCounts {
        by_status: OrderStatus::ALL.into_iter().map(|s| (s, 0)).collect(),
        ..TabCounts::default()
    };
    for order in orders {
        if order.deleted {
            counts.trash += 1;
        } else {
            counts.all += 1;
            *counts.by_status.entry(order.status).or_default() += 1;
        }
    }
    counts
}

// =============================================================================
// Screen
// =============================================================================

/// Build the orders screen for `list`.
#[instrument(skip_all, fields(tab = %list.facet, page = list.page))]
pub fn list(state: &AppState, list: &ListState<OrderTab>) -> OrdersScreen {
    let orders = state.orders().snapshot();
    let locale = state.locale();
    let currency = state.currency();

    let counts = tab_counts(&orders);
    let page = filter_and_paginate(orders.iter(), &filter(list), list.page, list.page_size)
        .map(|o| OrderView {
            id: o.id,
            customer_name: o.customer_name.clone(),
            status: o.status,
            status_label: locale.order_status(o.status),
            total: o.total,
            total_display: format_money(o.total, currency),
            date: format_record_date(o.date),
            deleted: o.deleted,
        });

    tracing::debug!(matches = page.total_count, "Orders listed");

    ListScreen {
        table: table_config(locale, list.facet, &counts),
        page,
        state: list.clone(),
        stats: counts,
    }
}

fn table_config(locale: Locale, selected: OrderTab, counts: &TabCounts) -> TableConfig {
    let tabs = std::iter::once((OrderTab::All, locale.pick("Todos", "All")))
        .chain(
            OrderStatus::ALL
                .into_iter()
                .map(|s| (OrderTab::Status(s), locale.order_status(s))),
        )
        .chain(std::iter::once((OrderTab::Trash, locale.pick("Lixeira", "Trash"))));

    let mut config = TableConfig::new("orders")
        .column(TableColumn::new("id", locale.pick("Pedido", "Order")))
        .column(TableColumn::new("customer_name", locale.pick("Cliente", "Customer")))
        .column(TableColumn::new("status_label", "Status"))
        .column(TableColumn::numeric("total_display", "Total"))
        .column(TableColumn::new("date", locale.pick("Data", "Date")))
        .search_placeholder(locale.pick(
            "Buscar por cliente ou número do pedido...",
            "Search by customer or order number...",
        ))
        .empty_state(
            locale.pick("Nenhum pedido encontrado", "No orders found"),
            Some(locale.pick(
                "Tente ajustar a busca ou os filtros",
                "Try adjusting your search or filters",
            )),
        );
    for (tab, label) in tabs {
        config = config.facet(
            FacetOption::new(tab.to_string(), label)
                .with_count(counts.get(tab))
                .selected(tab == selected),
        );
    }
    config
}
