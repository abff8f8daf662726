//! Customers (storefront users) list screen.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use magnet_kit_core::{CustomerId, format_record_date};

use super::{ListScreen, format_money};
use crate::listing::{
    FacetOption, Filter, ListState, TableColumn, TableConfig, filter_and_paginate, in_date_range,
    text_matches,
};
use crate::locale::Locale;
use crate::models::{Customer, Order};
use crate::state::AppState;

/// Customer segment facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerSegment {
    #[default]
    All,
    /// Customers with at least one revenue order.
    Buyers,
    /// Customers who never completed an order.
    NoOrders,
}

impl CustomerSegment {
    pub const ALL: [Self; 3] = [Self::All, Self::Buyers, Self::NoOrders];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Buyers => "buyers",
            Self::NoOrders => "no-orders",
        }
    }

    const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::All => locale.pick("Todos", "All"),
            Self::Buyers => locale.pick("Compradores", "Buyers"),
            Self::NoOrders => locale.pick("Sem pedidos", "No orders"),
        }
    }

    const fn admits(self, stats: CustomerStats) -> bool {
        match self {
            Self::All => true,
            Self::Buyers => stats.order_count > 0,
            Self::NoOrders => stats.order_count == 0,
        }
    }
}

impl std::fmt::Display for CustomerSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CustomerSegment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Self::All),
            "buyers" => Ok(Self::Buyers),
            "no-orders" | "no_orders" => Ok(Self::NoOrders),
            _ => Err(format!("invalid customer segment: {s}")),
        }
    }
}

/// Purchase history of one customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CustomerStats {
    pub order_count: usize,
    pub total_spent: Decimal,
}

/// Customer row for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerView {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    /// `DD/MM/YYYY`.
    pub created_at: String,
    pub order_count: usize,
    pub total_spent: Decimal,
    pub total_spent_display: String,
}

/// Segment sizes over live customers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentCounts {
    pub all: usize,
    pub buyers: usize,
    pub no_orders: usize,
}

impl SegmentCounts {
    #[must_use]
    pub const fn get(&self, segment: CustomerSegment) -> usize {
        match segment {
            CustomerSegment::All => self.all,
            CustomerSegment::Buyers => self.buyers,
            CustomerSegment::NoOrders => self.no_orders,
        }
    }
}

/// The customers screen.
pub type CustomersScreen = ListScreen<CustomerView, CustomerSegment, SegmentCounts>;

/// Order count and revenue per customer.
///
/// Only live, non-cancelled orders linked to a customer account count.
#[must_use]
pub fn customer_stats(orders: &[Order]) -> HashMap<CustomerId, CustomerStats> {
    let mut stats: HashMap<CustomerId, CustomerStats> = HashMap::new();
    for order in orders
        .iter()
        .filter(|o| o.is_live() && o.counts_as_revenue())
    {
        if let Some(customer_id) = order.customer_id {
            let entry = stats.entry(customer_id).or_default();
            entry.order_count += 1;
            entry.total_spent += order.total;
        }
    }
    stats
}

fn stats_for(stats: &HashMap<CustomerId, CustomerStats>, id: CustomerId) -> CustomerStats {
    stats.get(&id).copied().unwrap_or_default()
}

/// Predicates for the customers list.
///
/// Deleted accounts never show. Search covers name, email, phone and city;
/// the date range applies to the sign-up day.
#[must_use]
pub fn filter<'a>(
    state: &'a ListState<CustomerSegment>,
    stats: &'a HashMap<CustomerId, CustomerStats>,
) -> Filter<'a, Customer> {
    let segment = state.facet;
    Filter::new()
        .matching(|c: &Customer| !c.deleted)
        .matching(move |c: &Customer| segment.admits(stats_for(stats, c.id)))
        .matching(move |c: &Customer| {
            text_matches(
                &state.search,
                &[
                    c.name.as_str(),
                    c.email.as_str(),
                    c.phone.as_deref().unwrap_or_default(),
                    c.city.as_deref().unwrap_or_default(),
                ],
            )
        })
        .matching(move |c: &Customer| in_date_range(state.date_range.as_ref(), c.created_at))
}

/// Build the customers screen for `list`.
#[instrument(skip_all, fields(segment = %list.facet, page = list.page))]
pub fn list(state: &AppState, list: &ListState<CustomerSegment>) -> CustomersScreen {
    let customers = state.customers().snapshot();
    let orders = state.orders().snapshot();
    let locale = state.locale();
    let currency = state.currency();

    let stats = customer_stats(&orders);

    let mut counts = SegmentCounts::default();
    for customer in customers.iter().filter(|c| !c.deleted) {
        counts.all += 1;
        if stats_for(&stats, customer.id).order_count > 0 {
            counts.buyers += 1;
        } else {
            counts.no_orders += 1;
        }
    }

    let page = filter_and_paginate(
        customers.iter(),
        &filter(list, &stats),
        list.page,
        list.page_size,
    )
    .map(|c| {
        let CustomerStats {
            order_count,
            total_spent,
        } = stats_for(&stats, c.id);
        CustomerView {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            city: c.city.clone(),
            created_at: format_record_date(c.created_at),
            order_count,
            total_spent,
            total_spent_display: format_money(total_spent, currency),
        }
    });

    tracing::debug!(matches = page.total_count, "Customers listed");

    ListScreen {
        table: table_config(locale, list.facet, &counts),
        page,
        state: list.clone(),
        stats: counts,
    }
}

fn table_config(locale: Locale, selected: CustomerSegment, counts: &SegmentCounts) -> TableConfig {
    let mut config = TableConfig::new("customers")
        .column(TableColumn::new("name", locale.pick("Nome", "Name")))
        .column(TableColumn::new("email", "Email"))
        .column(TableColumn::new("phone", locale.pick("Telefone", "Phone")))
        .column(TableColumn::new("city", locale.pick("Cidade", "City")))
        .column(TableColumn::numeric("order_count", locale.pick("Pedidos", "Orders")))
        .column(TableColumn::numeric("total_spent_display", locale.pick("Total gasto", "Spent")))
        .column(TableColumn::new("created_at", locale.pick("Cadastro", "Created")))
        .search_placeholder(locale.pick(
            "Buscar por nome, email, telefone ou cidade...",
            "Search by name, email, phone or city...",
        ))
        .empty_state(
            locale.pick("Nenhum usuário encontrado", "No customers found"),
            None,
        );
    for segment in CustomerSegment::ALL {
        config = config.facet(
            FacetOption::new(segment.as_str(), segment.label(locale))
                .with_count(counts.get(segment))
                .selected(segment == selected),
        );
    }
    config
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use magnet_kit_core::DateRange;

    use super::*;
    use crate::listing::ListAction;
    use crate::screens::test_support::seeded_state;

    fn names(screen: &CustomersScreen) -> Vec<&str> {
        screen.page.items.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_stats_skip_cancelled_and_deleted_orders() {
        let state = seeded_state();
        let stats = customer_stats(&state.orders().snapshot());
        let ana = stats_for(&stats, CustomerId::new(1));
        assert_eq!(ana.order_count, 2);
        assert_eq!(ana.total_spent, Decimal::new(15_010, 2));
        assert_eq!(stats_for(&stats, CustomerId::new(3)), CustomerStats::default());
    }

    #[test]
    fn test_deleted_customers_are_hidden() {
        let state = seeded_state();
        let screen = list(&state, &ListState::default());
        assert_eq!(names(&screen), ["Ana Souza", "Bruno Lima", "Carla Dias"]);
        assert_eq!(screen.stats.all, 3);
    }

    #[test]
    fn test_segments() {
        let state = seeded_state();
        let buyers = ListState::default().reduce(ListAction::Facet(CustomerSegment::Buyers));
        assert_eq!(names(&list(&state, &buyers)), ["Ana Souza", "Bruno Lima"]);

        let none = ListState::default().reduce(ListAction::Facet(CustomerSegment::NoOrders));
        let screen = list(&state, &none);
        assert_eq!(names(&screen), ["Carla Dias"]);
        assert_eq!(screen.page.items[0].total_spent_display, "R$ 0,00");
        assert_eq!(screen.stats.buyers, 2);
    }

    #[test]
    fn test_search_covers_contact_fields() {
        let state = seeded_state();
        let cases = [
            ("recife", "Ana Souza"),
            ("99999", "Bruno Lima"),
            ("CARLA@", "Carla Dias"),
        ];
        for (query, expected) in cases {
            let list_state = ListState::default().reduce(ListAction::Search(query.to_owned()));
            assert_eq!(names(&list(&state, &list_state)), [expected], "{query}");
        }
    }

    #[test]
    fn test_sign_up_date_range() {
        let state = seeded_state();
        let range = DateRange::from_inputs("2024-02-01", "2024-03-31").expect("range");
        let list_state = ListState::default().reduce(ListAction::DateRange(Some(range)));
        assert_eq!(names(&list(&state, &list_state)), ["Bruno Lima", "Carla Dias"]);
    }

    #[test]
    fn test_segment_from_str() {
        for segment in CustomerSegment::ALL {
            assert_eq!(segment.as_str().parse(), Ok(segment));
        }
    }
}
