//! Coupons list screen.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use magnet_kit_core::{CouponId, format_record_date};

use super::ListScreen;
use crate::listing::{
    FacetOption, Filter, ListState, TableColumn, TableConfig, paginate, text_matches,
};
use crate::locale::Locale;
use crate::models::Coupon;
use crate::state::AppState;

/// Active/inactive facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl CouponFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::All => locale.pick("Todos", "All"),
            Self::Active => locale.pick("Ativos", "Active"),
            Self::Inactive => locale.pick("Inativos", "Inactive"),
        }
    }

    const fn admits(self, coupon: &Coupon) -> bool {
        match self {
            Self::All => true,
            Self::Active => coupon.active,
            Self::Inactive => !coupon.active,
        }
    }
}

impl std::fmt::Display for CouponFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CouponFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("invalid coupon filter: {s}")),
        }
    }
}

/// Coupon row for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CouponView {
    pub id: CouponId,
    pub code: String,
    pub description: String,
    /// `15%` or a formatted amount.
    pub discount: String,
    pub active: bool,
    /// `used/limit`, or just `used` when uncapped.
    pub usage: String,
    /// `DD/MM/YYYY`, if the coupon expires.
    pub expires_on: Option<String>,
    pub exhausted: bool,
    pub expired: bool,
}

/// Active/inactive counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CouponCounts {
    pub all: usize,
    pub active: usize,
    pub inactive: usize,
}

impl CouponCounts {
    #[must_use]
    pub const fn get(&self, filter: CouponFilter) -> usize {
        match filter {
            CouponFilter::All => self.all,
            CouponFilter::Active => self.active,
            CouponFilter::Inactive => self.inactive,
        }
    }
}

/// The coupons screen.
pub type CouponsScreen = ListScreen<CouponView, CouponFilter, CouponCounts>;

/// Predicates for the coupons list. Search covers code and description.
///
/// Coupons have no date filter; a date range in the state is ignored.
#[must_use]
pub fn filter(state: &ListState<CouponFilter>) -> Filter<'_, Coupon> {
    let facet = state.facet;
    Filter::new()
        .matching(move |c: &Coupon| facet.admits(c))
        .matching(move |c: &Coupon| {
            text_matches(&state.search, &[c.code.as_str(), c.description.as_str()])
        })
}

/// Active coupons first; order within each group is kept.
pub fn sort_active_first(coupons: &mut [&Coupon]) {
    coupons.sort_by_key(|c| !c.active);
}

/// Build the coupons screen for `list`. `today` decides the expired flag.
#[instrument(skip_all, fields(filter = %list.facet, page = list.page))]
pub fn list(state: &AppState, list: &ListState<CouponFilter>, today: NaiveDate) -> CouponsScreen {
    let coupons = state.coupons().snapshot();
    let locale = state.locale();
    let currency = state.currency();

    let active = coupons.iter().filter(|c| c.active).count();
    let counts = CouponCounts {
        all: coupons.len(),
        active,
        inactive: coupons.len() - active,
    };

    let mut matches = filter(list).apply(coupons.iter());
    sort_active_first(&mut matches);

    let page = paginate(matches, list.page, list.page_size).map(|c| CouponView {
        id: c.id,
        code: c.code.clone(),
        description: c.description.clone(),
        discount: c.discount.display(currency),
        active: c.active,
        usage: c.usage_limit.map_or_else(
            || c.usage_count.to_string(),
            |limit| format!("{}/{limit}", c.usage_count),
        ),
        expires_on: c.expires_on.map(format_record_date),
        exhausted: c.is_exhausted(),
        expired: c.is_expired(today),
    });

    tracing::debug!(matches = page.total_count, "Coupons listed");

    ListScreen {
        table: table_config(locale, list.facet, &counts),
        page,
        state: list.clone(),
        stats: counts,
    }
}

fn table_config(locale: Locale, selected: CouponFilter, counts: &CouponCounts) -> TableConfig {
    let mut config = TableConfig::new("coupons")
        .column(TableColumn::new("code", locale.pick("Código", "Code")))
        .column(TableColumn::new("description", locale.pick("Descrição", "Description")))
        .column(TableColumn::numeric("discount", locale.pick("Desconto", "Discount")))
        .column(TableColumn::numeric("usage", locale.pick("Usos", "Uses")))
        .column(TableColumn::new("expires_on", locale.pick("Validade", "Expires")))
        .search_placeholder(locale.pick(
            "Buscar por código ou descrição...",
            "Search by code or description...",
        ))
        .empty_state(locale.pick("Nenhum cupom encontrado", "No coupons found"), None);
    for option in CouponFilter::ALL {
        config = config.facet(
            FacetOption::new(option.as_str(), option.label(locale))
                .with_count(counts.get(option))
                .selected(option == selected),
        );
    }
    config
}
