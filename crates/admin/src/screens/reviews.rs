//! Reviews moderation screen.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use magnet_kit_core::{ReviewId, ReviewStatus, format_record_date};

use super::ListScreen;
use crate::listing::{
    FacetOption, Filter, ListState, TableColumn, TableConfig, filter_and_paginate, in_date_range,
    text_matches,
};
use crate::locale::Locale;
use crate::models::Review;
use crate::state::AppState;

const STATUSES: [ReviewStatus; 3] = [
    ReviewStatus::Pending,
    ReviewStatus::Approved,
    ReviewStatus::Rejected,
];

/// Review facets: moderation status and star rating, each optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewFacet {
    #[serde(default)]
    pub status: Option<ReviewStatus>,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl ReviewFacet {
    fn admits(self, review: &Review) -> bool {
        self.status.is_none_or(|status| status == review.status)
            && self.rating.is_none_or(|rating| rating == review.rating)
    }
}

/// Review row for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewView {
    pub id: ReviewId,
    pub customer_name: String,
    pub product: String,
    pub rating: u8,
    /// Filled and empty stars, e.g. `★★★★☆`.
    pub stars: String,
    pub comment: String,
    pub status: ReviewStatus,
    pub status_label: &'static str,
    /// `DD/MM/YYYY`.
    pub date: String,
}

/// Moderation figures over every review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Mean rating of approved reviews, one decimal place; `None` when no
    /// review is approved.
    pub average_rating: Option<Decimal>,
}

impl ReviewStats {
    #[must_use]
    pub const fn get(&self, status: ReviewStatus) -> usize {
        match status {
            ReviewStatus::Pending => self.pending,
            ReviewStatus::Approved => self.approved,
            ReviewStatus::Rejected => self.rejected,
        }
    }
}

/// The reviews screen.
pub type ReviewsScreen = ListScreen<ReviewView, ReviewFacet, ReviewStats>;

/// Count reviews per status and average the approved ratings.
#[must_use]
pub fn review_stats(reviews: &[Review]) -> ReviewStats {
    let mut stats = ReviewStats {
        total: reviews.len(),
        ..ReviewStats::default()
    };
    let mut approved_sum = 0_u32;
    for review in reviews {
        match review.status {
            ReviewStatus::Pending => stats.pending += 1,
            ReviewStatus::Approved => {
                stats.approved += 1;
                approved_sum += u32::from(review.rating);
            }
            ReviewStatus::Rejected => stats.rejected += 1,
        }
    }
    stats.average_rating = Decimal::from(approved_sum)
        .checked_div(Decimal::from(stats.approved))
        .map(|avg| avg.round_dp(1));
    stats
}

/// Predicates for the reviews list. Search covers reviewer, product and
/// comment.
#[must_use]
pub fn filter(state: &ListState<ReviewFacet>) -> Filter<'_, Review> {
    let facet = state.facet;
    Filter::new()
        .matching(move |r: &Review| facet.admits(r))
        .matching(move |r: &Review| {
            text_matches(
                &state.search,
                &[
                    r.customer_name.as_str(),
                    r.product.as_str(),
                    r.comment.as_str(),
                ],
            )
        })
        .matching(move |r: &Review| in_date_range(state.date_range.as_ref(), r.date))
}

fn stars(rating: u8) -> String {
    let filled = rating.min(Review::MAX_RATING);
    let empty = Review::MAX_RATING - filled;
    "★".repeat(usize::from(filled)) + &"☆".repeat(usize::from(empty))
}

/// Build the reviews screen for `list`.
#[instrument(skip_all, fields(page = list.page))]
pub fn list(state: &AppState, list: &ListState<ReviewFacet>) -> ReviewsScreen {
    let reviews = state.reviews().snapshot();
    let locale = state.locale();

    let stats = review_stats(&reviews);
    let page = filter_and_paginate(reviews.iter(), &filter(list), list.page, list.page_size)
        .map(|r| ReviewView {
            id: r.id,
            customer_name: r.customer_name.clone(),
            product: r.product.clone(),
            rating: r.rating,
            stars: stars(r.rating),
            comment: r.comment.clone(),
            status: r.status,
            status_label: locale.review_status(r.status),
            date: format_record_date(r.date),
        });

    tracing::debug!(matches = page.total_count, "Reviews listed");

    ListScreen {
        table: table_config(locale, list.facet, &stats),
        page,
        state: list.clone(),
        stats,
    }
}

fn table_config(locale: Locale, selected: ReviewFacet, stats: &ReviewStats) -> TableConfig {
    let mut config = TableConfig::new("reviews")
        .column(TableColumn::new("customer_name", locale.pick("Cliente", "Customer")))
        .column(TableColumn::new("product", locale.pick("Produto", "Product")))
        .column(TableColumn::new("stars", locale.pick("Nota", "Rating")))
        .column(TableColumn::new("comment", locale.pick("Comentário", "Comment")))
        .column(TableColumn::new("status_label", "Status"))
        .column(TableColumn::new("date", locale.pick("Data", "Date")))
        .facet(
            FacetOption::new("all", locale.pick("Todas", "All"))
                .with_count(stats.total)
                .selected(selected.status.is_none()),
        )
        .search_placeholder(locale.pick(
            "Buscar por cliente, produto ou comentário...",
            "Search by customer, product or comment...",
        ))
        .empty_state(
            locale.pick("Nenhuma avaliação encontrada", "No reviews found"),
            None,
        );
    for status in STATUSES {
        config = config.facet(
            FacetOption::new(status.to_string(), locale.review_status(status))
                .with_count(stats.get(status))
                .selected(selected.status == Some(status)),
        );
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListAction;
    use crate::screens::test_support::seeded_state;

    fn ids(screen: &ReviewsScreen) -> Vec<i32> {
        screen.page.items.iter().map(|r| r.id.as_i32()).collect()
    }

    #[test]
    fn test_average_counts_only_approved() {
        let state = seeded_state();
        let stats = review_stats(&state.reviews().snapshot());
        assert_eq!(stats.average_rating, Some(Decimal::new(45, 1)));
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.total, 4);
    }

    #[test]
    fn test_no_approved_reviews_has_no_average() {
        assert_eq!(review_stats(&[]).average_rating, None);
    }

    #[test]
    fn test_status_and_rating_facets_compose() {
        let state = seeded_state();
        let approved = ListState::default().reduce(ListAction::Facet(ReviewFacet {
            status: Some(ReviewStatus::Approved),
            rating: None,
        }));
        assert_eq!(ids(&list(&state, &approved)), [1, 2]);

        let five_stars = approved.reduce(ListAction::Facet(ReviewFacet {
            status: Some(ReviewStatus::Approved),
            rating: Some(5),
        }));
        let screen = list(&state, &five_stars);
        assert_eq!(ids(&screen), [1]);
        assert_eq!(screen.page.items.first().map(|r| r.stars.as_str()), Some("★★★★★"));
    }

    #[test]
    fn test_search_matches_comment_and_product() {
        let state = seeded_state();
        let by_comment = ListState::default().reduce(ListAction::Search("rápido".to_owned()));
        assert_eq!(ids(&list(&state, &by_comment)), [2]);

        let by_product = ListState::default().reduce(ListAction::Search("kit 9".to_owned()));
        assert_eq!(ids(&list(&state, &by_product)), [1, 3, 4]);
    }

    #[test]
    fn test_moderation_is_visible_in_next_build() {
        let state = seeded_state();
        state.reviews().approve(ReviewId::new(3)).expect("approve");
        let screen = list(&state, &ListState::default());
        assert_eq!(screen.stats.approved, 3);
        assert_eq!(screen.stats.average_rating, Some(Decimal::new(37, 1)));
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
