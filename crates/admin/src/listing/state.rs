//! Serializable list-screen state and its reducer.

use serde::{Deserialize, Serialize};

use magnet_kit_core::DateRange;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound accepted for a page size.
pub const MAX_PAGE_SIZE: usize = 100;

/// Filter and pagination state for one list screen.
///
/// `F` is the screen's facet (order view, review status, ...). The default
/// facet means "no facet filter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "F: Serialize",
    deserialize = "F: Deserialize<'de> + Default"
))]
pub struct ListState<F> {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub facet: F,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

const fn first_page() -> usize {
    1
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl<F: Default + PartialEq> Default for ListState<F> {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

/// A user interaction on a list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ListAction<F> {
    Search(String),
    Facet(F),
    DateRange(Option<DateRange>),
    PageSize(usize),
    GoTo(usize),
    /// Back to the default filters on page 1; the page size is kept.
    ClearFilters,
}

impl<F: Default + PartialEq> ListState<F> {
    /// Default filters on page 1 with the given page size (clamped to
    /// `1..=MAX_PAGE_SIZE`).
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search: String::new(),
            facet: F::default(),
            date_range: None,
            page: 1,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Apply an action and return the next state.
    ///
    /// Any change to a filter or to the page size sends the user back to
    /// page 1. Re-submitting the current value leaves the page alone.
    #[must_use]
    pub fn reduce(mut self, action: ListAction<F>) -> Self {
        let changed = match action {
            ListAction::Search(search) => replace_if_changed(&mut self.search, search),
            ListAction::Facet(facet) => replace_if_changed(&mut self.facet, facet),
            ListAction::DateRange(range) => replace_if_changed(&mut self.date_range, range),
            ListAction::PageSize(size) => {
                replace_if_changed(&mut self.page_size, size.clamp(1, MAX_PAGE_SIZE))
            }
            ListAction::GoTo(page) => {
                self.page = page.max(1);
                false
            }
            ListAction::ClearFilters => {
                self = Self::with_page_size(self.page_size);
                false
            }
        };
        if changed {
            self.page = 1;
        }
        self
    }

    /// Whether any filter differs from its default.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.facet != F::default() || self.date_range.is_some()
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
