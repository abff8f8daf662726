//! Predicate chain and slice pagination.

use chrono::NaiveDate;
use serde::Serialize;

use magnet_kit_core::DateRange;

/// A conjunction of predicates over `T`.
///
/// An empty filter matches everything.
pub struct Filter<'a, T> {
    predicates: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
}

impl<T> Default for Filter<'_, T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<T> std::fmt::Debug for Filter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl<'a, T> Filter<'a, T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate; records must satisfy it and every earlier one.
    #[must_use]
    pub fn matching(mut self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    #[must_use]
    pub fn matches(&self, record: &T) -> bool {
        self.predicates.iter().all(|p| p(record))
    }

    /// Keep the matching records, in source order.
    pub fn apply<'r>(&self, records: impl IntoIterator<Item = &'r T>) -> Vec<&'r T>
    where
        T: 'r,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Case-insensitive substring search over several fields.
///
/// A blank query matches everything.
#[must_use]
pub fn text_matches(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Inclusive date-range check; no range matches everything.
#[must_use]
pub fn in_date_range(range: Option<&DateRange>, date: NaiveDate) -> bool {
    range.is_none_or(|r| r.filter_range().contains_date(date))
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served.
    pub page: usize,
    pub page_size: usize,
    /// `ceil(total_count / page_size)`; zero for an empty result.
    pub total_pages: usize,
    /// Number of records matching the filter, across all pages.
    pub total_count: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Convert the items, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_count: self.total_count,
        }
    }
}

/// Slice `records[(page-1)*page_size .. page*page_size]`.
///
/// Pages below 1 are served as page 1 and a page size of 0 as 1. A page past
/// the end yields no items.
#[must_use]
pub fn paginate<T>(records: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_count = records.len();
    let total_pages = total_count.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);

    let items = records.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        page,
        page_size,
        total_pages,
        total_count,
    }
}

/// Filter `records` and return the requested page.
pub fn filter_and_paginate<'r, T>(
    records: impl IntoIterator<Item = &'r T>,
    filter: &Filter<'_, T>,
    page: usize,
    page_size: usize,
) -> Page<&'r T>
where
    T: 'r,
{
    paginate(filter.apply(records), page, page_size)
}
