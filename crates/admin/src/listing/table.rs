//! Table descriptors for list screens.
//!
//! Screens describe their columns, facet tabs and empty state here so the
//! presentation layer can render any list the same way.

use serde::Serialize;

/// Column definition for a list table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    /// Key of the row field shown in the column.
    pub key: &'static str,
    /// Header label.
    pub label: String,
    /// Right-align the column (money, counts).
    pub numeric: bool,
}

impl TableColumn {
    /// Create a text column.
    #[must_use]
    pub fn new(key: &'static str, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            numeric: false,
        }
    }

    /// Create a right-aligned column.
    #[must_use]
    pub fn numeric(key: &'static str, label: impl Into<String>) -> Self {
        Self {
            numeric: true,
            ..Self::new(key, label)
        }
    }
}

/// One facet tab, optionally with the number of records behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    /// Value accepted by the screen's facet parser.
    pub value: String,
    pub label: String,
    pub count: Option<usize>,
    /// Whether this is the facet currently applied.
    pub selected: bool,
}

impl FacetOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            count: None,
            selected: false,
        }
    }

    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Configuration for a list table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableConfig {
    /// Unique table identifier.
    pub table_id: &'static str,
    pub columns: Vec<TableColumn>,
    pub facets: Vec<FacetOption>,
    pub search_placeholder: String,
    /// Shown instead of the table when the page is empty.
    pub empty_title: String,
    pub empty_description: Option<String>,
}

impl TableConfig {
    #[must_use]
    pub fn new(table_id: &'static str) -> Self {
        Self {
            table_id,
            columns: vec![],
            facets: vec![],
            search_placeholder: String::new(),
            empty_title: String::new(),
            empty_description: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a facet tab.
    #[must_use]
    pub fn facet(mut self, option: FacetOption) -> Self {
        self.facets.push(option);
        self
    }

    #[must_use]
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Set empty state text.
    #[must_use]
    pub fn empty_state(mut self, title: impl Into<String>, description: Option<&str>) -> Self {
        self.empty_title = title.into();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// Header labels in column order.
    #[must_use]
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }
}
