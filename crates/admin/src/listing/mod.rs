//! Filter/paginate pipeline shared by every list screen.
//!
//! A screen turns its [`ListState`] into a [`Filter`] (AND-composed
//! predicates), runs it over a store snapshot, optionally sorts the matches,
//! then slices one [`Page`] out of them.

pub mod pipeline;
pub mod state;
pub mod table;

pub use pipeline::{Filter, Page, filter_and_paginate, in_date_range, paginate, text_matches};
pub use state::{DEFAULT_PAGE_SIZE, ListAction, ListState, MAX_PAGE_SIZE};
pub use table::{FacetOption, TableColumn, TableConfig};
