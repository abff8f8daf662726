//! Core types for Magnet Kit.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod date;
pub mod id;
pub mod price;
pub mod status;

pub use date::{
    DateError, DateRange, FilterRange, RangeError, format_for_input, format_record_date,
    parse_input_date, parse_record_date,
};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use status::*;
