//! Magnet Kit Core - Shared types library.
//!
//! This crate provides common types used across all Magnet Kit components:
//! - `admin` - Back-office engine (analytics, list screens, mock store)
//! - `cli` - Command-line front-end for the back-office screens
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no storage,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, money, statuses, and calendar date normalization

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
