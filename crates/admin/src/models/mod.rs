//! Domain models for the back-office.
//!
//! Records are owned by the store and handed to screens as read-only
//! snapshots. Record dates use the `DD/MM/YYYY` layout on the wire.

pub mod coupon;
pub mod customer;
pub mod order;
pub mod review;

pub use coupon::{Coupon, Discount};
pub use customer::Customer;
pub use order::Order;
pub use review::Review;
