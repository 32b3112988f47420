//! Pure domain logic for the daytrip booking platform.
//!
//! No I/O lives here: the promo evaluator, checkout arithmetic, and input
//! validation are plain functions so they can be exercised without a
//! database or an HTTP stack.

pub mod booking;
pub mod error;
pub mod promo;
pub mod types;
