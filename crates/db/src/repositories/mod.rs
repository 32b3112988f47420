//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or a transaction executor) as the first argument.

pub mod booking_repo;
pub mod experience_repo;
pub mod slot_repo;

pub use booking_repo::BookingRepo;
pub use experience_repo::ExperienceRepo;
pub use slot_repo::SlotRepo;
